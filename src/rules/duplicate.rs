//! Duplicate (context, source) detection rule.
//!
//! Within a context the source text is the lookup key, so it must be
//! unique. The catalog index is last-wins; every shadowed occurrence is
//! surfaced here so the ambiguity is never silent.

use crate::core::{CatalogLocation, CheckContext, ParsedCatalog};
use crate::issues::DuplicateIssue;

pub fn check_duplicate_issues(ctx: &CheckContext) -> Vec<DuplicateIssue> {
    check_duplicates(ctx.catalogs())
}

pub fn check_duplicates(catalogs: &[ParsedCatalog]) -> Vec<DuplicateIssue> {
    let mut issues = Vec::new();

    for parsed in catalogs {
        for duplicate in parsed.catalog.duplicates() {
            issues.push(DuplicateIssue {
                location: CatalogLocation::with_line(&parsed.file_path, duplicate.last_line),
                context: duplicate.context.clone(),
                source: duplicate.source.clone(),
                first_line: duplicate.first_line,
            });
        }
    }

    issues.sort_by(|a, b| {
        a.location
            .file_path
            .cmp(&b.location.file_path)
            .then_with(|| a.location.line.cmp(&b.location.line))
            .then_with(|| a.source.cmp(&b.source))
    });

    issues
}
