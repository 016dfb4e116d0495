//! Stale entry detection rule.
//!
//! Vanished and obsolete entries are reference data: they survive
//! round-trips and never serve lookups. They accumulate as the UI
//! evolves; this rule surfaces them as candidates for `lingo clean`.

use std::collections::HashSet;

use crate::config::Config;
use crate::core::{CatalogLocation, CheckContext, ParsedCatalog};
use crate::issues::StaleIssue;

pub fn check_stale_issues(ctx: &CheckContext) -> Vec<StaleIssue> {
    check_stale(ctx.catalogs(), &ctx.config)
}

pub fn check_stale(catalogs: &[ParsedCatalog], config: &Config) -> Vec<StaleIssue> {
    let ignore_contexts: HashSet<&str> =
        config.ignore_contexts.iter().map(String::as_str).collect();

    let mut issues = Vec::new();

    for parsed in catalogs {
        for context in &parsed.document.contexts {
            if ignore_contexts.contains(context.name.as_str()) {
                continue;
            }
            for message in &context.messages {
                if message.status.is_retired() {
                    issues.push(StaleIssue {
                        location: CatalogLocation::with_line(&parsed.file_path, message.line),
                        context: context.name.clone(),
                        source: message.source.clone(),
                        status: message.status,
                    });
                }
            }
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
