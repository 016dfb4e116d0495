//! Unfinished entry detection rule.
//!
//! Detects entries that ship without a usable translation: marked
//! `unfinished`, or finished with an empty translation. At display time
//! both fall back to the source text, so the catalog is incomplete.

use std::collections::HashSet;

use crate::config::Config;
use crate::core::{CatalogLocation, CheckContext, ParsedCatalog, TranslationStatus};
use crate::issues::UnfinishedIssue;
use crate::utils::contains_alphabetic;

pub fn check_unfinished_issues(ctx: &CheckContext) -> Vec<UnfinishedIssue> {
    check_unfinished(ctx.catalogs(), &ctx.config)
}

/// Check for entries without a usable translation.
///
/// Skips retired entries (they are the `stale` rule's concern), source
/// texts without alphabetic characters (separators, number formats), and
/// contexts/texts the config exempts.
pub fn check_unfinished(catalogs: &[ParsedCatalog], config: &Config) -> Vec<UnfinishedIssue> {
    let ignore_contexts: HashSet<&str> =
        config.ignore_contexts.iter().map(String::as_str).collect();
    let ignore_texts: HashSet<&str> = config.ignore_texts.iter().map(String::as_str).collect();

    let mut issues = Vec::new();

    for parsed in catalogs {
        for context in &parsed.document.contexts {
            if ignore_contexts.contains(context.name.as_str()) {
                continue;
            }
            for message in &context.messages {
                if message.status.is_retired() {
                    continue;
                }
                if !contains_alphabetic(&message.source) {
                    continue;
                }
                if ignore_texts.contains(message.source.as_str()) {
                    continue;
                }
                let unusable = message.status == TranslationStatus::Unfinished
                    || message.translation.is_empty();
                if unusable {
                    issues.push(UnfinishedIssue {
                        location: CatalogLocation::with_line(&parsed.file_path, message.line),
                        context: context.name.clone(),
                        source: message.source.clone(),
                        status: message.status,
                    });
                }
            }
        }
    }

    // Sort by file path, then line for deterministic output
    issues.sort_by(|a, b| {
        a.location
            .file_path
            .cmp(&b.location.file_path)
            .then_with(|| a.location.line.cmp(&b.location.line))
            .then_with(|| a.source.cmp(&b.source))
    });

    issues
}
