//! Placeholder token mismatch rule.
//!
//! Qt substitutes `%1`..`%99` (and `%n` / `%Ln` for counts) into both the
//! source and the translated string at display time. A finished
//! translation that drops or invents tokens breaks that substitution, so
//! the token sets must match.

use std::collections::{BTreeSet, HashSet};
use std::sync::LazyLock;

use regex::Regex;

use crate::config::Config;
use crate::core::{CatalogLocation, CheckContext, ParsedCatalog};
use crate::issues::PlaceholderIssue;

static PLACEHOLDER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"%Ln|%L?\d+|%n").unwrap());

/// Extract the set of placeholder tokens from a UI string.
///
/// Repeated occurrences of the same token collapse: Qt allows reusing
/// `%1` any number of times on either side.
pub fn placeholder_tokens(text: &str) -> BTreeSet<String> {
    PLACEHOLDER_REGEX
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}

pub fn check_placeholder_issues(ctx: &CheckContext) -> Vec<PlaceholderIssue> {
    check_placeholders(ctx.catalogs(), &ctx.config)
}

/// Check finished translations for placeholder token mismatches.
///
/// Unfinished and retired entries are skipped: there is nothing usable to
/// compare yet.
pub fn check_placeholders(catalogs: &[ParsedCatalog], config: &Config) -> Vec<PlaceholderIssue> {
    let ignore_contexts: HashSet<&str> =
        config.ignore_contexts.iter().map(String::as_str).collect();

    let mut issues = Vec::new();

    for parsed in catalogs {
        for context in &parsed.document.contexts {
            if ignore_contexts.contains(context.name.as_str()) {
                continue;
            }
            for message in &context.messages {
                if !message.is_active() {
                    continue;
                }
                let source_tokens = placeholder_tokens(&message.source);
                let translation_tokens = placeholder_tokens(&message.translation);
                if source_tokens == translation_tokens {
                    continue;
                }

                let missing: Vec<String> = source_tokens
                    .difference(&translation_tokens)
                    .cloned()
                    .collect();
                let extra: Vec<String> = translation_tokens
                    .difference(&source_tokens)
                    .cloned()
                    .collect();

                issues.push(PlaceholderIssue {
                    location: CatalogLocation::with_line(&parsed.file_path, message.line),
                    context: context.name.clone(),
                    source: message.source.clone(),
                    missing,
                    extra,
                });
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
