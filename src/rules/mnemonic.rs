//! Keyboard mnemonic mismatch rule.
//!
//! In Qt UI strings, `&` marks the following character as the keyboard
//! accelerator (`&File` → Alt+F), and `&&` is a literal ampersand. When a
//! source string defines a mnemonic, the finished translation should
//! define one too, and a translation should not invent one the source
//! lacks.

use std::collections::HashSet;

use crate::config::Config;
use crate::core::{CatalogLocation, CheckContext, ParsedCatalog};
use crate::issues::MnemonicIssue;

/// True when the text carries a keyboard mnemonic marker.
///
/// `&&` escapes a literal ampersand and does not count.
pub fn has_mnemonic(text: &str) -> bool {
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '&' {
            match chars.peek() {
                Some('&') => {
                    chars.next();
                }
                Some(next) if next.is_alphanumeric() => return true,
                _ => {}
            }
        }
    }
    false
}

pub fn check_mnemonic_issues(ctx: &CheckContext) -> Vec<MnemonicIssue> {
    check_mnemonics(ctx.catalogs(), &ctx.config)
}

/// Check finished translations for mnemonic presence mismatches.
pub fn check_mnemonics(catalogs: &[ParsedCatalog], config: &Config) -> Vec<MnemonicIssue> {
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
                let source_has = has_mnemonic(&message.source);
                let translation_has = has_mnemonic(&message.translation);
                if source_has != translation_has {
                    issues.push(MnemonicIssue {
                        location: CatalogLocation::with_line(&parsed.file_path, message.line),
                        context: context.name.clone(),
                        source: message.source.clone(),
                        source_has_mnemonic: source_has,
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
