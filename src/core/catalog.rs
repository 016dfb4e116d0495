//! Active lookup over a parsed catalog.
//!
//! A [`Catalog`] indexes a [`TsDocument`] by (context, source) so the
//! query surface can resolve translations the way the host toolkit does:
//! finished entries with a non-empty translation resolve to the
//! translation, everything else falls back to the source text.
//!
//! Duplicate (context, source) pairs are last-wins for the index; every
//! shadowed occurrence is recorded so the `duplicate` check rule can
//! report it instead of leaving the ambiguity silent.

use std::collections::HashMap;

use crate::core::data::{TranslationStatus, TsDocument};

/// One indexed translation entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    pub context: String,
    pub source: String,
    pub translation: String,
    pub status: TranslationStatus,
    pub comment: Option<String>,
    /// Line of the `<message>` element this entry came from.
    pub line: usize,
}

impl CatalogEntry {
    /// True when the entry contributes to active lookup.
    pub fn is_active(&self) -> bool {
        self.status == TranslationStatus::Finished && !self.translation.is_empty()
    }
}

/// A shadowed duplicate of a (context, source) pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateEntry {
    pub context: String,
    pub source: String,
    /// Line of the occurrence that was shadowed.
    pub first_line: usize,
    /// Line of the occurrence that won.
    pub last_line: usize,
}

#[derive(Debug, Default)]
pub struct Catalog {
    /// context name -> source text -> entry
    entries: HashMap<String, HashMap<String, CatalogEntry>>,
    duplicates: Vec<DuplicateEntry>,
    message_count: usize,
}

impl Catalog {
    pub fn from_document(document: &TsDocument) -> Self {
        let mut catalog = Catalog::default();
        for context in &document.contexts {
            let by_source = catalog.entries.entry(context.name.clone()).or_default();
            for message in &context.messages {
                catalog.message_count += 1;
                let entry = CatalogEntry {
                    context: context.name.clone(),
                    source: message.source.clone(),
                    translation: message.translation.clone(),
                    status: message.status,
                    comment: message.comment.clone(),
                    line: message.line,
                };
                if let Some(previous) = by_source.insert(message.source.clone(), entry) {
                    catalog.duplicates.push(DuplicateEntry {
                        context: context.name.clone(),
                        source: message.source.clone(),
                        first_line: previous.line,
                        last_line: message.line,
                    });
                }
            }
        }
        catalog
    }

    /// Fetch the entry for a (context, source) pair, whatever its status.
    pub fn get(&self, context: &str, source: &str) -> Option<&CatalogEntry> {
        self.entries.get(context)?.get(source)
    }

    /// Active lookup: the translation for display, or `None` when the
    /// entry is absent, unfinished, retired, or empty.
    pub fn lookup(&self, context: &str, source: &str) -> Option<&str> {
        self.get(context, source)
            .filter(|entry| entry.is_active())
            .map(|entry| entry.translation.as_str())
    }

    /// Display resolution: active lookup with fallback to the source
    /// text, mirroring what the host toolkit shows for untranslated
    /// strings.
    pub fn resolve<'a>(&'a self, context: &str, source: &'a str) -> &'a str {
        self.lookup(context, source).unwrap_or(source)
    }

    /// Shadowed duplicate (context, source) occurrences, in document order.
    pub fn duplicates(&self) -> &[DuplicateEntry] {
        &self.duplicates
    }

    /// Number of messages indexed, duplicates included.
    pub fn message_count(&self) -> usize {
        self.message_count
    }

    /// Number of entries contributing to active lookup.
    pub fn active_count(&self) -> usize {
        self.entries
            .values()
            .flat_map(|by_source| by_source.values())
            .filter(|entry| entry.is_active())
            .count()
    }
}
