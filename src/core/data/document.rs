use std::fmt;

use serde::Serialize;

/// Lifecycle status of a translation entry.
///
/// Qt Linguist tracks entries relative to the live UI:
///
/// 1. **Finished**: translated and current (no `type` attribute on disk).
/// 2. **Unfinished**: present in the UI but not yet translated, or the
///    translation needs review (`type="unfinished"`).
/// 3. **Vanished**: the source string no longer exists in the UI; the
///    translation is retained for reference (`type="vanished"`).
/// 4. **Obsolete**: superseded; retained for reference (`type="obsolete"`).
///
/// Vanished and obsolete entries survive parse → serialize round-trips but
/// are excluded from active lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TranslationStatus {
    Finished,
    Unfinished,
    Vanished,
    Obsolete,
}

impl TranslationStatus {
    /// Parse the `type` attribute of a `<translation>` element.
    ///
    /// Absence of the attribute means the entry is finished.
    pub fn from_type_attr(value: &str) -> Option<Self> {
        match value {
            "unfinished" => Some(TranslationStatus::Unfinished),
            "vanished" => Some(TranslationStatus::Vanished),
            "obsolete" => Some(TranslationStatus::Obsolete),
            _ => None,
        }
    }

    /// The `type` attribute value written on disk, if any.
    pub fn type_attr(self) -> Option<&'static str> {
        match self {
            TranslationStatus::Finished => None,
            TranslationStatus::Unfinished => Some("unfinished"),
            TranslationStatus::Vanished => Some("vanished"),
            TranslationStatus::Obsolete => Some("obsolete"),
        }
    }

    /// True for entries kept only for reference (vanished/obsolete).
    pub fn is_retired(self) -> bool {
        matches!(
            self,
            TranslationStatus::Vanished | TranslationStatus::Obsolete
        )
    }
}

impl fmt::Display for TranslationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TranslationStatus::Finished => write!(f, "finished"),
            TranslationStatus::Unfinished => write!(f, "unfinished"),
            TranslationStatus::Vanished => write!(f, "vanished"),
            TranslationStatus::Obsolete => write!(f, "obsolete"),
        }
    }
}

/// A single translation entry inside a context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TsMessage {
    /// The original-language UI string, used as lookup key. May contain
    /// placeholder tokens (`%1`) and mnemonic markers (`&File`).
    pub source: String,
    /// The localized string. Empty for untranslated entries.
    pub translation: String,
    pub status: TranslationStatus,
    /// Translator disambiguation note (`<comment>`), if any.
    pub comment: Option<String>,
    /// Line of the `<message>` element in the parsed file (1-indexed,
    /// 0 for documents built in memory).
    pub line: usize,
}

impl TsMessage {
    pub fn new(source: impl Into<String>, translation: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            translation: translation.into(),
            status: TranslationStatus::Finished,
            comment: None,
            line: 0,
        }
    }

    pub fn with_status(mut self, status: TranslationStatus) -> Self {
        self.status = status;
        self
    }

    /// True when the entry contributes to active lookup: finished with a
    /// non-empty translation.
    pub fn is_active(&self) -> bool {
        self.status == TranslationStatus::Finished && !self.translation.is_empty()
    }
}

/// A named grouping of translation entries, corresponding to one logical
/// UI component/class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TsContext {
    pub name: String,
    pub messages: Vec<TsMessage>,
}

impl TsContext {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            messages: Vec::new(),
        }
    }
}

/// A parsed Qt Linguist catalog.
///
/// Contexts and messages keep document order so that parse → serialize
/// round-trips preserve the on-disk layout.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TsDocument {
    /// TS format version (e.g., "2.1").
    pub version: Option<String>,
    /// Target language code (e.g., "fr").
    pub language: Option<String>,
    /// Source language code, if declared.
    pub source_language: Option<String>,
    pub contexts: Vec<TsContext>,
}

impl TsDocument {
    /// Total number of messages across all contexts.
    pub fn message_count(&self) -> usize {
        self.contexts.iter().map(|c| c.messages.len()).sum()
    }

    /// Find a context by name.
    pub fn context(&self, name: &str) -> Option<&TsContext> {
        self.contexts.iter().find(|c| c.name == name)
    }
}
