//! Issue types for catalog analysis results.
//!
//! This module defines all issue types that can be detected while checking
//! translation catalogs. Each issue is self-contained with all information
//! needed by:
//! - Reporter: to display the issue to users (CLI, MCP, etc.)
//! - Commands: to act on the issue (clean retired entries, etc.)

use enum_dispatch::enum_dispatch;

use crate::core::{CatalogLocation, TranslationStatus};

// ============================================================
// Severity and Rule
// ============================================================

/// Severity level of an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// Rule identifier for each issue type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Rule {
    Unfinished,
    Duplicate,
    Placeholder,
    Mnemonic,
    Stale,
    ParseError,
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rule::Unfinished => write!(f, "unfinished"),
            Rule::Duplicate => write!(f, "duplicate"),
            Rule::Placeholder => write!(f, "placeholder"),
            Rule::Mnemonic => write!(f, "mnemonic"),
            Rule::Stale => write!(f, "stale"),
            Rule::ParseError => write!(f, "parse-error"),
        }
    }
}

// ============================================================
// Issue Types
// ============================================================

/// Entry without a usable translation: marked unfinished, or finished
/// with an empty translation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnfinishedIssue {
    pub location: CatalogLocation,
    pub context: String,
    /// The untranslated source text.
    pub source: String,
    pub status: TranslationStatus,
}

impl UnfinishedIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::Unfinished
    }
}

/// Duplicate (context, source) pair. The later occurrence shadows the
/// earlier one in lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateIssue {
    /// Location of the shadowing (later) occurrence.
    pub location: CatalogLocation,
    pub context: String,
    pub source: String,
    /// Line of the shadowed (earlier) occurrence.
    pub first_line: usize,
}

impl DuplicateIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::Duplicate
    }
}

/// Placeholder tokens (`%1`, `%n`) differ between source and translation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceholderIssue {
    pub location: CatalogLocation,
    pub context: String,
    pub source: String,
    /// Tokens present in the source but missing from the translation.
    pub missing: Vec<String>,
    /// Tokens present in the translation but not in the source.
    pub extra: Vec<String>,
}

impl PlaceholderIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::Placeholder
    }
}

/// Keyboard mnemonic (`&File`) present on one side only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MnemonicIssue {
    pub location: CatalogLocation,
    pub context: String,
    pub source: String,
    /// True when the source defines the mnemonic the translation lacks.
    pub source_has_mnemonic: bool,
}

impl MnemonicIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::Mnemonic
    }
}

/// Vanished/obsolete entry still present in the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaleIssue {
    pub location: CatalogLocation,
    pub context: String,
    pub source: String,
    pub status: TranslationStatus,
}

impl StaleIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::Stale
    }
}

/// File could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseErrorIssue {
    pub file_path: String,
    pub error: String,
    /// Line of the failure (1-indexed, 0 when unknown).
    pub line: usize,
    /// Column of the failure (1-indexed, 0 when unknown).
    pub col: usize,
}

impl ParseErrorIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::ParseError
    }
}

// ============================================================
// Issue Enum
// ============================================================

/// A catalog issue found during analysis.
#[enum_dispatch(Report)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Issue {
    Unfinished(UnfinishedIssue),
    Duplicate(DuplicateIssue),
    Placeholder(PlaceholderIssue),
    Mnemonic(MnemonicIssue),
    Stale(StaleIssue),
    ParseError(ParseErrorIssue),
}

impl Issue {
    pub fn severity(&self) -> Severity {
        match self {
            Issue::Unfinished(_) => UnfinishedIssue::severity(),
            Issue::Duplicate(_) => DuplicateIssue::severity(),
            Issue::Placeholder(_) => PlaceholderIssue::severity(),
            Issue::Mnemonic(_) => MnemonicIssue::severity(),
            Issue::Stale(_) => StaleIssue::severity(),
            Issue::ParseError(_) => ParseErrorIssue::severity(),
        }
    }

    pub fn rule(&self) -> Rule {
        match self {
            Issue::Unfinished(_) => UnfinishedIssue::rule(),
            Issue::Duplicate(_) => DuplicateIssue::rule(),
            Issue::Placeholder(_) => PlaceholderIssue::rule(),
            Issue::Mnemonic(_) => MnemonicIssue::rule(),
            Issue::Stale(_) => StaleIssue::rule(),
            Issue::ParseError(_) => ParseErrorIssue::rule(),
        }
    }
}

/// Sort issues by file path, then line, then column for deterministic
/// output.
pub fn compare_issues(a: &Issue, b: &Issue) -> std::cmp::Ordering {
    let (a_path, a_line, a_col) = location_info(&a.location());
    let (b_path, b_line, b_col) = location_info(&b.location());

    a_path
        .cmp(b_path)
        .then_with(|| a_line.cmp(&b_line))
        .then_with(|| a_col.cmp(&b_col))
}

/// Extract (path, line, col) from a report location.
pub fn location_info<'a>(loc: &ReportLocation<'a>) -> (&'a str, usize, usize) {
    match loc {
        ReportLocation::Entry(location) => {
            (location.file_path.as_str(), location.line, location.col)
        }
        ReportLocation::File { path, line, col } => (*path, *line, *col),
    }
}

// ============================================================
// Report Trait (for CLI output)
// ============================================================

/// Location information for report output.
pub enum ReportLocation<'a> {
    /// A located catalog entry.
    Entry(&'a CatalogLocation),
    /// File-level location (for parse errors).
    File {
        path: &'a str,
        line: usize,
        col: usize,
    },
}

/// Trait for types that can be reported to CLI.
///
/// This trait is implemented by all issue types to provide a consistent
/// interface for the report functions. Uses `enum_dispatch` for zero-cost
/// dispatch on the `Issue` enum.
#[enum_dispatch]
pub trait Report {
    /// Get the location for this issue.
    fn location(&self) -> ReportLocation<'_>;

    /// Primary message to display (source text, error, etc.).
    fn message(&self) -> String;

    /// Severity level.
    fn report_severity(&self) -> Severity;

    /// Rule identifier.
    fn report_rule(&self) -> Rule;

    /// Optional hint for fixing the issue.
    fn hint(&self) -> Option<&str> {
        None
    }

    /// Optional details for the "= note:" line.
    fn details(&self) -> Option<String> {
        None
    }
}

// ============================================================
// Report Implementations
// ============================================================

impl Report for UnfinishedIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Entry(&self.location)
    }

    fn message(&self) -> String {
        self.source.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        let reason = if self.status == TranslationStatus::Unfinished {
            "marked unfinished"
        } else {
            "empty translation"
        };
        Some(format!("{} in context \"{}\"", reason, self.context))
    }
}

impl Report for DuplicateIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Entry(&self.location)
    }

    fn message(&self) -> String {
        self.source.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some(format!(
            "context \"{}\" already defines this source at line {}",
            self.context, self.first_line
        ))
    }

    fn hint(&self) -> Option<&str> {
        Some("remove or merge the duplicated <message> entries")
    }
}

impl Report for PlaceholderIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Entry(&self.location)
    }

    fn message(&self) -> String {
        self.source.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        let mut parts = Vec::new();
        if !self.missing.is_empty() {
            parts.push(format!(
                "translation is missing {}",
                self.missing.join(", ")
            ));
        }
        if !self.extra.is_empty() {
            parts.push(format!(
                "translation adds unexpected {}",
                self.extra.join(", ")
            ));
        }
        Some(parts.join("; "))
    }
}

impl Report for MnemonicIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Entry(&self.location)
    }

    fn message(&self) -> String {
        self.source.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        if self.source_has_mnemonic {
            Some("source defines a keyboard mnemonic but the translation does not".to_string())
        } else {
            Some("translation introduces a keyboard mnemonic the source does not have".to_string())
        }
    }
}

impl Report for StaleIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Entry(&self.location)
    }

    fn message(&self) -> String {
        self.source.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some(format!(
            "marked {} in context \"{}\"",
            self.status, self.context
        ))
    }

    fn hint(&self) -> Option<&str> {
        Some("run `lingo clean --apply` to remove retired entries")
    }
}

impl Report for ParseErrorIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::File {
            path: &self.file_path,
            line: self.line,
            col: self.col,
        }
    }

    fn message(&self) -> String {
        self.error.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }
}
