pub mod check;
pub mod clean;
mod command_result;
pub mod fmt;
pub mod helper;
pub mod query;
pub mod stats;

pub use command_result::*;

use serde::Serialize;

use crate::core::TranslationStatus;
use crate::issues::StaleIssue;

#[derive(Debug)]
pub enum CommandSummary {
    Check,
    Query(QuerySummary),
    Stats(StatsSummary),
    Fmt(FmtSummary),
    Clean(CleanSummary),
    Init(InitSummary),
}

#[derive(Debug)]
pub struct QuerySummary {
    pub context: String,
    pub source: String,
    pub outcome: QueryOutcome,
}

#[derive(Debug)]
pub enum QueryOutcome {
    /// An active translation was found.
    Translated {
        translation: String,
        file_path: String,
    },
    /// The entry exists but has no usable translation; display falls
    /// back to the source text.
    Untranslated { status: TranslationStatus },
    /// No entry for the (context, source) pair at all.
    NotFound,
}

/// Per-catalog entry counts by status.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogStats {
    pub file_path: String,
    pub language: Option<String>,
    pub contexts: usize,
    pub messages: usize,
    pub finished: usize,
    pub unfinished: usize,
    pub vanished: usize,
    pub obsolete: usize,
}

impl CatalogStats {
    /// Share of non-retired entries that are finished, in percent.
    pub fn completion(&self) -> f64 {
        let live = self.finished + self.unfinished;
        if live == 0 {
            100.0
        } else {
            self.finished as f64 * 100.0 / live as f64
        }
    }
}

#[derive(Debug)]
pub struct StatsSummary {
    pub json: bool,
    pub files: Vec<CatalogStats>,
}

#[derive(Debug)]
pub struct FmtSummary {
    /// Files that were (or would be) rewritten.
    pub changed: Vec<String>,
    pub unchanged_count: usize,
    pub is_check: bool,
}

#[derive(Debug)]
pub struct CleanSummary {
    pub vanished_count: usize,
    pub obsolete_count: usize,
    pub file_count: usize,
    pub is_apply: bool,
    pub stale_issues: Vec<StaleIssue>,
}

#[derive(Debug)]
pub struct InitSummary {
    pub created: bool,
}
