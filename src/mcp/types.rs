use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

// ============================================================
// Parameter Types
// ============================================================

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetConfigParams {
    /// Absolute path to the project root
    pub project_root_path: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetCatalogsParams {
    /// Absolute path to the project root
    pub project_root_path: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScanOverviewParams {
    /// Absolute path to the project root
    pub project_root_path: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScanIssuesParams {
    /// Absolute path to the project root
    pub project_root_path: String,
    /// Optional rule filter: unfinished, duplicate, placeholder, mnemonic, stale
    pub rule: Option<String>,
    /// Maximum number of items to return (default 20, max 100)
    pub limit: Option<u32>,
    /// Number of items to skip (default 0)
    pub offset: Option<u32>,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct QueryTranslationParams {
    /// Absolute path to the project root
    pub project_root_path: String,
    /// Context name (e.g., "MainWindow")
    pub context: String,
    /// Source text to resolve
    pub source: String,
}

// ============================================================
// Config Types (get_config)
// ============================================================

/// Configuration DTO for MCP
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConfigDto {
    /// True if config was loaded from a file, false if using defaults
    pub from_file: bool,
    pub config: ConfigValues,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConfigValues {
    pub translations_root: String,
    pub ignores: Vec<String>,
    pub ignore_contexts: Vec<String>,
    pub ignore_texts: Vec<String>,
}

impl From<crate::config::Config> for ConfigValues {
    fn from(c: crate::config::Config) -> Self {
        Self {
            translations_root: c.translations_root,
            ignores: c.ignores,
            ignore_contexts: c.ignore_contexts,
            ignore_texts: c.ignore_texts,
        }
    }
}

// ============================================================
// Catalog Types (get_catalogs)
// ============================================================

/// Result of get_catalogs operation
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CatalogsResult {
    pub translations_root: String,
    pub catalogs: Vec<CatalogInfo>,
}

/// Information about a single catalog file
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CatalogInfo {
    pub file_path: String,
    pub language: Option<String>,
    pub context_count: usize,
    pub message_count: usize,
}

// ============================================================
// Scan Types (scan_overview, scan_issues)
// ============================================================

/// Result of scan_overview operation
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScanOverviewResult {
    pub files_scanned: usize,
    pub parse_errors: usize,
    pub unfinished: usize,
    pub duplicate: usize,
    pub placeholder: usize,
    pub mnemonic: usize,
    pub stale: usize,
    pub total_errors: usize,
    pub total_warnings: usize,
}

/// A single catalog issue
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct IssueItem {
    pub rule: String,
    pub severity: String,
    pub file_path: String,
    pub line: usize,
    /// Context name, absent for parse errors
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
    /// Source text, absent for parse errors
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

/// Result of scan_issues operation
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScanIssuesResult {
    pub total_count: usize,
    pub items: Vec<IssueItem>,
    pub pagination: Pagination,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub offset: usize,
    pub limit: usize,
    pub has_more: bool,
}

// ============================================================
// Query Types (query_translation)
// ============================================================

/// Result of query_translation operation
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct QueryTranslationResult {
    /// True when any entry exists for the (context, source) pair
    pub found: bool,
    /// True when an active translation was returned
    pub translated: bool,
    /// The active translation, when there is one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub translation: Option<String>,
    /// Lifecycle status of the matched entry
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Display fallback (the source text) when no active translation exists
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fallback: Option<String>,
}
