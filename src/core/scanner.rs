//! Catalog file discovery.

use std::path::{Path, PathBuf};

use anyhow::Result;
use walkdir::WalkDir;

use crate::config::Config;

/// Discover `.ts` catalog files under the configured translations root.
///
/// Files matching a configured ignore glob (relative to the project root)
/// are skipped. Results are sorted for deterministic output.
pub fn scan_catalog_files(root: &Path, config: &Config) -> Result<Vec<PathBuf>> {
    let translations_root = root.join(&config.translations_root);
    let ignores = config.ignore_patterns()?;

    let mut files = Vec::new();
    if !translations_root.is_dir() {
        return Ok(files);
    }

    for entry in WalkDir::new(&translations_root).follow_links(false) {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        if path.extension().and_then(|e| e.to_str()) != Some("ts") {
            continue;
        }
        let relative = path.strip_prefix(root).unwrap_or(path);
        if ignores.iter().any(|pattern| pattern.matches_path(relative)) {
            continue;
        }
        files.push(path.to_path_buf());
    }

    files.sort();
    Ok(files)
}

/// Render a path relative to the project root for display.
pub fn display_path(path: &Path, root: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .to_string_lossy()
        .to_string()
}
