//! Core analysis context.
//!
//! `CheckContext` is the central orchestrator for catalog analysis. It
//! manages configuration, file discovery, and lazy parsing of the
//! discovered catalogs.
//!
//! Configuration is loaded with the following priority (highest to
//! lowest): CLI arguments, `.lingorc.json` config file, built-in
//! defaults.

use std::cell::OnceCell;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use rayon::prelude::*;

use crate::config::{Config, load_config};
use crate::core::catalog::Catalog;
use crate::core::data::TsDocument;
use crate::core::parsers::ts::parse_ts;
use crate::core::scanner::{display_path, scan_catalog_files};
use crate::issues::ParseErrorIssue;

/// A successfully parsed catalog file.
pub struct ParsedCatalog {
    /// Path relative to the project root, for display.
    pub file_path: String,
    /// Raw file content, kept for canonical-form comparison.
    pub content: String,
    pub document: TsDocument,
    pub catalog: Catalog,
}

pub struct CheckContext {
    /// Merged configuration (CLI args > config file > defaults).
    pub config: Config,
    /// Project root directory (for resolving relative paths).
    pub root_dir: PathBuf,
    /// Discovered catalog files, sorted.
    pub files: Vec<PathBuf>,
    /// Whether to print verbose diagnostic messages.
    pub verbose: bool,

    /// Parsed catalogs and per-file parse failures.
    /// Initialized on first access.
    parsed: OnceCell<(Vec<ParsedCatalog>, Vec<ParseErrorIssue>)>,
}

impl CheckContext {
    pub fn new(
        path: &Path,
        translations_root: Option<&Path>,
        verbose: bool,
    ) -> Result<Self> {
        let root_dir = path
            .canonicalize()
            .with_context(|| format!("Project root not found: {:?}", path))?;

        let mut config = load_config(&root_dir)?.config;
        if let Some(dir) = translations_root {
            config.translations_root = dir.to_string_lossy().to_string();
        }

        let files = scan_catalog_files(&root_dir, &config)?;

        Ok(Self {
            config,
            root_dir,
            files,
            verbose,
            parsed: OnceCell::new(),
        })
    }

    pub fn catalogs(&self) -> &[ParsedCatalog] {
        &self.parsed().0
    }

    pub fn parse_errors(&self) -> &[ParseErrorIssue] {
        &self.parsed().1
    }

    fn parsed(&self) -> &(Vec<ParsedCatalog>, Vec<ParseErrorIssue>) {
        self.parsed
            .get_or_init(|| parse_catalog_files(&self.files, &self.root_dir))
    }
}

/// Parse catalog files in parallel, partitioning successes and failures.
pub fn parse_catalog_files(
    files: &[PathBuf],
    root: &Path,
) -> (Vec<ParsedCatalog>, Vec<ParseErrorIssue>) {
    let results: Vec<Result<ParsedCatalog, ParseErrorIssue>> = files
        .par_iter()
        .map(|path| {
            let file_path = display_path(path, root);
            let content = fs::read_to_string(path).map_err(|err| ParseErrorIssue {
                file_path: file_path.clone(),
                error: format!("Failed to read file: {}", err),
                line: 0,
                col: 0,
            })?;
            match parse_ts(&content) {
                Ok(document) => {
                    let catalog = Catalog::from_document(&document);
                    Ok(ParsedCatalog {
                        file_path,
                        content,
                        document,
                        catalog,
                    })
                }
                Err(err) => Err(ParseErrorIssue {
                    file_path,
                    error: err.message,
                    line: err.line,
                    col: err.col,
                }),
            }
        })
        .collect();

    let mut catalogs = Vec::new();
    let mut errors = Vec::new();
    for result in results {
        match result {
            Ok(parsed) => catalogs.push(parsed),
            Err(issue) => errors.push(issue),
        }
    }
    (catalogs, errors)
}
