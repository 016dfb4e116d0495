//! Core analysis engine.
//!
//! ## Module Structure
//!
//! - `data`: The TS document model and location types
//! - `parsers`: Qt Linguist `.ts` parsing
//! - `writer`: Canonical serialization back to `.ts`
//! - `catalog`: (context, source) lookup over a parsed document
//! - `scanner`: Catalog file discovery
//! - `context`: `CheckContext` orchestrating config, discovery and parsing

pub mod catalog;
pub mod context;
pub mod data;
pub mod parsers;
pub mod scanner;
pub mod writer;

pub use catalog::{Catalog, CatalogEntry, DuplicateEntry};
pub use context::{CheckContext, ParsedCatalog, parse_catalog_files};
pub use data::{CatalogLocation, TranslationStatus, TsContext, TsDocument, TsMessage};
pub use parsers::ts::{TsParseError, parse_ts, parse_ts_file};
pub use scanner::{display_path, scan_catalog_files};
pub use writer::write_ts;
