//! Core data types used across the pipeline.
//!
//! This module defines the fundamental data structures for representing
//! parsed catalogs and locations inside them.
//!
//! ## Module Structure
//!
//! - `document`: The TS document model (TsDocument, TsContext, TsMessage,
//!   TranslationStatus)
//! - `location`: Catalog file location type used in diagnostics

pub mod document;
pub mod location;

pub use document::{TranslationStatus, TsContext, TsDocument, TsMessage};
pub use location::CatalogLocation;
