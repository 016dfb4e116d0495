//! Lingo - Qt Linguist translation catalog checker
//!
//! Lingo is a CLI tool and library for parsing, validating, querying and
//! maintaining Qt Linguist `.ts` translation catalogs. It detects
//! unfinished entries, duplicate lookup keys, placeholder and mnemonic
//! mismatches, and retired entries that accumulate as the UI evolves.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (user-facing commands)
//! - `config`: Configuration file loading and parsing
//! - `core`: Core engine (document model, parser, writer, catalog lookup)
//! - `issues`: Issue type definitions and reporting
//! - `mcp`: Model Context Protocol server implementation
//! - `rules`: Detection rules for catalog issues
//! - `utils`: Shared utility functions

pub mod cli;
pub mod config;
pub mod core;
pub mod issues;
pub mod mcp;
pub mod rules;
pub mod utils;
