//! Rule implementations for lingo.
//!
//! This module contains pure functions that check parsed catalogs for
//! translation issues. Each function takes only the specific inputs it
//! needs (not a full context) and returns a specific issue type.
//!
//! ## Module Structure
//!
//! - `unfinished`: Entries without a usable translation
//! - `duplicate`: Duplicate (context, source) pairs
//! - `placeholder`: `%1`/`%n` token mismatches between source and translation
//! - `mnemonic`: `&` keyboard mnemonic mismatches
//! - `stale`: Vanished/obsolete entries retained in the catalog

pub mod duplicate;
pub mod mnemonic;
pub mod placeholder;
pub mod stale;
pub mod unfinished;
