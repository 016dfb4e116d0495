//! Model Context Protocol (MCP) server implementation.
//!
//! This module provides an MCP server that exposes lingo's read-only
//! surface to AI assistants. The server implements the MCP specification
//! for tool calling; catalog mutation stays in the CLI (`fmt`, `clean`).
//!
//! ## Module Structure
//!
//! - `server`: Main MCP server implementation
//! - `types`: MCP-specific type definitions

mod server;
pub mod types;

pub use server::{LingoMcpServer, run_server};
