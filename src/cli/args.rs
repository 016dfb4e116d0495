//! CLI argument definitions using clap.
//!
//! This module defines the command-line interface structure for all lingo
//! commands. It uses clap's derive API for declarative argument parsing.
//!
//! ## Commands
//!
//! - `check`: Run catalog checks (unfinished, duplicate, placeholder, ...)
//! - `query`: Resolve one (context, source) lookup
//! - `stats`: Per-catalog completion statistics
//! - `fmt`: Rewrite catalogs in canonical form
//! - `clean`: Remove vanished/obsolete entries
//! - `init`: Initialize lingo configuration file
//! - `serve`: Start MCP server for AI integration

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand, ValueEnum};

use super::commands::check::CheckRule;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Check(cmd)) => cmd.args.common.verbose,
            Some(Command::Query(cmd)) => cmd.args.common.verbose,
            Some(Command::Stats(cmd)) => cmd.args.common.verbose,
            Some(Command::Fmt(cmd)) => cmd.args.common.verbose,
            Some(Command::Clean(cmd)) => cmd.args.common.verbose,
            Some(Command::Init) | Some(Command::Serve) | None => false,
        }
    }
}

/// Common arguments shared by all commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Project root directory
    #[arg(long, default_value = ".")]
    pub path: PathBuf,

    /// Translations directory (overrides config file)
    #[arg(long)]
    pub translations_root: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Parser)]
pub struct CheckArgs {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct CheckCommand {
    /// Rules to run (default: all)
    #[arg(value_enum)]
    pub rules: Vec<CheckRule>,
    #[command(flatten)]
    pub args: CheckArgs,
}

#[derive(Debug, Parser)]
pub struct QueryArgs {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct QueryCommand {
    /// Context name (e.g., "MainWindow")
    pub context: String,
    /// Source text to resolve
    pub source: String,
    /// Restrict the lookup to one catalog file
    #[arg(long)]
    pub file: Option<PathBuf>,
    #[command(flatten)]
    pub args: QueryArgs,
}

#[derive(Debug, Parser)]
pub struct StatsArgs {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct StatsCommand {
    /// Emit machine-readable JSON instead of text
    #[arg(long)]
    pub json: bool,
    #[command(flatten)]
    pub args: StatsArgs,
}

#[derive(Debug, Parser)]
pub struct FmtArgs {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct FmtCommand {
    /// Report files that are not canonical without rewriting them
    #[arg(long)]
    pub check: bool,
    #[command(flatten)]
    pub args: FmtArgs,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum CleanStatus {
    Vanished,
    Obsolete,
}

#[derive(Debug, Parser)]
pub struct CleanArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Actually remove entries (default is dry-run)
    #[arg(long)]
    pub apply: bool,

    /// Statuses to clean (default: all)
    /// Can be specified multiple times: --statuses vanished --statuses obsolete
    #[arg(long, value_enum)]
    pub statuses: Vec<CleanStatus>,
}

#[derive(Debug, Args)]
pub struct CleanCommand {
    #[command(flatten)]
    pub args: CleanArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Check catalogs for translation issues (unfinished, duplicate, placeholder, mnemonic, stale)
    Check(CheckCommand),
    /// Resolve a (context, source) pair to its active translation
    Query(QueryCommand),
    /// Show per-catalog completion statistics
    Stats(StatsCommand),
    /// Rewrite catalogs in canonical Qt Linguist form
    Fmt(FmtCommand),
    /// Remove vanished or obsolete entries from catalogs
    Clean(CleanCommand),
    /// Initialize a new .lingorc.json configuration file
    Init,
    /// Start MCP server for AI coding agents
    Serve,
}
