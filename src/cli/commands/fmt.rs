use std::fs;

use anyhow::{Context as _, Ok, Result};

use super::super::args::FmtCommand;
use super::{CommandResult, CommandSummary, FmtSummary, helper::finish};
use crate::{
    core::{CheckContext, write_ts},
    issues::Issue,
};

/// Rewrite catalogs in canonical Qt Linguist form.
///
/// With `--check`, files that are not canonical are reported and counted
/// as errors instead of being rewritten.
pub fn fmt(cmd: FmtCommand) -> Result<CommandResult> {
    let args = &cmd.args;
    let ctx = CheckContext::new(
        &args.common.path,
        args.common.translations_root.as_deref(),
        args.common.verbose,
    )?;

    let mut changed = Vec::new();
    let mut unchanged_count = 0;

    for parsed in ctx.catalogs() {
        let canonical = write_ts(&parsed.document);
        if canonical == parsed.content {
            unchanged_count += 1;
            continue;
        }
        if !cmd.check {
            let path = ctx.root_dir.join(&parsed.file_path);
            fs::write(&path, &canonical)
                .with_context(|| format!("Failed to write catalog file: {:?}", path))?;
        }
        changed.push(parsed.file_path.clone());
    }

    let changed_count = changed.len();

    let mut result = finish(
        CommandSummary::Fmt(FmtSummary {
            changed,
            unchanged_count,
            is_check: cmd.check,
        }),
        ctx.parse_errors()
            .iter()
            .map(|i| Issue::ParseError(i.clone()))
            .collect(),
        ctx.files.len(),
        true,
    );
    if cmd.check {
        // Non-canonical files fail `fmt --check` like any other error.
        result.error_count += changed_count;
    }
    Ok(result)
}
