use std::collections::HashSet;
use std::fs;

use anyhow::{Context as _, Ok, Result};

use super::super::args::{CleanCommand, CleanStatus};
use super::helper::finish;
use super::{CleanSummary, CommandResult, CommandSummary};
use crate::{
    core::{CheckContext, TranslationStatus, write_ts},
    issues::Issue,
    rules::stale::check_stale_issues,
};

impl CleanStatus {
    pub fn all() -> HashSet<Self> {
        [Self::Vanished, Self::Obsolete].into_iter().collect()
    }

    fn matches(self, status: TranslationStatus) -> bool {
        match self {
            CleanStatus::Vanished => status == TranslationStatus::Vanished,
            CleanStatus::Obsolete => status == TranslationStatus::Obsolete,
        }
    }
}

/// Remove retired (vanished/obsolete) entries from catalogs.
///
/// Dry-run by default; `--apply` rewrites the affected files in canonical
/// form, dropping contexts left empty.
pub fn clean(cmd: CleanCommand) -> Result<CommandResult> {
    let args = &cmd.args;
    let ctx = CheckContext::new(
        &args.common.path,
        args.common.translations_root.as_deref(),
        args.common.verbose,
    )?;
    let apply = args.apply;

    let statuses = if args.statuses.is_empty() {
        CleanStatus::all()
    } else {
        args.statuses.clone().into_iter().collect()
    };

    let stale_issues: Vec<_> = check_stale_issues(&ctx)
        .into_iter()
        .filter(|issue| statuses.iter().any(|s| s.matches(issue.status)))
        .collect();

    let vanished_count = stale_issues
        .iter()
        .filter(|i| i.status == TranslationStatus::Vanished)
        .count();
    let obsolete_count = stale_issues
        .iter()
        .filter(|i| i.status == TranslationStatus::Obsolete)
        .count();

    let affected_files: HashSet<&str> = stale_issues
        .iter()
        .map(|i| i.location.file_path.as_str())
        .collect();
    let file_count = affected_files.len();

    if apply {
        for parsed in ctx.catalogs() {
            if !affected_files.contains(parsed.file_path.as_str()) {
                continue;
            }
            let mut document = parsed.document.clone();
            for context in &mut document.contexts {
                context
                    .messages
                    .retain(|m| !statuses.iter().any(|s| s.matches(m.status)));
            }
            document.contexts.retain(|c| !c.messages.is_empty());

            let path = ctx.root_dir.join(&parsed.file_path);
            fs::write(&path, write_ts(&document))
                .with_context(|| format!("Failed to write catalog file: {:?}", path))?;
        }
    }

    let stale_issues_summary = stale_issues.clone();

    let mut all_issues: Vec<Issue> = Vec::new();
    all_issues.extend(stale_issues.into_iter().map(Issue::Stale));
    all_issues.extend(
        ctx.parse_errors()
            .iter()
            .map(|i| Issue::ParseError(i.clone())),
    );

    Ok(finish(
        CommandSummary::Clean(CleanSummary {
            vanished_count,
            obsolete_count,
            file_count,
            is_apply: apply,
            stale_issues: stale_issues_summary,
        }),
        all_issues,
        ctx.files.len(),
        false,
    ))
}
