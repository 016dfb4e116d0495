use anyhow::{Ok, Result};
use clap::ValueEnum;

use super::super::args::CheckCommand;
use super::{
    helper::finish,
    {CommandResult, CommandSummary},
};

use crate::{
    core::CheckContext,
    issues::Issue,
    rules::{
        duplicate::check_duplicate_issues, mnemonic::check_mnemonic_issues,
        placeholder::check_placeholder_issues, stale::check_stale_issues,
        unfinished::check_unfinished_issues,
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum CheckRule {
    Unfinished,
    Duplicate,
    Placeholder,
    Mnemonic,
    Stale,
}

impl CheckRule {
    pub fn all() -> Vec<CheckRule> {
        vec![
            CheckRule::Unfinished,
            CheckRule::Duplicate,
            CheckRule::Placeholder,
            CheckRule::Mnemonic,
            CheckRule::Stale,
        ]
    }
}

pub fn check(cmd: CheckCommand) -> Result<CommandResult> {
    let args = &cmd.args;
    let ctx = CheckContext::new(
        &args.common.path,
        args.common.translations_root.as_deref(),
        args.common.verbose,
    )?;

    let rules = if cmd.rules.is_empty() {
        CheckRule::all()
    } else {
        cmd.rules.clone()
    };

    let mut all_issues: Vec<Issue> = Vec::new();

    for rule in rules {
        match rule {
            CheckRule::Unfinished => {
                let issues = check_unfinished_issues(&ctx);
                all_issues.extend(issues.into_iter().map(Issue::Unfinished));
            }
            CheckRule::Duplicate => {
                let issues = check_duplicate_issues(&ctx);
                all_issues.extend(issues.into_iter().map(Issue::Duplicate));
            }
            CheckRule::Placeholder => {
                let issues = check_placeholder_issues(&ctx);
                all_issues.extend(issues.into_iter().map(Issue::Placeholder));
            }
            CheckRule::Mnemonic => {
                let issues = check_mnemonic_issues(&ctx);
                all_issues.extend(issues.into_iter().map(Issue::Mnemonic));
            }
            CheckRule::Stale => {
                let issues = check_stale_issues(&ctx);
                all_issues.extend(issues.into_iter().map(Issue::Stale));
            }
        }
    }

    let parse_errors = ctx.parse_errors();
    all_issues.extend(parse_errors.iter().map(|i| Issue::ParseError(i.clone())));

    Ok(finish(
        CommandSummary::Check,
        all_issues,
        ctx.files.len(),
        true,
    ))
}
