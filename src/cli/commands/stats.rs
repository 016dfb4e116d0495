use anyhow::{Ok, Result};

use super::super::args::StatsCommand;
use super::{CatalogStats, CommandResult, CommandSummary, StatsSummary, helper::finish};
use crate::{
    core::{CheckContext, ParsedCatalog, TranslationStatus},
    issues::Issue,
};

pub fn stats(cmd: StatsCommand) -> Result<CommandResult> {
    let args = &cmd.args;
    let ctx = CheckContext::new(
        &args.common.path,
        args.common.translations_root.as_deref(),
        args.common.verbose,
    )?;

    let files: Vec<CatalogStats> = ctx.catalogs().iter().map(catalog_stats).collect();

    Ok(finish(
        CommandSummary::Stats(StatsSummary {
            json: cmd.json,
            files,
        }),
        ctx.parse_errors()
            .iter()
            .map(|i| Issue::ParseError(i.clone()))
            .collect(),
        ctx.files.len(),
        true,
    ))
}

fn catalog_stats(parsed: &ParsedCatalog) -> CatalogStats {
    let mut stats = CatalogStats {
        file_path: parsed.file_path.clone(),
        language: parsed.document.language.clone(),
        contexts: parsed.document.contexts.len(),
        messages: 0,
        finished: 0,
        unfinished: 0,
        vanished: 0,
        obsolete: 0,
    };

    for context in &parsed.document.contexts {
        for message in &context.messages {
            stats.messages += 1;
            match message.status {
                TranslationStatus::Finished => stats.finished += 1,
                TranslationStatus::Unfinished => stats.unfinished += 1,
                TranslationStatus::Vanished => stats.vanished += 1,
                TranslationStatus::Obsolete => stats.obsolete += 1,
            }
        }
    }

    stats
}
