use anyhow::{Ok, Result};

use super::super::args::QueryCommand;
use super::{CommandResult, CommandSummary, QueryOutcome, QuerySummary, helper::finish};
use crate::{
    core::{CheckContext, ParsedCatalog},
    issues::Issue,
};

/// Resolve one (context, source) pair the way the host toolkit would.
///
/// Catalogs are searched in discovery order and the first active match
/// wins; `--file` pins the search to a single catalog.
pub fn query(cmd: QueryCommand) -> Result<CommandResult> {
    let args = &cmd.args;
    let ctx = CheckContext::new(
        &args.common.path,
        args.common.translations_root.as_deref(),
        args.common.verbose,
    )?;

    let file_filter = cmd
        .file
        .as_ref()
        .map(|f| f.to_string_lossy().to_string());

    let catalogs: Vec<&ParsedCatalog> = ctx
        .catalogs()
        .iter()
        .filter(|parsed| match &file_filter {
            Some(file) => &parsed.file_path == file,
            None => true,
        })
        .collect();

    let outcome = resolve_query(&catalogs, &cmd.context, &cmd.source);

    let error_count = usize::from(matches!(outcome, QueryOutcome::NotFound));

    let mut result = finish(
        CommandSummary::Query(QuerySummary {
            context: cmd.context.clone(),
            source: cmd.source.clone(),
            outcome,
        }),
        ctx.parse_errors()
            .iter()
            .map(|i| Issue::ParseError(i.clone()))
            .collect(),
        catalogs.len(),
        true,
    );
    // A missed lookup is an error even though it produces no issue entry.
    result.error_count += error_count;
    Ok(result)
}

fn resolve_query(
    catalogs: &[&ParsedCatalog],
    context: &str,
    source: &str,
) -> QueryOutcome {
    // First active translation wins.
    for parsed in catalogs {
        if let Some(translation) = parsed.catalog.lookup(context, source) {
            return QueryOutcome::Translated {
                translation: translation.to_string(),
                file_path: parsed.file_path.clone(),
            };
        }
    }
    // Otherwise any entry at all means "untranslated, fall back".
    for parsed in catalogs {
        if let Some(entry) = parsed.catalog.get(context, source) {
            return QueryOutcome::Untranslated {
                status: entry.status,
            };
        }
    }
    QueryOutcome::NotFound
}
