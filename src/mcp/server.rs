use std::path::Path;

use anyhow::Result;
use rmcp::{
    ErrorData as McpError, ServerHandler, ServiceExt,
    handler::server::tool::ToolRouter,
    handler::server::wrapper::Parameters,
    model::{CallToolResult, Content, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router,
};

use crate::{
    config::load_config,
    core::CheckContext,
    issues::{Issue, Report, Severity, location_info},
    rules::{
        duplicate::check_duplicate_issues, mnemonic::check_mnemonic_issues,
        placeholder::check_placeholder_issues, stale::check_stale_issues,
        unfinished::check_unfinished_issues,
    },
};

use super::types::{
    CatalogInfo, CatalogsResult, ConfigDto, ConfigValues, GetCatalogsParams, GetConfigParams,
    IssueItem, Pagination, QueryTranslationParams, QueryTranslationResult, ScanIssuesParams,
    ScanIssuesResult, ScanOverviewParams, ScanOverviewResult,
};

#[derive(Clone)]
pub struct LingoMcpServer {
    tool_router: ToolRouter<Self>,
}

impl Default for LingoMcpServer {
    fn default() -> Self {
        Self::new()
    }
}

fn check_context(project_root_path: &str) -> Result<CheckContext, McpError> {
    CheckContext::new(Path::new(project_root_path), None, false)
        .map_err(|e| McpError::internal_error(format!("Failed to initialize: {}", e), None))
}

fn collect_issues(ctx: &CheckContext, rule: Option<&str>) -> Result<Vec<Issue>, McpError> {
    let mut issues: Vec<Issue> = Vec::new();
    let rules: Vec<&str> = match rule {
        Some(rule) => vec![rule],
        None => vec!["unfinished", "duplicate", "placeholder", "mnemonic", "stale"],
    };

    for rule in rules {
        match rule {
            "unfinished" => {
                issues.extend(check_unfinished_issues(ctx).into_iter().map(Issue::Unfinished))
            }
            "duplicate" => {
                issues.extend(check_duplicate_issues(ctx).into_iter().map(Issue::Duplicate))
            }
            "placeholder" => issues.extend(
                check_placeholder_issues(ctx)
                    .into_iter()
                    .map(Issue::Placeholder),
            ),
            "mnemonic" => {
                issues.extend(check_mnemonic_issues(ctx).into_iter().map(Issue::Mnemonic))
            }
            "stale" => issues.extend(check_stale_issues(ctx).into_iter().map(Issue::Stale)),
            other => {
                return Err(McpError::invalid_params(
                    format!(
                        "Unknown rule \"{}\" (expected unfinished, duplicate, placeholder, mnemonic or stale)",
                        other
                    ),
                    None,
                ));
            }
        }
    }

    Ok(issues)
}

fn to_item(issue: &Issue) -> IssueItem {
    let loc = issue.location();
    let (file_path, line, _) = location_info(&loc);

    let (context, source) = match issue {
        Issue::Unfinished(i) => (Some(i.context.clone()), Some(i.source.clone())),
        Issue::Duplicate(i) => (Some(i.context.clone()), Some(i.source.clone())),
        Issue::Placeholder(i) => (Some(i.context.clone()), Some(i.source.clone())),
        Issue::Mnemonic(i) => (Some(i.context.clone()), Some(i.source.clone())),
        Issue::Stale(i) => (Some(i.context.clone()), Some(i.source.clone())),
        Issue::ParseError(_) => (None, None),
    };

    IssueItem {
        rule: issue.rule().to_string(),
        severity: issue.severity().to_string(),
        file_path: file_path.to_string(),
        line,
        context,
        source,
        detail: match issue {
            Issue::ParseError(i) => Some(i.error.clone()),
            _ => issue.details(),
        },
    }
}

fn json_result<T: serde::Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let json_str = serde_json::to_string_pretty(value)
        .map_err(|e| McpError::internal_error(format!("JSON serialization failed: {}", e), None))?;
    Ok(CallToolResult::success(vec![Content::text(json_str)]))
}

#[tool_router]
impl LingoMcpServer {
    pub fn new() -> Self {
        Self {
            tool_router: Self::tool_router(),
        }
    }

    /// Get overview statistics of all catalog issues
    #[tool(
        description = "Get statistics of all translation catalog issues without detailed items. Use this first to understand the overall state before diving into details."
    )]
    pub async fn scan_overview(
        &self,
        params: Parameters<ScanOverviewParams>,
    ) -> Result<CallToolResult, McpError> {
        let ctx = check_context(&params.0.project_root_path)?;
        let mut issues = collect_issues(&ctx, None)?;
        issues.extend(ctx.parse_errors().iter().map(|i| Issue::ParseError(i.clone())));

        let count =
            |rule: &str| issues.iter().filter(|i| i.rule().to_string() == rule).count();

        let result = ScanOverviewResult {
            files_scanned: ctx.files.len(),
            parse_errors: ctx.parse_errors().len(),
            unfinished: count("unfinished"),
            duplicate: count("duplicate"),
            placeholder: count("placeholder"),
            mnemonic: count("mnemonic"),
            stale: count("stale"),
            total_errors: issues
                .iter()
                .filter(|i| i.severity() == Severity::Error)
                .count(),
            total_warnings: issues
                .iter()
                .filter(|i| i.severity() == Severity::Warning)
                .count(),
        };

        json_result(&result)
    }

    /// Get detailed catalog issues, optionally filtered by rule
    #[tool(
        description = "Get detailed translation catalog issues. Returns a paginated list, optionally filtered to one rule (unfinished, duplicate, placeholder, mnemonic, stale)."
    )]
    pub async fn scan_issues(
        &self,
        params: Parameters<ScanIssuesParams>,
    ) -> Result<CallToolResult, McpError> {
        let limit = params.0.limit.map(|v| v as usize).unwrap_or(20).min(100);
        let offset = params.0.offset.map(|v| v as usize).unwrap_or(0);

        let ctx = check_context(&params.0.project_root_path)?;
        let mut issues = collect_issues(&ctx, params.0.rule.as_deref())?;
        if params.0.rule.is_none() {
            issues.extend(ctx.parse_errors().iter().map(|i| Issue::ParseError(i.clone())));
        }
        issues.sort_by(crate::issues::compare_issues);

        let total_count = issues.len();
        let items: Vec<IssueItem> = issues.iter().skip(offset).take(limit).map(to_item).collect();
        let has_more = offset + items.len() < total_count;

        let result = ScanIssuesResult {
            total_count,
            items,
            pagination: Pagination {
                offset,
                limit,
                has_more,
            },
        };

        json_result(&result)
    }

    /// Resolve one (context, source) pair to its active translation
    #[tool(
        description = "Resolve a (context, source) pair against the project's catalogs. Returns the active translation, or the lifecycle status and source-text fallback when there is none."
    )]
    pub async fn query_translation(
        &self,
        params: Parameters<QueryTranslationParams>,
    ) -> Result<CallToolResult, McpError> {
        let ctx = check_context(&params.0.project_root_path)?;
        let context = &params.0.context;
        let source = &params.0.source;

        let mut result = QueryTranslationResult {
            found: false,
            translated: false,
            translation: None,
            status: None,
            fallback: None,
        };

        for parsed in ctx.catalogs() {
            if let Some(translation) = parsed.catalog.lookup(context, source) {
                result.found = true;
                result.translated = true;
                result.translation = Some(translation.to_string());
                result.status = Some("finished".to_string());
                return json_result(&result);
            }
        }
        for parsed in ctx.catalogs() {
            if let Some(entry) = parsed.catalog.get(context, source) {
                result.found = true;
                result.status = Some(entry.status.to_string());
                result.fallback = Some(source.clone());
                return json_result(&result);
            }
        }

        result.fallback = Some(source.clone());
        json_result(&result)
    }

    /// Get available catalog files and their entry counts
    #[tool(description = "Get available translation catalog files and their entry counts.")]
    pub async fn get_catalogs(
        &self,
        params: Parameters<GetCatalogsParams>,
    ) -> Result<CallToolResult, McpError> {
        let ctx = check_context(&params.0.project_root_path)?;

        let mut catalogs: Vec<CatalogInfo> = ctx
            .catalogs()
            .iter()
            .map(|parsed| CatalogInfo {
                file_path: parsed.file_path.clone(),
                language: parsed.document.language.clone(),
                context_count: parsed.document.contexts.len(),
                message_count: parsed.document.message_count(),
            })
            .collect();
        catalogs.sort_by(|a, b| a.file_path.cmp(&b.file_path));

        let result = CatalogsResult {
            translations_root: ctx.config.translations_root.clone(),
            catalogs,
        };

        json_result(&result)
    }

    /// Get the current lingo configuration
    #[tool(description = "Get the current lingo configuration.")]
    pub async fn get_config(
        &self,
        params: Parameters<GetConfigParams>,
    ) -> Result<CallToolResult, McpError> {
        let path = Path::new(&params.0.project_root_path);

        let result = load_config(path)
            .map_err(|e| McpError::internal_error(format!("Failed to load config: {}", e), None))?;

        let config_dto = ConfigDto {
            from_file: result.from_file,
            config: ConfigValues::from(result.config),
        };

        json_result(&config_dto)
    }
}

#[tool_handler]
impl ServerHandler for LingoMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "Lingo MCP helps AI agents work on Qt Linguist translation catalogs.\n\n\
                 Available tools:\n\
                 1. get_config - Get project configuration\n\
                 2. get_catalogs - Get available catalog files and their entry counts\n\
                 3. scan_overview - Get statistics of all catalog issues (unfinished, duplicate, placeholder, mnemonic, stale)\n\
                 4. scan_issues - Get detailed issue list (paginated, filterable by rule)\n\
                 5. query_translation - Resolve a (context, source) pair\n\n\
                 Recommended Workflow:\n\
                 1. Use scan_overview to understand the overall state\n\
                 2. Fix duplicate and placeholder errors first (they break lookup and display)\n\
                 3. Then translate unfinished entries\n\
                 4. Finally run `lingo clean --apply` in the CLI to drop stale entries"
                    .into(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

/// Entry point for MCP server
pub fn run_server() -> Result<()> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(async {
            let service = LingoMcpServer::new();
            let server = service.serve(rmcp::transport::stdio()).await?;
            server.waiting().await?;
            Ok(())
        })
}
