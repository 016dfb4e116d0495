//! Report formatting and printing utilities.
//!
//! This module provides functions to display issues in cargo-style format.
//! Separate from core logic to allow lingo to be used as a library.

use std::io::{self, Write};

use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use super::commands::{
    CleanSummary, CommandResult, CommandSummary, FmtSummary, InitSummary, QueryOutcome,
    QuerySummary, StatsSummary,
};
use crate::config::CONFIG_FILE_NAME;
use crate::core::TranslationStatus;
use crate::issues::{Issue, Report, Severity, compare_issues, location_info};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Print issues in cargo-style format to stdout.
///
/// This is the main entry point for reporting. Issues are sorted and
/// displayed with severity, location, and details.
pub fn report(issues: &[Issue]) {
    report_to(issues, &mut io::stdout().lock());
}

/// Print issues to a custom writer.
///
/// Useful for testing or redirecting output.
pub fn report_to<W: Write>(issues: &[Issue], writer: &mut W) {
    if issues.is_empty() {
        return;
    }

    let mut sorted = issues.to_vec();
    sorted.sort_by(compare_issues);

    // Calculate max line number width for alignment
    let max_line_width = calculate_max_line_width(&sorted);

    for issue in &sorted {
        print_issue(issue, writer, max_line_width);
    }

    print_summary(&sorted, writer);
}

/// Print a success message when no issues are found.
pub fn print_success(files_checked: usize) {
    print_success_to(files_checked, &mut io::stdout().lock());
}

/// Print a success message to a custom writer.
pub fn print_success_to<W: Write>(files_checked: usize, writer: &mut W) {
    let msg = format!(
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Checked {} catalog {} - no issues found",
            files_checked,
            if files_checked == 1 { "file" } else { "files" }
        )
        .green()
    );
    let _ = writeln!(writer, "{}", msg);
}

/// Print a warning about files that could not be parsed.
pub fn print_parse_warning(count: usize, verbose: bool) {
    print_parse_warning_to(count, verbose, &mut io::stderr().lock());
}

/// Print a parse warning to a custom writer.
pub fn print_parse_warning_to<W: Write>(count: usize, verbose: bool, writer: &mut W) {
    if count > 0 && !verbose {
        let _ = writeln!(
            writer,
            "{} {} file(s) could not be parsed (use {} for details)",
            "warning:".bold().yellow(),
            count,
            "-v".cyan()
        );
    }
}

pub fn print(result: &CommandResult, verbose: bool) {
    print_command_output(result);

    if matches!(result.summary, CommandSummary::Check) && result.issues.is_empty() {
        print_success(result.files_checked);
    }

    print_parse_warning(result.parse_error_count, verbose);
}

// ============================================================
// Internal Functions
// ============================================================

fn print_command_output(result: &CommandResult) {
    match &result.summary {
        CommandSummary::Check => {
            report(&result.issues);
        }
        CommandSummary::Query(summary) => {
            print_query(summary);
        }
        CommandSummary::Stats(summary) => {
            print_stats(summary);
        }
        CommandSummary::Fmt(summary) => {
            print_fmt(summary);
        }
        CommandSummary::Clean(summary) => {
            print_clean(summary, &result.issues);
        }
        CommandSummary::Init(summary) => {
            print_init(summary);
        }
    }
}

fn print_issue<W: Write>(issue: &Issue, writer: &mut W, max_line_width: usize) {
    let loc = issue.location();
    let (file_path, line, col) = location_info(&loc);

    // Print severity and message (cargo-style)
    let severity = issue.report_severity();
    let severity_str = match severity {
        Severity::Error => "error".bold().red(),
        Severity::Warning => "warning".bold().yellow(),
    };

    let _ = writeln!(
        writer,
        "{}: \"{}\"  {}",
        severity_str,
        issue.message(),
        issue.report_rule().to_string().dimmed().cyan()
    );

    // Print clickable location: --> path:line:col
    let _ = writeln!(writer, "  {} {}:{}:{}", "-->".blue(), file_path, line, col);

    // Print details if present (cargo-style note)
    if let Some(details) = issue.details() {
        let _ = writeln!(
            writer,
            "{:>width$} {} {} {}",
            "",
            "=".blue(),
            "note:".bold(),
            details,
            width = max_line_width
        );
    }

    // Print hint if present
    if let Some(hint) = issue.hint() {
        let _ = writeln!(
            writer,
            "{:>width$} {} {} {}",
            "",
            "=".blue(),
            "hint:".bold().cyan(),
            hint,
            width = max_line_width
        );
    }

    let _ = writeln!(writer); // Empty line between issues
}

fn print_summary<W: Write>(issues: &[Issue], writer: &mut W) {
    let total_errors = issues
        .iter()
        .filter(|i| i.report_severity() == Severity::Error)
        .count();
    let total_warnings = issues
        .iter()
        .filter(|i| i.report_severity() == Severity::Warning)
        .count();
    let total_problems = total_errors + total_warnings;

    if total_problems > 0 {
        let _ = writeln!(
            writer,
            "{} {} problems ({} {}, {} {})",
            FAILURE_MARK.red(),
            total_problems,
            total_errors,
            if total_errors == 1 { "error" } else { "errors" }.red(),
            total_warnings,
            if total_warnings == 1 {
                "warning"
            } else {
                "warnings"
            }
            .yellow()
        );
    }
}

fn calculate_max_line_width(issues: &[Issue]) -> usize {
    issues
        .iter()
        .map(|i| {
            let loc = i.location();
            let (_, line, _) = location_info(&loc);
            line
        })
        .max()
        .map(|n| n.to_string().len())
        .unwrap_or(1)
}

fn print_query(summary: &QuerySummary) {
    match &summary.outcome {
        QueryOutcome::Translated { translation, .. } => {
            println!("{}", translation);
        }
        QueryOutcome::Untranslated { status } => {
            println!("{}", summary.source);
            let reason = match status {
                TranslationStatus::Unfinished => "is unfinished",
                TranslationStatus::Vanished => "has vanished",
                TranslationStatus::Obsolete => "is obsolete",
                TranslationStatus::Finished => "is empty",
            };
            println!(
                "{} entry for \"{}\" in context \"{}\" {}, falling back to source text",
                "note:".bold(),
                summary.source,
                summary.context,
                reason
            );
        }
        QueryOutcome::NotFound => {
            println!(
                "{} no entry for \"{}\" in context \"{}\"",
                "error:".bold().red(),
                summary.source,
                summary.context
            );
        }
    }
}

fn print_stats(summary: &StatsSummary) {
    if summary.json {
        match serde_json::to_string_pretty(&summary.files) {
            Ok(json) => println!("{}", json),
            Err(err) => eprintln!("Error: {}", err),
        }
        return;
    }

    // Align the language column across catalogs; widths are display
    // widths, not byte counts.
    let name_width = summary
        .files
        .iter()
        .map(|f| UnicodeWidthStr::width(f.file_path.as_str()))
        .max()
        .unwrap_or(0);

    for file in &summary.files {
        let language = file.language.as_deref().unwrap_or("unknown");
        let padding = " ".repeat(name_width - UnicodeWidthStr::width(file.file_path.as_str()));
        println!("{}{} ({})", file.file_path.bold(), padding, language);
        println!(
            "  contexts: {}, messages: {}",
            file.contexts, file.messages
        );
        println!(
            "  finished: {}, unfinished: {}, vanished: {}, obsolete: {}",
            file.finished.to_string().green(),
            file.unfinished.to_string().yellow(),
            file.vanished.to_string().dimmed(),
            file.obsolete.to_string().dimmed()
        );
        println!("  completion: {:.1}%", file.completion());
    }

    if summary.files.is_empty() {
        println!("No catalog files found.");
    }
}

fn print_fmt(summary: &FmtSummary) {
    if summary.is_check {
        for file in &summary.changed {
            println!("{} {}", "would reformat:".yellow(), file);
        }
        if summary.changed.is_empty() {
            println!(
                "{} {}",
                SUCCESS_MARK.green(),
                format!(
                    "{} catalog file(s) already canonical",
                    summary.unchanged_count
                )
                .green()
            );
        } else {
            println!(
                "{} {} file(s) are not canonically formatted",
                FAILURE_MARK.red(),
                summary.changed.len()
            );
            println!("Run {} to rewrite them.", "lingo fmt".cyan());
        }
    } else if summary.changed.is_empty() {
        println!(
            "{} {}",
            SUCCESS_MARK.green(),
            format!(
                "{} catalog file(s) already canonical",
                summary.unchanged_count
            )
            .green()
        );
    } else {
        println!(
            "{} {} file(s):",
            "Reformatted".green().bold(),
            summary.changed.len()
        );
        for file in &summary.changed {
            println!("  - {}", file);
        }
    }
}

fn print_clean(summary: &CleanSummary, issues: &[Issue]) {
    let total = summary.vanished_count + summary.obsolete_count;

    if !summary.is_apply && total > 0 {
        report(issues);
    }

    if total == 0 {
        println!(
            "{} {}",
            SUCCESS_MARK.green(),
            "No retired entries to remove".green()
        );
        return;
    }

    if summary.is_apply {
        println!(
            "{} {} entr{} in {} file(s):",
            "Removed".green().bold(),
            total,
            if total == 1 { "y" } else { "ies" },
            summary.file_count
        );
    } else {
        println!(
            "{} {} entr{} in {} file(s):",
            "Would remove".yellow().bold(),
            total,
            if total == 1 { "y" } else { "ies" },
            summary.file_count
        );
    }
    if summary.vanished_count > 0 {
        println!("  - vanished: {} entr{}", summary.vanished_count, if summary.vanished_count == 1 { "y" } else { "ies" });
    }
    if summary.obsolete_count > 0 {
        println!("  - obsolete: {} entr{}", summary.obsolete_count, if summary.obsolete_count == 1 { "y" } else { "ies" });
    }
    if !summary.is_apply {
        println!("Run with {} to remove these entries.", "--apply".cyan());
    }
}

fn print_init(summary: &InitSummary) {
    if summary.created {
        println!(
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Created {}", CONFIG_FILE_NAME).green()
        );
    }
}
