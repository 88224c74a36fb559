//! Console summaries printed after a run.
//!
//! Progress lines are written by the driver while it runs; this module adds
//! the per-locale key details (verbose mode) and the final summary line.

use std::io::{self, Write};

use colored::Colorize;

use super::run::CommandOutcome;
use crate::{
    config::CONFIG_FILE_NAME,
    lang::{LocaleReport, Mode, RunSummary},
};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

pub fn print(outcome: &CommandOutcome, verbose: bool) {
    print_to(outcome, verbose, &mut io::stdout().lock());
}

/// Print an outcome to a custom writer.
pub fn print_to<W: Write>(outcome: &CommandOutcome, verbose: bool, writer: &mut W) {
    match outcome {
        CommandOutcome::Init { .. } => {
            let _ = writeln!(
                writer,
                "{} {}",
                SUCCESS_MARK.green(),
                format!("Created {}", CONFIG_FILE_NAME).green()
            );
        }
        CommandOutcome::Format(summary) => {
            if verbose {
                for report in &summary.reports {
                    print_locale_keys(report, writer);
                }
                print_skipped_reference(summary, writer);
            }
            print_summary(summary, writer);
        }
    }
}

/// Print the keys a locale loses or still lacks.
fn print_locale_keys<W: Write>(report: &LocaleReport, writer: &mut W) {
    if report.dropped.is_empty() && report.missing.is_empty() {
        return;
    }

    let _ = writeln!(writer);
    let _ = writeln!(writer, "{}:", report.locale.blue());
    for key in &report.dropped {
        let _ = writeln!(writer, "  {} {}  {}", "-".dimmed(), key, "[dropped]".dimmed());
    }
    for key in &report.missing {
        let _ = writeln!(writer, "  {} {}  {}", "-".dimmed(), key, "[missing]".dimmed());
    }
}

/// Note that the reference locale was listed but left untouched.
fn print_skipped_reference<W: Write>(summary: &RunSummary, writer: &mut W) {
    if summary.skipped_reference > 0 {
        let _ = writeln!(
            writer,
            "{} reference locale skipped {} time(s)",
            "note:".dimmed(),
            summary.skipped_reference
        );
    }
}

fn print_summary<W: Write>(summary: &RunSummary, writer: &mut W) {
    let count = summary.reports.len();
    let files = if count == 1 { "file" } else { "files" };
    let msg = match summary.mode {
        Mode::Write => format!("Formatted {} locale {}", count, files),
        Mode::Validate => format!(
            "{} locale {} {} correctly formatted",
            count,
            files,
            if count == 1 { "is" } else { "are" }
        ),
    };
    let _ = writeln!(writer, "{} {}", SUCCESS_MARK.green(), msg.green());
}

/// Print an error that aborted the run.
pub fn print_error(err: &anyhow::Error) {
    let _ = writeln!(
        io::stderr().lock(),
        "{} {:#}",
        "Error:".red().bold(),
        err
    );
}
