//! Formatting a diff result for the selected output format.

use crate::cli::{OutputFormat, Settings};
use anyhow::{Context, Result};
use diff_engine::{
    render_html, render_side_by_side, render_unified_with_labels, DefaultTheme, DiffResult,
    DiffSummary, RowView,
};
use serde::Serialize;
use std::fmt::Write as _;
use std::io::Write as _;
use std::path::Path;

/// JSON document handed to other programs.
#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    identical: bool,
    summary: DiffSummary,
    unified: String,
    rows: Vec<RowView>,
    result: &'a DiffResult,
}

/// Render the result in the configured format.
pub fn render(result: &DiffResult, settings: &Settings) -> Result<String> {
    let text = match settings.format {
        OutputFormat::Unified if result.is_identical() => identical_message(settings),
        OutputFormat::Unified => render_unified_with_labels(
            result,
            settings.context,
            settings.from_label(),
            settings.to_label(),
        ),
        OutputFormat::SideBySide if result.is_identical() => identical_message(settings),
        OutputFormat::SideBySide => side_by_side_text(&render_side_by_side(result)),
        OutputFormat::Html => render_html(&render_side_by_side(result), &settings.html, &DefaultTheme),
        OutputFormat::Json => {
            let report = JsonReport {
                identical: result.is_identical(),
                summary: result.summary(),
                unified: render_unified_with_labels(
                    result,
                    settings.context,
                    settings.from_label(),
                    settings.to_label(),
                ),
                rows: render_side_by_side(result),
                result,
            };
            let mut json =
                serde_json::to_string_pretty(&report).context("Failed to serialize diff")?;
            json.push('\n');
            json
        }
        OutputFormat::Stats => stats_text(result, settings),
    };
    Ok(text)
}

/// Write rendered output to a file, or stdout when no path is given.
pub fn write(text: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, text)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            log::info!("Wrote {} bytes to {}", text.len(), path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(text.as_bytes())
                .context("Failed to write to stdout")?;
            stdout.flush().context("Failed to write to stdout")?;
        }
    }
    Ok(())
}

fn identical_message(settings: &Settings) -> String {
    if settings.diff_options.ignore_leading_whitespace {
        "Texts are identical! (ignoring leading whitespace)\n".to_string()
    } else {
        "Texts are identical!\n".to_string()
    }
}

fn stats_text(result: &DiffResult, settings: &Settings) -> String {
    let summary = result.summary();
    let mut out = String::new();
    let _ = writeln!(out, "Lines in {}: {}", settings.from_label(), summary.left_lines());
    let _ = writeln!(out, "Lines in {}: {}", settings.to_label(), summary.right_lines());
    let _ = writeln!(out, "Differences: {}", summary.differences());
    let _ = writeln!(out, "  added: {}", summary.added);
    let _ = writeln!(out, "  removed: {}", summary.removed);
    let _ = writeln!(out, "  unchanged: {}", summary.unchanged);
    out
}

/// Two aligned columns in the style of `diff -y`.
fn side_by_side_text(rows: &[RowView]) -> String {
    let number_width = rows
        .iter()
        .flat_map(|r| [r.left_line_number, r.right_line_number])
        .flatten()
        .max()
        .unwrap_or(1)
        .to_string()
        .len();
    let text_width = rows
        .iter()
        .filter_map(|r| r.left_text.as_deref())
        .map(|t| t.chars().count())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for row in rows {
        let left_number = row.left_line_number.map(|n| n.to_string()).unwrap_or_default();
        let right_number = row.right_line_number.map(|n| n.to_string()).unwrap_or_default();
        let line = format!(
            "{:>nw$} {:<tw$} {} {:>nw$} {}",
            left_number,
            row.left_text.as_deref().unwrap_or_default(),
            row.kind.marker(),
            right_number,
            row.right_text.as_deref().unwrap_or_default(),
            nw = number_width,
            tw = text_width,
        );
        let _ = writeln!(out, "{}", line.trim_end());
    }
    out
}
