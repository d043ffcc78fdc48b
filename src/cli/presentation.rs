//! CLI presentation: run summary and warning formatting.

use comfy_table::presets::UTF8_BORDERS_ONLY;
use comfy_table::Table;
use owo_colors::OwoColorize;
use serde::Serialize;
use std::path::PathBuf;

/// What a completed run reports back to the user
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub output: PathBuf,
    pub file_count: u64,
    pub warning_count: usize,
    pub elapsed_seconds: f64,
}

/// Format a section heading with bold/underline.
fn format_section_heading(title: &str) -> String {
    format!("{}", title.bold().underline())
}

/// Human-readable summary: the one-line count followed by a detail table.
pub fn format_summary_text(summary: &RunSummary) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{} files were found in {:.3} seconds\n\n",
        summary.file_count, summary.elapsed_seconds
    ));
    out.push_str(&format!("{}\n\n", format_section_heading("Listing")));

    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["Output", "Files", "Warnings", "Seconds"]);
    table.add_row(vec![
        summary.output.display().to_string(),
        summary.file_count.to_string(),
        summary.warning_count.to_string(),
        format!("{:.3}", summary.elapsed_seconds),
    ]);
    out.push_str(&format!("{}", table));
    out
}

pub fn format_summary_json(summary: &RunSummary) -> String {
    serde_json::to_string_pretty(summary)
        .unwrap_or_else(|e| format!("{{\"error\": \"Failed to serialize summary: {}\"}}", e))
}

/// One aggregate block listing every path whose metadata could not be read.
pub fn format_warnings(paths: &[String]) -> String {
    let mut out = format!(
        "{} metadata could not be read for {} file(s):",
        "warning:".yellow().bold(),
        paths.len()
    );
    for path in paths {
        out.push_str("\n  ");
        out.push_str(path);
    }
    out
}
