//! Terminal output rendering for diff reports.

use super::schema::{DiffReport, DiffRow};
use colored::*;

/// Render a human-readable summary of a diff report for the terminal
pub fn render_terminal_diff(report: &DiffReport) -> String {
    let mut out = String::new();

    out.push_str(&render_header(report));
    out.push_str(&render_rows(&report.diff));
    out.push_str(&render_footer(report));

    out
}

fn render_header(report: &DiffReport) -> String {
    let mut out = String::new();
    out.push_str("\n📝 ");
    out.push_str(&"Proposed Attribute Changes".bold().to_string());
    out.push_str("\n---------------------------------------------------\n");
    out.push_str(&format!("Instance: {}\n", report.instance));
    out.push_str("---------------------------------------------------\n\n");
    out
}

fn render_rows(rows: &[DiffRow]) -> String {
    if rows.is_empty() {
        return "  (no custom attribute changes)\n".dimmed().to_string();
    }

    let width = rows
        .iter()
        .map(|row| row.attr_name.chars().count())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for row in rows {
        let name = format!("{:<width$}", row.attr_name, width = width);
        let line = if row.is_changed() {
            format!(
                "  {}  {} -> {}\n",
                name.bold(),
                row.current().red(),
                row.modified().green()
            )
        } else {
            format!("  {}  {} -> {}\n", name, row.current(), row.modified())
        };
        out.push_str(&line);
    }
    out
}

fn render_footer(report: &DiffReport) -> String {
    format!(
        "\n---------------------------------------------------\n{} attribute(s), {} changed\n",
        report.diff.len(),
        report.changed_count()
    )
}
