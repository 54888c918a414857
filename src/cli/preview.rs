//! Schedule preview command
//!
//! Loads a template, computes its schedule from a start date, and prints
//! the flattened rows. The same computation backs service creation: the
//! JSON output carries the exact dates a caller would persist.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::NaiveDate;

use super::output::Output;
use crate::domain::{compute_schedule, preview_rows, PreviewRow, PreviewRowKind, ScheduleAnchor};
use crate::storage;

/// Marker for dates that could not be resolved
const UNRESOLVED: &str = "TBD";

pub fn run(output: &Output, path: &Path, start: NaiveDate) -> Result<()> {
    let template = storage::load_template(path)
        .with_context(|| format!("Failed to load template: {}", path.display()))?;

    output.verbose_ctx(
        "preview",
        &format!(
            "Loaded template '{}' with {} milestone(s)",
            template.name,
            template.milestones.len()
        ),
    );

    let anchor = ScheduleAnchor::new(start);
    let schedule = compute_schedule(anchor, &template.milestones);
    let rows = preview_rows(&schedule);

    output.verbose_ctx("preview", &format!("Computed {} preview row(s)", rows.len()));

    if output.is_json() {
        output.data(&serde_json::json!({
            "template": template.name,
            "start": start,
            "rows": rows,
        }));
    } else {
        render_table(&template.name, start, &rows);
    }

    Ok(())
}

fn render_table(name: &str, start: NaiveDate, rows: &[PreviewRow]) {
    println!("Schedule preview: {} (starting {})", name, start);
    println!();

    if rows.is_empty() {
        println!("Template has no milestones.");
        return;
    }

    println!("{:<34} {:<12} {:<12} DAYS", "NAME", "START", "DUE");
    println!("{}", "-".repeat(65));

    for row in rows {
        // Tasks are indented under their milestone
        let name = match row.kind {
            PreviewRowKind::Milestone => row.name.clone(),
            PreviewRowKind::Task => format!("  {}", row.name),
        };

        println!(
            "{:<34} {:<12} {:<12} {}",
            name,
            date_cell(row.start),
            date_cell(row.due),
            row.duration_days
        );
    }

    println!();
    println!("{} row(s)", rows.len());
}

/// Formats an optional date, substituting the unresolved marker
fn date_cell(date: Option<NaiveDate>) -> String {
    match date {
        Some(date) => date.to_string(),
        None => UNRESOLVED.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_cell_renders_iso_dates() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 8).unwrap();
        assert_eq!(date_cell(Some(date)), "2025-01-08");
    }

    #[test]
    fn date_cell_marks_unresolved_dates() {
        assert_eq!(date_cell(None), "TBD");
        assert!(!date_cell(None).is_empty());
    }
}
