//! Preview projection
//!
//! Flattens a computed schedule into the row sequence a preview table
//! shows: each milestone followed by its tasks. Pure reshaping - every date
//! was already resolved by the schedule pass, and nothing is recomputed
//! here. The same rows back the pre-commit preview and the final
//! service-creation payload.

use chrono::NaiveDate;
use serde::Serialize;

use super::schedule::ComputedMilestone;

/// Kind of a preview row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PreviewRowKind {
    Milestone,
    Task,
}

/// One display row of a schedule preview
///
/// Unresolved dates stay `None` (JSON `null`); renderers choose the marker
/// text. They are never blanked to empty strings or invented dates.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PreviewRow {
    /// Whether this row is a milestone or one of its tasks
    pub kind: PreviewRowKind,

    /// Milestone name or task title
    pub name: String,

    /// Resolved start date, if known
    pub start: Option<NaiveDate>,

    /// Resolved due date, if known
    pub due: Option<NaiveDate>,

    /// Whole days between start and due; zero when either is unresolved
    pub duration_days: i64,
}

/// Flattens computed milestones into display order: each milestone row is
/// followed by its task rows
pub fn preview_rows(milestones: &[ComputedMilestone]) -> Vec<PreviewRow> {
    let mut rows = Vec::new();

    for milestone in milestones {
        rows.push(PreviewRow {
            kind: PreviewRowKind::Milestone,
            name: milestone.name.clone(),
            start: Some(milestone.start),
            due: milestone.due,
            duration_days: milestone.duration_days,
        });

        for task in &milestone.tasks {
            rows.push(PreviewRow {
                kind: PreviewRowKind::Task,
                name: task.title.clone(),
                start: Some(task.start),
                due: task.due,
                duration_days: task.duration_days,
            });
        }
    }

    rows
}
