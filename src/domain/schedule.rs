//! Schedule computation
//!
//! Turns a template's relative structure into absolute calendar dates for a
//! given service start. Milestones form a sequential timeline: the first is
//! measured from the anchor, every later one begins where its predecessor's
//! due date landed. Tasks fan out from their milestone's start and are never
//! measured against each other.
//!
//! All arithmetic happens at whole-day granularity on [`NaiveDate`]. The
//! anchor is pinned to its UTC calendar day up front, so time-of-day and
//! daylight-saving shifts never reach the math.
//!
//! The pass never fails: a field that does not parse degrades that single
//! node (start falls back to its anchor, due becomes `None`) and computation
//! continues. One typo in a twenty-task template still yields nineteen dated
//! nodes.

use chrono::{DateTime, Days, NaiveDate, NaiveTime, Utc};
use serde::Serialize;

use super::offset::Offset;
use super::template::{MilestoneSpec, TaskPriority, TaskSpec};

/// The absolute date a schedule is computed from (the service start)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScheduleAnchor(NaiveDate);

impl ScheduleAnchor {
    /// Creates an anchor from a calendar date
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Creates an anchor from an instant, pinned to its UTC calendar day
    pub fn from_instant(instant: DateTime<Utc>) -> Self {
        Self(instant.date_naive())
    }

    /// Returns the anchor's calendar date
    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// Returns the anchor as an instant: 00:00:00 UTC of its calendar day
    pub fn instant(&self) -> DateTime<Utc> {
        self.0.and_time(NaiveTime::MIN).and_utc()
    }
}

impl From<NaiveDate> for ScheduleAnchor {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

/// A task with resolved dates
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComputedTask {
    /// Title from the task spec
    pub title: String,

    /// Priority from the task spec
    pub priority: TaskPriority,

    /// The owning milestone's start date
    pub start: NaiveDate,

    /// Resolved due date; `None` when the due offset failed to resolve
    pub due: Option<NaiveDate>,

    /// Whole days between start and due; zero when due is unresolved
    pub duration_days: i64,
}

/// A milestone with resolved dates and its computed tasks
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComputedMilestone {
    /// Name from the milestone spec
    pub name: String,

    /// Resolved start date
    pub start: NaiveDate,

    /// Resolved due date; `None` when the due offset failed to resolve
    pub due: Option<NaiveDate>,

    /// Whole days between start and due; zero when due is unresolved
    pub duration_days: i64,

    /// Computed tasks in position order
    pub tasks: Vec<ComputedTask>,
}

/// Computes absolute dates for every milestone and task in a template
///
/// Milestones are processed in ascending position order (stable, so ties
/// keep declaration order). The first milestone starts at the anchor plus
/// its own start offset, falling back to the anchor itself when that offset
/// does not parse. Each later milestone starts where its predecessor ended;
/// see `chain_start`. Recomputation is cheap and stateless - callers run
/// this on every anchor change or template edit.
pub fn compute_schedule(
    anchor: ScheduleAnchor,
    milestones: &[MilestoneSpec],
) -> Vec<ComputedMilestone> {
    let mut ordered: Vec<&MilestoneSpec> = milestones.iter().collect();
    ordered.sort_by_key(|m| m.position);

    let mut computed = Vec::with_capacity(ordered.len());
    let mut chained_start: Option<NaiveDate> = None;

    for spec in ordered {
        let start = match chained_start {
            None => add_offset(anchor.date(), &spec.start_offset).unwrap_or_else(|| anchor.date()),
            Some(date) => date,
        };

        let due = add_offset(start, &spec.due_offset);
        let tasks = compute_tasks(start, &spec.tasks);

        chained_start = Some(chain_start(start, due));

        computed.push(ComputedMilestone {
            name: spec.name.clone(),
            start,
            due,
            duration_days: duration_days(start, due),
            tasks,
        });
    }

    computed
}

/// Where the milestone after this one begins: the computed due date, or the
/// start when the due date is unresolved (a failed due offset reads as
/// zero-length, keeping the timeline continuous).
///
/// This is the only place the chaining rule lives. Replacing the body with
/// the anchor date would make every milestone measure from the service
/// start instead.
fn chain_start(start: NaiveDate, due: Option<NaiveDate>) -> NaiveDate {
    due.unwrap_or(start)
}

/// Computes dates for one milestone's tasks
///
/// Every task is measured independently from the milestone's start, in
/// ascending position order.
fn compute_tasks(milestone_start: NaiveDate, tasks: &[TaskSpec]) -> Vec<ComputedTask> {
    let mut ordered: Vec<&TaskSpec> = tasks.iter().collect();
    ordered.sort_by_key(|t| t.position);

    ordered
        .into_iter()
        .map(|spec| {
            let due = add_offset(milestone_start, &spec.due_offset);
            ComputedTask {
                title: spec.title.clone(),
                priority: spec.priority,
                start: milestone_start,
                due,
                duration_days: duration_days(milestone_start, due),
            }
        })
        .collect()
}

/// Resolves an offset expression against a base date
///
/// `None` covers both failure modes: an expression that does not parse, and
/// a result past the end of the representable calendar.
fn add_offset(base: NaiveDate, expression: &str) -> Option<NaiveDate> {
    let offset: Offset = expression.parse().ok()?;

    // total_days() is never negative, so the u64 cast is lossless
    base.checked_add_days(Days::new(offset.total_days() as u64))
}

/// Whole days between start and due; zero when due is unresolved
fn duration_days(start: NaiveDate, due: Option<NaiveDate>) -> i64 {
    due.map(|d| (d - start).num_days()).unwrap_or(0)
}
