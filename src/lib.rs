//! Cadence - relative-date schedule calculator for service templates
//!
//! Service templates describe milestones and tasks in relative time only
//! ("1 week", "same day", "3 days later"). Given an absolute start date,
//! Cadence parses those expressions and computes a concrete calendar
//! schedule: milestones chain off each other's due dates, tasks fan out
//! from their milestone's start, and a malformed field degrades to TBD
//! instead of failing the computation.

pub mod domain;
pub mod storage;
pub mod cli;

pub use domain::{
    compute_schedule, preview_rows, MilestoneSpec, Offset, OffsetError, ScheduleAnchor, TaskSpec,
    Template,
};
