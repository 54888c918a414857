//! Domain models for Cadence
//!
//! The pure scheduling engine: offset parsing, the suggestion catalog,
//! template records, schedule computation, and the preview projection.
//! Everything here is synchronous, deterministic, and free of I/O.

mod offset;
mod suggest;
mod template;
mod schedule;
mod preview;

pub use offset::{Offset, OffsetError, TimeUnit};
pub use suggest::{suggestions, Suggestion};
pub use template::{MilestoneSpec, TaskPriority, TaskSpec, Template};
pub use schedule::{compute_schedule, ComputedMilestone, ComputedTask, ScheduleAnchor};
pub use preview::{preview_rows, PreviewRow, PreviewRowKind};
