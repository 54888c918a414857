//! # Command-Line Interface
//!
//! User-facing CLI commands and output formatting.
//!
//! ## Commands
//!
//! | Command | Purpose |
//! |---------|---------|
//! | `init` | Write a starter template file |
//! | `parse` | Resolve one offset expression |
//! | `suggest` | List the suggestion catalog |
//! | `preview` | Compute a schedule for a start date |
//! | `check` | Validate a template's offset expressions |
//!
//! ## Output Formats
//!
//! All commands support the `--format` flag:
//! - `text` (default) - Human-readable output
//! - `json` - Machine-parseable JSON
//!
//! ## Verbose Mode
//!
//! Use `--verbose` (or `-v`) for debug output:
//! ```bash
//! cadence --verbose preview onboarding.yaml --start 2025-01-01
//! ```
//!
//! ## Entry Point
//!
//! Call [`run()`] to parse arguments and execute the appropriate command.

mod app;
mod output;
mod expr;
mod preview;
mod check;

pub use app::{Cli, Commands, run};
pub use output::{Output, OutputFormat};
