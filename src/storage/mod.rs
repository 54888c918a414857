//! # Storage Layer
//!
//! File-boundary plumbing for Cadence.
//!
//! ## Formats
//!
//! | Data | Format | Selected by |
//! |------|--------|-------------|
//! | Templates | JSON | `.json` extension |
//! | Templates | YAML | `.yaml` / `.yml` extension |
//!
//! Templates are self-contained documents: load, compute, done. There is no
//! record store, no index, and no mutation in place - persistence of
//! computed schedules belongs to the caller.

mod template_file;

pub use template_file::{load_template, save_template, TemplateFileError};
