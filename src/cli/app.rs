//! Main CLI application structure

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};

use super::output::{Output, OutputFormat};
use super::{check, expr, preview};
use crate::domain::Template;
use crate::storage;

#[derive(Parser)]
#[command(name = "cadence")]
#[command(author, version, about = "Relative-date schedule calculator for service templates")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, short = 'f', global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Enable verbose output for debugging
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a starter template file
    Init {
        /// Where to write the template (.json, .yaml, or .yml)
        #[arg(default_value = "template.yaml")]
        path: PathBuf,
    },

    /// Parse a relative offset expression
    Parse {
        /// Expression to parse (e.g. "1 week", "same day", "3 days later")
        expression: String,
    },

    /// List suggested offset expressions
    Suggest,

    /// Compute a template's schedule for a start date
    Preview {
        /// Template file (.json, .yaml, or .yml)
        template: PathBuf,

        /// Service start date (YYYY-MM-DD)
        #[arg(long, short)]
        start: NaiveDate,
    },

    /// Validate every offset expression in a template
    Check {
        /// Template file (.json, .yaml, or .yml)
        template: PathBuf,
    },
}

/// Main entry point for the CLI
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let output = Output::new(cli.format, cli.verbose);

    output.verbose("Cadence CLI starting");

    match cli.command {
        Commands::Init { path } => init_template(&output, &path)?,
        Commands::Parse { expression } => expr::parse(&output, &expression)?,
        Commands::Suggest => expr::suggest(&output)?,
        Commands::Preview { template, start } => preview::run(&output, &template, start)?,
        Commands::Check { template } => check::run(&output, &template)?,
    }

    output.verbose("Command completed successfully");
    Ok(())
}

/// Writes the starter template for new services
fn init_template(output: &Output, path: &Path) -> Result<()> {
    if path.exists() {
        anyhow::bail!("Refusing to overwrite existing file: {}", path.display());
    }

    let template = Template::starter();
    storage::save_template(path, &template)
        .with_context(|| format!("Failed to write template: {}", path.display()))?;

    output.verbose_ctx(
        "init",
        &format!("Wrote starter template to: {}", path.display()),
    );

    if output.is_json() {
        output.data(&serde_json::json!({
            "path": path.display().to_string(),
            "template": template.name,
            "milestones": template.milestones.len(),
        }));
    } else {
        output.success(&format!("Created starter template at {}", path.display()));
    }

    Ok(())
}
