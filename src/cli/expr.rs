//! Offset expression commands (parse, suggest)

use anyhow::{Context, Result};

use super::output::Output;
use crate::domain::{suggestions, Offset};

/// Parses one offset expression and reports its resolved day count
///
/// Invalid expressions fail the command with the parser's message - the
/// terminal rendition of a per-field "invalid format" indicator.
pub fn parse(output: &Output, expression: &str) -> Result<()> {
    output.verbose_ctx("parse", &format!("Parsing expression: '{}'", expression));

    let offset: Offset = expression
        .parse()
        .with_context(|| format!("Invalid offset expression '{}'", expression))?;

    if output.is_json() {
        output.data(&serde_json::json!({
            "expression": expression,
            "canonical": offset.to_string(),
            "days": offset.total_days(),
        }));
    } else {
        println!("Expression: {}", expression);
        println!("Canonical:  {}", offset);
        println!("Days:       {}", offset.total_days());
    }

    Ok(())
}

/// Prints the curated suggestion catalog in display order
pub fn suggest(output: &Output) -> Result<()> {
    let entries = suggestions();
    output.verbose_ctx("suggest", &format!("{} catalog entries", entries.len()));

    if output.is_json() {
        output.data(&entries);
    } else {
        println!("{:<12} {:<12} DAYS", "LABEL", "EXPRESSION");
        println!("{}", "-".repeat(34));
        for suggestion in entries {
            println!(
                "{:<12} {:<12} {}",
                suggestion.label, suggestion.expression, suggestion.total_days
            );
        }
    }

    Ok(())
}
