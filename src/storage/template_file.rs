//! Template file persistence
//!
//! Templates travel as single JSON or YAML documents, selected by file
//! extension. This is boundary plumbing for the CLI and tests; the engine
//! itself never touches the filesystem, and nothing here indexes, caches,
//! or queries.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::domain::Template;

#[derive(Debug, Error)]
pub enum TemplateFileError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unsupported template extension: '{0}' (expected .json, .yaml, or .yml)")]
    UnknownExtension(String),

    #[error("Invalid JSON template: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid YAML template: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Template file format, chosen by extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TemplateFormat {
    Json,
    Yaml,
}

fn detect_format(path: &Path) -> Result<TemplateFormat, TemplateFileError> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or_default()
        .to_lowercase();

    match extension.as_str() {
        "json" => Ok(TemplateFormat::Json),
        "yaml" | "yml" => Ok(TemplateFormat::Yaml),
        _ => Err(TemplateFileError::UnknownExtension(extension)),
    }
}

/// Loads a template from a JSON or YAML file
pub fn load_template(path: &Path) -> Result<Template, TemplateFileError> {
    let format = detect_format(path)?;
    let content = fs::read_to_string(path)?;

    let template = match format {
        TemplateFormat::Json => serde_json::from_str(&content)?,
        TemplateFormat::Yaml => serde_yaml::from_str(&content)?,
    };

    Ok(template)
}

/// Saves a template to a JSON or YAML file, chosen by extension
pub fn save_template(path: &Path, template: &Template) -> Result<(), TemplateFileError> {
    let format = detect_format(path)?;

    let content = match format {
        TemplateFormat::Json => serde_json::to_string_pretty(template)?,
        TemplateFormat::Yaml => serde_yaml::to_string(template)?,
    };

    fs::write(path, content)?;
    Ok(())
}
