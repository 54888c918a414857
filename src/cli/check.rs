//! Template lint command
//!
//! Resolves every offset expression in a template and reports the fields
//! that fail to parse. Previews tolerate bad fields by rendering TBD; this
//! is the view that points at them. Exits non-zero when any field is
//! invalid.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use super::output::Output;
use crate::domain::{Offset, Template};
use crate::storage;

/// One invalid offset field found in a template
#[derive(Debug, Serialize)]
struct OffsetIssue {
    /// Where the field lives, e.g. `milestone 'Kickoff' start`
    field: String,
    /// The raw expression as authored
    expression: String,
    /// The parser's message
    error: String,
}

pub fn run(output: &Output, path: &Path) -> Result<()> {
    let template = storage::load_template(path)
        .with_context(|| format!("Failed to load template: {}", path.display()))?;

    let issues = collect_issues(&template);
    output.verbose_ctx(
        "check",
        &format!(
            "Checked template '{}': {} issue(s)",
            template.name,
            issues.len()
        ),
    );

    if output.is_json() {
        output.data(&serde_json::json!({
            "template": template.name,
            "valid": issues.is_empty(),
            "issues": issues,
        }));
    } else if issues.is_empty() {
        output.success(&format!(
            "All offset expressions in '{}' are valid",
            template.name
        ));
    } else {
        println!("Invalid offset expressions in '{}':", template.name);
        println!();
        println!("{:<36} {:<18} ERROR", "FIELD", "EXPRESSION");
        println!("{}", "-".repeat(80));
        for issue in &issues {
            println!(
                "{:<36} {:<18} {}",
                issue.field, issue.expression, issue.error
            );
        }
    }

    if issues.is_empty() {
        Ok(())
    } else {
        anyhow::bail!("{} invalid offset expression(s)", issues.len())
    }
}

/// Walks every offset field in authored order
fn collect_issues(template: &Template) -> Vec<OffsetIssue> {
    let mut issues = Vec::new();

    for milestone in &template.milestones {
        check_field(
            &mut issues,
            format!("milestone '{}' start", milestone.name),
            &milestone.start_offset,
        );
        check_field(
            &mut issues,
            format!("milestone '{}' due", milestone.name),
            &milestone.due_offset,
        );

        for task in &milestone.tasks {
            check_field(
                &mut issues,
                format!("task '{}' due", task.title),
                &task.due_offset,
            );
        }
    }

    issues
}

fn check_field(issues: &mut Vec<OffsetIssue>, field: String, expression: &str) {
    if let Err(err) = expression.parse::<Offset>() {
        issues.push(OffsetIssue {
            field,
            expression: expression.to_string(),
            error: err.to_string(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{MilestoneSpec, TaskSpec};

    #[test]
    fn valid_template_has_no_issues() {
        let template = Template::starter();
        assert!(collect_issues(&template).is_empty());
    }

    #[test]
    fn reports_each_invalid_field_once() {
        let mut template = Template::new("Broken");
        let mut milestone = MilestoneSpec::new("M", 1, "whenever", "two weeks");
        milestone.tasks.push(TaskSpec::new("T", 1, "3 days"));
        milestone.tasks.push(TaskSpec::new("U", 2, "2 fortnights"));
        template.milestones.push(milestone);

        let issues = collect_issues(&template);
        let fields: Vec<&str> = issues.iter().map(|i| i.field.as_str()).collect();

        assert_eq!(
            fields,
            vec!["milestone 'M' start", "milestone 'M' due", "task 'U' due"]
        );
    }

    #[test]
    fn issue_carries_expression_and_parser_message() {
        let mut template = Template::new("Broken");
        template
            .milestones
            .push(MilestoneSpec::new("M", 1, "same day", "two weeks"));

        let issues = collect_issues(&template);

        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].expression, "two weeks");
        assert!(issues[0].error.contains("two"));
    }
}
