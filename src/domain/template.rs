//! Service template domain model
//!
//! Templates describe a service's milestone/task structure in relative time
//! only; no absolute date appears anywhere in a template. Offset fields hold
//! the author's raw text exactly as typed - they are parsed when a schedule
//! is computed, so a half-finished expression can be saved without losing
//! anything.

use serde::{Deserialize, Serialize};

/// Priority of a templated task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TaskPriority {
    Low,
    #[default]
    Medium,
    High,
}

impl TaskPriority {
    /// Returns a display label for the priority
    pub fn label(&self) -> &'static str {
        match self {
            TaskPriority::Low => "low",
            TaskPriority::Medium => "medium",
            TaskPriority::High => "high",
        }
    }
}

/// A task definition within a milestone
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskSpec {
    /// Human-readable title
    pub title: String,

    /// Priority
    #[serde(default)]
    pub priority: TaskPriority,

    /// Ordering among sibling tasks (ascending; ties keep declaration order)
    pub position: u32,

    /// Due date relative to the owning milestone's start (e.g. "3 days").
    /// Tasks are never measured against each other.
    pub due_offset: String,
}

impl TaskSpec {
    /// Creates a task with default priority
    pub fn new(title: impl Into<String>, position: u32, due_offset: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            priority: TaskPriority::default(),
            position,
            due_offset: due_offset.into(),
        }
    }
}

/// A milestone definition with its tasks
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MilestoneSpec {
    /// Human-readable name
    pub name: String,

    /// Ordering among milestones (ascending; ties keep declaration order)
    pub position: u32,

    /// Start relative to the service start date. Only the first milestone in
    /// position order is measured from the anchor; later milestones begin at
    /// their predecessor's computed due date and ignore this field.
    pub start_offset: String,

    /// Due date relative to this milestone's own start
    pub due_offset: String,

    /// Tasks under this milestone
    #[serde(default)]
    pub tasks: Vec<TaskSpec>,
}

impl MilestoneSpec {
    /// Creates a milestone with no tasks
    pub fn new(
        name: impl Into<String>,
        position: u32,
        start_offset: impl Into<String>,
        due_offset: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            position,
            start_offset: start_offset.into(),
            due_offset: due_offset.into(),
            tasks: Vec::new(),
        }
    }
}

/// A service template: name, optional description, ordered milestones
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Template {
    /// Template name
    pub name: String,

    /// Optional description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Milestones in authored order
    #[serde(default)]
    pub milestones: Vec<MilestoneSpec>,
}

impl Template {
    /// Creates an empty template
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            milestones: Vec::new(),
        }
    }

    /// The starter template written by `cadence init`
    pub fn starter() -> Self {
        Self {
            name: "Client Onboarding".to_string(),
            description: Some("Standard onboarding schedule for new clients".to_string()),
            milestones: vec![
                MilestoneSpec {
                    name: "Kickoff".to_string(),
                    position: 1,
                    start_offset: "same day".to_string(),
                    due_offset: "1 week".to_string(),
                    tasks: vec![
                        TaskSpec {
                            title: "Welcome call".to_string(),
                            priority: TaskPriority::High,
                            position: 1,
                            due_offset: "next day".to_string(),
                        },
                        TaskSpec {
                            title: "Collect brand assets".to_string(),
                            priority: TaskPriority::Medium,
                            position: 2,
                            due_offset: "3 days".to_string(),
                        },
                    ],
                },
                MilestoneSpec {
                    name: "First Deliverable".to_string(),
                    position: 2,
                    start_offset: "1 week".to_string(),
                    due_offset: "2 weeks".to_string(),
                    tasks: vec![
                        TaskSpec {
                            title: "Internal draft review".to_string(),
                            priority: TaskPriority::Medium,
                            position: 1,
                            due_offset: "1 week".to_string(),
                        },
                        TaskSpec {
                            title: "Client sign-off".to_string(),
                            priority: TaskPriority::High,
                            position: 2,
                            due_offset: "2 weeks".to_string(),
                        },
                    ],
                },
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Offset;

    #[test]
    fn serde_roundtrip_json() {
        let template = Template::starter();
        let json = serde_json::to_string(&template).unwrap();
        let parsed: Template = serde_json::from_str(&json).unwrap();

        assert_eq!(template, parsed);
    }

    #[test]
    fn serde_roundtrip_yaml() {
        let template = Template::starter();
        let yaml = serde_yaml::to_string(&template).unwrap();
        let parsed: Template = serde_yaml::from_str(&yaml).unwrap();

        assert_eq!(template, parsed);
    }

    #[test]
    fn priority_defaults_to_medium() {
        let json = r#"{"title": "Task", "position": 1, "due_offset": "1 week"}"#;
        let task: TaskSpec = serde_json::from_str(json).unwrap();

        assert_eq!(task.priority, TaskPriority::Medium);
    }

    #[test]
    fn tasks_default_to_empty() {
        let json = r#"{
            "name": "Solo",
            "position": 1,
            "start_offset": "same day",
            "due_offset": "1 week"
        }"#;
        let milestone: MilestoneSpec = serde_json::from_str(json).unwrap();

        assert!(milestone.tasks.is_empty());
    }

    #[test]
    fn offsets_are_stored_as_raw_text() {
        // Raw text survives serialization untouched, even when invalid
        let mut milestone = MilestoneSpec::new("M", 1, "same day", "not yet decided");
        milestone.tasks.push(TaskSpec::new("T", 1, "2 weeeks"));

        let json = serde_json::to_string(&milestone).unwrap();
        let parsed: MilestoneSpec = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.due_offset, "not yet decided");
        assert_eq!(parsed.tasks[0].due_offset, "2 weeeks");
    }

    #[test]
    fn starter_template_offsets_all_parse() {
        let template = Template::starter();

        for milestone in &template.milestones {
            assert!(milestone.start_offset.parse::<Offset>().is_ok());
            assert!(milestone.due_offset.parse::<Offset>().is_ok());
            for task in &milestone.tasks {
                assert!(task.due_offset.parse::<Offset>().is_ok());
            }
        }
    }

    #[test]
    fn priority_labels() {
        assert_eq!(TaskPriority::Low.label(), "low");
        assert_eq!(TaskPriority::Medium.label(), "medium");
        assert_eq!(TaskPriority::High.label(), "high");
    }
}
