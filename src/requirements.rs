//! Caller-supplied project requirements: tasks, constraints, preferences.

use crate::catalog::FrameworkKey;
use crate::error::{ArchitectError, Result};
use serde::Deserialize;

/// One sub-task of the automation project.
///
/// `task_type` is a free-form tag; the rules recognize "query", "research"
/// and "creative", anything else simply never matches.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Task {
    #[serde(rename = "type", default)]
    pub task_type: String,
    #[serde(default, alias = "requiresTools")]
    pub requires_tools: bool,
    #[serde(default)]
    pub sensitive: bool,
}

impl Task {
    pub fn new(task_type: &str) -> Self {
        Self {
            task_type: task_type.to_string(),
            ..Default::default()
        }
    }
}

/// Hard constraints on the deployment.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Constraints {
    #[serde(default, alias = "highVolumeData")]
    pub high_volume_data: bool,
}

/// How much autonomy the agent should have. Anything but "high" is Standard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum Autonomy {
    High,
    #[default]
    Standard,
}

impl From<String> for Autonomy {
    fn from(s: String) -> Self {
        match s.to_lowercase().as_str() {
            "high" => Autonomy::High,
            _ => Autonomy::Standard,
        }
    }
}

/// Expected project complexity. Unrecognized values fall back to Medium.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum Complexity {
    Simple,
    #[default]
    Medium,
    High,
}

impl From<String> for Complexity {
    fn from(s: String) -> Self {
        match s.to_lowercase().as_str() {
            "simple" => Complexity::Simple,
            "high" => Complexity::High,
            _ => Complexity::Medium,
        }
    }
}

/// Soft preferences steering the recommendation.
///
/// An explicit `framework` must name a known catalog key; unknown keys are
/// rejected at deserialization rather than passed through.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Preferences {
    #[serde(default)]
    pub autonomy: Autonomy,
    #[serde(default)]
    pub complexity: Complexity,
    #[serde(default)]
    pub framework: Option<FrameworkKey>,
}

/// Structured description of the automation project to advise on.
///
/// `tasks` is the only required field; everything else defaults. An empty
/// task list is legal and degrades pattern selection to the default.
#[derive(Debug, Clone, Deserialize)]
pub struct Requirements {
    #[serde(default)]
    pub name: String,
    pub tasks: Vec<Task>,
    #[serde(default)]
    pub constraints: Constraints,
    #[serde(default)]
    pub preferences: Preferences,
}

impl Requirements {
    /// Parse requirements from a JSON document.
    ///
    /// A missing or malformed `tasks` sequence (or any other shape problem)
    /// surfaces as a validation error.
    pub fn from_json(input: &str) -> Result<Self> {
        serde_json::from_str(input).map_err(|e| ArchitectError::Validation {
            message: format!("invalid requirements: {e}"),
        })
    }

    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }

    pub fn has_task_type(&self, task_type: &str) -> bool {
        self.tasks.iter().any(|t| t.task_type == task_type)
    }

    pub fn any_requires_tools(&self) -> bool {
        self.tasks.iter().any(|t| t.requires_tools)
    }

    pub fn any_sensitive(&self) -> bool {
        self.tasks.iter().any(|t| t.sensitive)
    }
}
