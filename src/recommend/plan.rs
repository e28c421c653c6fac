//! Implementation plan expansion: ordered steps, risks, and a timeline estimate.

use crate::catalog::{FrameworkKey, PatternKey};
use crate::recommend::Recommendation;
use crate::requirements::{Autonomy, Complexity, Requirements};
use serde::Serialize;

/// A project risk paired with its mitigation.
#[derive(Debug, Clone, Serialize)]
pub struct Risk {
    pub risk: String,
    pub mitigation: String,
}

/// Coarse delivery estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Timeline {
    Short,
    Medium,
    Long,
}

impl Timeline {
    pub fn label(&self) -> &'static str {
        match self {
            Timeline::Short => "1-2 days",
            Timeline::Medium => "3-5 days",
            Timeline::Long => "1-2 weeks",
        }
    }
}

impl Serialize for Timeline {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

/// Build the ordered, numbered implementation steps for a recommendation.
/// The tool-chain step only appears when some task actually needs tools;
/// numbering stays sequential either way.
pub fn implementation_steps(analysis: &Recommendation, req: &Requirements) -> Vec<String> {
    let mut steps = vec![
        format!(
            "Initialize the project: scaffold a {} project",
            analysis.framework.name
        ),
        format!(
            "Configure the memory system: implement {}",
            analysis.memory.short_term
        ),
        format!(
            "Implement the core logic around the {} pattern",
            analysis.pattern.name
        ),
    ];

    if req.any_requires_tools() {
        steps.push("Integrate the tool chain: wire up the required tools".to_string());
    }

    steps.push("Test and validate: cover the main scenarios and edge cases".to_string());
    steps.push("Deploy and operate: set up monitoring and logging".to_string());

    steps
        .into_iter()
        .enumerate()
        .map(|(i, s)| format!("{}. {}", i + 1, s))
        .collect()
}

/// Collect the risks this design runs into. Conditions accumulate; several
/// can apply at once.
pub fn identify_risks(analysis: &Recommendation, req: &Requirements) -> Vec<Risk> {
    let mut risks = Vec::new();

    if analysis.pattern.key == PatternKey::React {
        risks.push(Risk {
            risk: "The reasoning-acting loop can fail to terminate".to_string(),
            mitigation: "Cap the iteration count and enforce a timeout".to_string(),
        });
    }

    if req.preferences.autonomy == Autonomy::High {
        risks.push(Risk {
            risk: "Autonomous decisions can drift out of control".to_string(),
            mitigation: "Add human confirmation checkpoints and an emergency stop".to_string(),
        });
    }

    if analysis.framework.key == FrameworkKey::AutoGpt {
        risks.push(Risk {
            risk: "Token consumption can run high".to_string(),
            mitigation: "Set a budget limit and tighten the prompts".to_string(),
        });
    }

    risks
}

/// Estimate delivery time from complexity and task count.
pub fn estimate_timeline(req: &Requirements) -> Timeline {
    let complexity = req.preferences.complexity;
    let tasks = req.task_count();

    if complexity == Complexity::Simple && tasks <= 3 {
        Timeline::Short
    } else if complexity == Complexity::High || tasks > 5 {
        Timeline::Long
    } else {
        Timeline::Medium
    }
}
