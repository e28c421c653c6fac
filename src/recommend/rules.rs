//! Ordered decision rules for pattern, framework, and memory selection.
//!
//! Each table is evaluated top to bottom, first match wins. Rule order is a
//! contract: new rules must slot in without disturbing existing precedence.

use crate::catalog::{FrameworkKey, MemoryKey, PatternKey};
use crate::requirements::{Autonomy, Complexity, Requirements};
use once_cell::sync::Lazy;
use tracing::debug;

pub struct PatternRule {
    pub name: &'static str,
    pub applies: fn(&Requirements) -> bool,
    pub outcome: PatternKey,
}

pub struct FrameworkRule {
    pub name: &'static str,
    pub applies: fn(&Requirements) -> bool,
    pub outcome: FrameworkKey,
}

pub struct MemoryRule {
    pub name: &'static str,
    pub applies: fn(&Requirements) -> bool,
    pub outcome: MemoryKey,
}

pub static PATTERN_RULES: Lazy<Vec<PatternRule>> = Lazy::new(|| {
    vec![
        PatternRule {
            name: "single-query",
            applies: |req| req.task_count() == 1 && req.tasks[0].task_type == "query",
            outcome: PatternKey::Direct,
        },
        PatternRule {
            name: "autonomous-pipeline",
            applies: |req| req.preferences.autonomy == Autonomy::High && req.task_count() > 3,
            outcome: PatternKey::PlanExecute,
        },
        PatternRule {
            name: "creative-search",
            applies: |req| {
                req.preferences.complexity == Complexity::High && req.has_task_type("creative")
            },
            outcome: PatternKey::Tot,
        },
        PatternRule {
            name: "tool-loop",
            applies: |req| req.any_requires_tools() && req.task_count() > 1,
            outcome: PatternKey::React,
        },
    ]
});

pub static FRAMEWORK_RULES: Lazy<Vec<FrameworkRule>> = Lazy::new(|| {
    vec![
        FrameworkRule {
            name: "autonomy-first",
            applies: |req| {
                req.preferences.autonomy == Autonomy::High && req.preferences.framework.is_none()
            },
            outcome: FrameworkKey::AutoGpt,
        },
        FrameworkRule {
            name: "complex-graph",
            applies: |req| req.preferences.complexity == Complexity::High && req.task_count() > 5,
            outcome: FrameworkKey::LangGraph,
        },
    ]
});

pub static MEMORY_RULES: Lazy<Vec<MemoryRule>> = Lazy::new(|| {
    vec![
        MemoryRule {
            // Keys off the requested framework preference, not the resolved
            // framework. See DESIGN.md.
            name: "langchain-vector",
            applies: |req| req.preferences.framework == Some(FrameworkKey::LangChain),
            outcome: MemoryKey::VectorDb,
        },
        MemoryRule {
            name: "high-volume",
            applies: |req| req.constraints.high_volume_data,
            outcome: MemoryKey::Hybrid,
        },
    ]
});

/// Select the interaction pattern. Falls back to ReAct when no rule matches.
pub fn select_pattern(req: &Requirements) -> PatternKey {
    for rule in PATTERN_RULES.iter() {
        if (rule.applies)(req) {
            debug!("pattern rule '{}' matched -> {}", rule.name, rule.outcome.as_str());
            return rule.outcome;
        }
    }
    debug!("no pattern rule matched, defaulting to react");
    PatternKey::React
}

/// Select the host framework. The explicit preference (or OpenClaw) is the
/// default; override rules are evaluated on top of it.
pub fn select_framework(req: &Requirements) -> FrameworkKey {
    for rule in FRAMEWORK_RULES.iter() {
        if (rule.applies)(req) {
            debug!(
                "framework rule '{}' matched -> {}",
                rule.name,
                rule.outcome.as_str()
            );
            return rule.outcome;
        }
    }
    req.preferences.framework.unwrap_or(FrameworkKey::OpenClaw)
}

/// Select the memory strategy. Falls back to file-based memory.
pub fn select_memory(req: &Requirements) -> MemoryKey {
    for rule in MEMORY_RULES.iter() {
        if (rule.applies)(req) {
            debug!("memory rule '{}' matched -> {}", rule.name, rule.outcome.as_str());
            return rule.outcome;
        }
    }
    MemoryKey::FileBased
}
