//! Interaction pattern catalog.

use serde::{Deserialize, Serialize};

/// Stable identifiers for the supported interaction patterns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PatternKey {
    Direct,
    React,
    Cot,
    Tot,
    PlanExecute,
    MultiAgent,
}

impl PatternKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            PatternKey::Direct => "direct",
            PatternKey::React => "react",
            PatternKey::Cot => "cot",
            PatternKey::Tot => "tot",
            PatternKey::PlanExecute => "planExecute",
            PatternKey::MultiAgent => "multiAgent",
        }
    }

    /// All keys, in catalog order.
    pub fn all() -> &'static [PatternKey] {
        &[
            PatternKey::Direct,
            PatternKey::React,
            PatternKey::Cot,
            PatternKey::Tot,
            PatternKey::PlanExecute,
            PatternKey::MultiAgent,
        ]
    }
}

/// Descriptive entry for one interaction pattern.
#[derive(Debug, Clone, Copy)]
pub struct PatternEntry {
    pub key: PatternKey,
    pub name: &'static str,
    pub description: &'static str,
    pub suitable: &'static [&'static str],
    pub pros: &'static [&'static str],
    pub cons: &'static [&'static str],
    pub examples: &'static [&'static str],
}

/// Look up the catalog entry for a pattern key. Total over the closed key set.
pub fn entry_for(key: PatternKey) -> &'static PatternEntry {
    match key {
        PatternKey::Direct => &DIRECT,
        PatternKey::React => &REACT,
        PatternKey::Cot => &COT,
        PatternKey::Tot => &TOT,
        PatternKey::PlanExecute => &PLAN_EXECUTE,
        PatternKey::MultiAgent => &MULTI_AGENT,
    }
}

static DIRECT: PatternEntry = PatternEntry {
    key: PatternKey::Direct,
    name: "Direct Tool Use",
    description: "Calls a tool directly without a reasoning chain",
    suitable: &["simple queries", "single tool calls", "deterministic tasks"],
    pros: &["simple", "efficient", "predictable"],
    cons: &["cannot handle complex multi-step tasks"],
    examples: &["weather lookup", "unit conversion", "quick search"],
};

static REACT: PatternEntry = PatternEntry {
    key: PatternKey::React,
    name: "ReAct (Reasoning + Acting)",
    description: "Alternates reasoning and action, feeding observations back into a loop",
    suitable: &[
        "multi-step decisions",
        "tool call chains",
        "gathering and consolidating information",
    ],
    pros: &[
        "flexible",
        "intermediate steps are observable",
        "recoverable from errors",
    ],
    cons: &["can get stuck in loops", "higher token usage"],
    examples: &["research tasks", "data analysis", "complex queries"],
};

static COT: PatternEntry = PatternEntry {
    key: PatternKey::Cot,
    name: "Chain-of-Thought",
    description: "Guides the model step by step through intermediate reasoning",
    suitable: &["math problems", "logical reasoning", "complex decisions"],
    pros: &["improves reasoning accuracy", "strong explainability"],
    cons: &["unsuited to tasks that need external tools"],
    examples: &["math problem solving", "logic puzzles", "decision analysis"],
};

static TOT: PatternEntry = PatternEntry {
    key: PatternKey::Tot,
    name: "Tree-of-Thoughts",
    description: "Tree search exploring multiple candidate reasoning paths",
    suitable: &["creative generation", "game solving", "complex planning"],
    pros: &["explores many possibilities", "can find the best solution"],
    cons: &["high token usage", "needs an evaluation mechanism"],
    examples: &["creative writing", "board games", "strategic planning"],
};

static PLAN_EXECUTE: PatternEntry = PatternEntry {
    key: PatternKey::PlanExecute,
    name: "Plan-and-Execute",
    description: "Plans first, then works through the plan to finish complex tasks",
    suitable: &["complex workflows", "multi-step tasks", "predictable processes"],
    pros: &["predictable", "debuggable", "automation friendly"],
    cons: &["less flexible", "struggles with the unexpected"],
    examples: &["data pipelines", "automated reporting", "CI/CD"],
};

static MULTI_AGENT: PatternEntry = PatternEntry {
    key: PatternKey::MultiAgent,
    name: "Multi-Agent Collaboration",
    description: "Several agents cooperate to complete a shared task",
    suitable: &[
        "team collaboration simulations",
        "complex projects",
        "tasks needing division of labor",
    ],
    pros: &["parallel processing", "specialized roles", "scalable"],
    cons: &[
        "coordination complexity",
        "communication overhead",
        "hard to debug",
    ],
    examples: &["content production teams", "software development", "research projects"],
};
