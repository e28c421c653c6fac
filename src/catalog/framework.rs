//! Host framework catalog.

use serde::{Deserialize, Serialize};

/// Stable identifiers for the supported host frameworks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FrameworkKey {
    OpenClaw,
    LangChain,
    LangGraph,
    AutoGpt,
    CrewAi,
}

impl FrameworkKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            FrameworkKey::OpenClaw => "openClaw",
            FrameworkKey::LangChain => "langChain",
            FrameworkKey::LangGraph => "langGraph",
            FrameworkKey::AutoGpt => "autoGpt",
            FrameworkKey::CrewAi => "crewAi",
        }
    }

    /// All keys, in catalog order.
    pub fn all() -> &'static [FrameworkKey] {
        &[
            FrameworkKey::OpenClaw,
            FrameworkKey::LangChain,
            FrameworkKey::LangGraph,
            FrameworkKey::AutoGpt,
            FrameworkKey::CrewAi,
        ]
    }
}

/// Descriptive entry for one host framework.
#[derive(Debug, Clone, Copy)]
pub struct FrameworkEntry {
    pub key: FrameworkKey,
    pub name: &'static str,
    pub strengths: &'static [&'static str],
    pub weaknesses: &'static [&'static str],
    pub best_for: &'static [&'static str],
}

/// Look up the catalog entry for a framework key. Total over the closed key set.
pub fn entry_for(key: FrameworkKey) -> &'static FrameworkEntry {
    match key {
        FrameworkKey::OpenClaw => &OPEN_CLAW,
        FrameworkKey::LangChain => &LANG_CHAIN,
        FrameworkKey::LangGraph => &LANG_GRAPH,
        FrameworkKey::AutoGpt => &AUTO_GPT,
        FrameworkKey::CrewAi => &CREW_AI,
    }
}

static OPEN_CLAW: FrameworkEntry = FrameworkEntry {
    key: FrameworkKey::OpenClaw,
    name: "OpenClaw",
    strengths: &[
        "human-in-the-loop collaboration",
        "reusable skills",
        "file-based memory",
        "isolated sub-sessions",
    ],
    weaknesses: &["smaller community", "lower degree of automation"],
    best_for: &[
        "personal assistants",
        "tool-heavy workflows",
        "work needing human oversight",
    ],
};

static LANG_CHAIN: FrameworkEntry = FrameworkEntry {
    key: FrameworkKey::LangChain,
    name: "LangChain",
    strengths: &[
        "rich ecosystem",
        "many integrations",
        "large community",
        "enterprise grade",
    ],
    weaknesses: &["steep learning curve", "heavy abstraction", "hard to debug"],
    best_for: &[
        "enterprise applications",
        "rapid integration",
        "complex chained tasks",
    ],
};

static LANG_GRAPH: FrameworkEntry = FrameworkEntry {
    key: FrameworkKey::LangGraph,
    name: "LangGraph",
    strengths: &[
        "graph-structured workflows",
        "state management",
        "LangChain compatible",
    ],
    weaknesses: &["complex abstractions", "hard to debug", "performance overhead"],
    best_for: &["complex workflows", "state persistence", "multi-agent setups"],
};

static AUTO_GPT: FrameworkEntry = FrameworkEntry {
    key: FrameworkKey::AutoGpt,
    name: "AutoGPT",
    strengths: &["works out of the box", "autonomous decisions", "goal driven"],
    weaknesses: &["weak controllability", "high token usage", "high failure rate"],
    best_for: &["research exploration", "prototyping", "non-critical tasks"],
};

static CREW_AI: FrameworkEntry = FrameworkEntry {
    key: FrameworkKey::CrewAi,
    name: "CrewAI",
    strengths: &[
        "intuitive role-play model",
        "configuration driven",
        "simple collaboration",
    ],
    weaknesses: &["limited flexibility", "performance overhead", "small ecosystem"],
    best_for: &[
        "content creation",
        "process simulation",
        "multi-role collaboration",
    ],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_key_has_an_entry() {
        for key in FrameworkKey::all() {
            let entry = entry_for(*key);
            assert_eq!(entry.key, *key);
            assert!(!entry.strengths.is_empty());
            assert!(!entry.best_for.is_empty());
        }
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let parsed: Result<FrameworkKey, _> = serde_json::from_str("\"smolagents\"");
        assert!(parsed.is_err());
        let parsed: FrameworkKey = serde_json::from_str("\"langGraph\"").unwrap();
        assert_eq!(parsed, FrameworkKey::LangGraph);
    }
}
