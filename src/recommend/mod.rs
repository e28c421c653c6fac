//! Recommendation engine: maps requirements onto the knowledge base.
//!
//! Two entry points: [`analyze`] produces the architecture triple with
//! rationale; [`generate_architecture_spec`] expands it into a full plan.
//! Both are deterministic pure functions over the static catalogs.

pub mod plan;
pub mod rationale;
pub mod rules;

use crate::catalog::{FrameworkKey, MemoryKey, PatternKey, framework, memory, pattern};
use crate::requirements::Requirements;
use plan::{Risk, Timeline};
use serde::Serialize;
use tracing::debug;

/// The selected interaction pattern with its supporting rationale.
#[derive(Debug, Clone, Serialize)]
pub struct PatternChoice {
    pub key: PatternKey,
    pub name: String,
    pub rationale: String,
    pub pros: Vec<String>,
    pub cons: Vec<String>,
}

/// The selected host framework, with up to two alternatives worth a look.
#[derive(Debug, Clone, Serialize)]
pub struct FrameworkChoice {
    pub key: FrameworkKey,
    pub name: String,
    pub rationale: String,
    pub alternatives: Vec<FrameworkKey>,
}

/// The selected memory strategy.
#[derive(Debug, Clone, Serialize)]
pub struct MemoryChoice {
    pub key: MemoryKey,
    pub short_term: String,
    pub long_term: String,
}

/// Output of [`analyze`]: the architecture triple plus general advice.
#[derive(Debug, Clone, Serialize)]
pub struct Recommendation {
    pub pattern: PatternChoice,
    pub framework: FrameworkChoice,
    pub memory: MemoryChoice,
    pub recommendations: Vec<String>,
}

/// The architecture triple inside a full spec.
#[derive(Debug, Clone, Serialize)]
pub struct Architecture {
    pub pattern: PatternChoice,
    pub framework: FrameworkChoice,
    pub memory: MemoryChoice,
}

/// Ordered steps, risks, and timeline for delivering the architecture.
#[derive(Debug, Clone, Serialize)]
pub struct ImplementationPlan {
    pub steps: Vec<String>,
    pub risks: Vec<Risk>,
    pub timeline: Timeline,
}

/// Output of [`generate_architecture_spec`].
#[derive(Debug, Clone, Serialize)]
pub struct ArchitectureSpec {
    pub project: String,
    pub architecture: Architecture,
    pub implementation: ImplementationPlan,
    pub recommendations: Vec<String>,
}

/// Analyze requirements and recommend an architecture.
///
/// Total over any well-formed [`Requirements`] value, including an empty
/// task list; identical input always yields an identical recommendation.
pub fn analyze(req: &Requirements) -> Recommendation {
    let pattern_key = rules::select_pattern(req);
    let framework_key = rules::select_framework(req);
    let memory_key = rules::select_memory(req);
    debug!(
        "selected pattern={} framework={} memory={}",
        pattern_key.as_str(),
        framework_key.as_str(),
        memory_key.as_str()
    );

    let pattern_entry = pattern::entry_for(pattern_key);
    let framework_entry = framework::entry_for(framework_key);
    let memory_entry = memory::entry_for(memory_key);

    Recommendation {
        pattern: PatternChoice {
            key: pattern_key,
            name: pattern_entry.name.to_string(),
            rationale: rationale::pattern_rationale(pattern_key, req),
            pros: pattern_entry.pros.iter().map(|s| s.to_string()).collect(),
            cons: pattern_entry.cons.iter().map(|s| s.to_string()).collect(),
        },
        framework: FrameworkChoice {
            key: framework_key,
            name: framework_entry.name.to_string(),
            rationale: rationale::framework_rationale(framework_key, req),
            alternatives: rationale::suggest_alternatives(framework_key, req),
        },
        memory: MemoryChoice {
            key: memory_key,
            short_term: memory_entry.short_term.to_string(),
            long_term: memory_entry.long_term.to_string(),
        },
        recommendations: rationale::general_recommendations(req),
    }
}

/// Expand an analysis into a complete architecture spec with implementation
/// steps, risks, and a timeline estimate.
pub fn generate_architecture_spec(req: &Requirements) -> ArchitectureSpec {
    let analysis = analyze(req);

    let steps = plan::implementation_steps(&analysis, req);
    let risks = plan::identify_risks(&analysis, req);
    let timeline = plan::estimate_timeline(req);

    ArchitectureSpec {
        project: req.name.clone(),
        architecture: Architecture {
            pattern: analysis.pattern,
            framework: analysis.framework,
            memory: analysis.memory,
        },
        implementation: ImplementationPlan {
            steps,
            risks,
            timeline,
        },
        recommendations: analysis.recommendations,
    }
}
