//! Natural-language rationale and recommendation text composition.

use crate::catalog::{FrameworkKey, PatternKey, framework, pattern};
use crate::requirements::{Autonomy, Requirements};

/// Explain why the selected pattern fits. A base sentence names the pattern;
/// recognized situations append one canned clause, everything else keeps the
/// base sentence alone.
pub fn pattern_rationale(key: PatternKey, req: &Requirements) -> String {
    let entry = pattern::entry_for(key);
    let mut rationale = format!("Based on your requirements, {} is the best fit.", entry.name);

    if key == PatternKey::React && req.has_task_type("research") {
        rationale.push_str(
            " Your tasks involve research and information gathering; the reasoning-acting \
             loop of ReAct suits this kind of multi-step exploration.",
        );
    } else if key == PatternKey::PlanExecute && req.task_count() > 3 {
        rationale.push_str(
            " Your workflow has quite a few moving parts; planning before executing gives \
             better predictability and easier debugging.",
        );
    } else if key == PatternKey::Direct {
        rationale.push_str(
            " Your needs are simple and direct; calling a tool straight away is the most \
             efficient choice, with no reasoning chain required.",
        );
    }

    rationale
}

/// Explain why the selected framework fits. Only OpenClaw, LangChain, and
/// AutoGPT carry a tailored clause; the remaining keys get the base sentence
/// alone (see DESIGN.md).
pub fn framework_rationale(key: FrameworkKey, _req: &Requirements) -> String {
    let entry = framework::entry_for(key);
    let mut rationale = format!("{} is recommended for this project.", entry.name);

    match key {
        FrameworkKey::OpenClaw => rationale.push_str(
            " Its human-in-the-loop design and file-system memory fit your usage pattern well.",
        ),
        FrameworkKey::LangChain => rationale.push_str(
            " Its rich ecosystem and enterprise features can carry your integration needs.",
        ),
        FrameworkKey::AutoGpt => {
            rationale.push_str(" Its highly autonomous design suits exploratory workloads.")
        }
        FrameworkKey::LangGraph | FrameworkKey::CrewAi => {}
    }

    rationale
}

/// Suggest up to two alternative frameworks worth evaluating.
pub fn suggest_alternatives(chosen: FrameworkKey, req: &Requirements) -> Vec<FrameworkKey> {
    let mut alternatives = Vec::new();

    if chosen != FrameworkKey::OpenClaw && req.preferences.autonomy != Autonomy::High {
        alternatives.push(FrameworkKey::OpenClaw);
    }
    if chosen != FrameworkKey::LangChain && req.task_count() > 5 {
        alternatives.push(FrameworkKey::LangChain);
    }

    alternatives.truncate(2);
    alternatives
}

/// General recommendations that apply across pattern and framework choices,
/// emitted in a fixed order.
pub fn general_recommendations(req: &Requirements) -> Vec<String> {
    let mut recs = Vec::new();

    if req.preferences.autonomy == Autonomy::High {
        recs.push(
            "Add a human confirmation gate so an autonomous agent cannot run away unattended."
                .to_string(),
        );
    }

    if req.any_sensitive() {
        recs.push(
            "Tasks touch sensitive operations; implement permission boundaries and audit logging."
                .to_string(),
        );
    }

    recs.push(
        "Start with the simplest architecture that works and iterate based on real runs."
            .to_string(),
    );

    recs
}
