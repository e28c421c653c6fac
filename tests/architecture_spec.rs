//! Tests for architecture spec expansion: steps, risks, timeline

use agent_architect::ArchitectError;
use agent_architect::catalog::{FrameworkKey, PatternKey};
use agent_architect::generate_architecture_spec;
use agent_architect::recommend::plan::Timeline;
use agent_architect::requirements::{Autonomy, Requirements, Task};

fn requirements(tasks: Vec<Task>) -> Requirements {
    Requirements {
        name: "ops-bot".to_string(),
        tasks,
        constraints: Default::default(),
        preferences: Default::default(),
    }
}

#[test]
fn test_steps_without_tool_integration() {
    let req = requirements(vec![Task::new("query")]);
    let spec = generate_architecture_spec(&req);

    let steps = &spec.implementation.steps;
    assert_eq!(steps.len(), 5);
    assert!(steps[0].starts_with("1. Initialize the project"));
    assert!(steps[0].contains("OpenClaw"));
    assert!(steps[1].contains("Context + current session"));
    assert!(steps[2].contains("Direct Tool Use"));
    assert!(steps[3].starts_with("4. Test and validate"));
    assert!(steps[4].starts_with("5. Deploy and operate"));
}

#[test]
fn test_tool_step_is_inserted_when_needed() {
    let mut req = requirements(vec![Task::new("research"), Task::new("query")]);
    req.tasks[0].requires_tools = true;
    let spec = generate_architecture_spec(&req);

    let steps = &spec.implementation.steps;
    assert_eq!(steps.len(), 6);
    assert!(steps[3].starts_with("4. Integrate the tool chain"));
    assert!(steps[5].starts_with("6. Deploy and operate"));
}

#[test]
fn test_risks_accumulate() {
    // Two tool tasks under high autonomy: the pattern stays ReAct (too few
    // tasks for the pipeline rule), the framework override picks AutoGPT,
    // so all three risk conditions hold at once.
    let mut req = requirements(vec![Task::new("research"), Task::new("query")]);
    req.tasks[0].requires_tools = true;
    req.preferences.autonomy = Autonomy::High;
    let spec = generate_architecture_spec(&req);

    assert_eq!(spec.architecture.pattern.key, PatternKey::React);
    assert_eq!(spec.architecture.framework.key, FrameworkKey::AutoGpt);

    let risks = &spec.implementation.risks;
    assert_eq!(risks.len(), 3);
    assert!(risks[0].risk.contains("fail to terminate"));
    assert!(risks[1].mitigation.contains("emergency stop"));
    assert!(risks[2].risk.contains("Token consumption"));
}

#[test]
fn test_no_risks_for_a_quiet_design() {
    let req = requirements(vec![Task::new("query")]);
    let spec = generate_architecture_spec(&req);
    assert!(spec.implementation.risks.is_empty());
}

#[test]
fn test_timeline_reaches_the_spec() {
    let req = requirements(vec![Task::new("query"); 6]);
    let spec = generate_architecture_spec(&req);
    assert_eq!(spec.implementation.timeline, Timeline::Long);
    assert_eq!(spec.implementation.timeline.label(), "1-2 weeks");
}

#[test]
fn test_project_name_is_carried() {
    let req = requirements(vec![Task::new("query")]);
    let spec = generate_architecture_spec(&req);
    assert_eq!(spec.project, "ops-bot");
}

#[test]
fn test_spec_is_deterministic() {
    let mut req = requirements(vec![Task::new("research"), Task::new("query")]);
    req.tasks[1].requires_tools = true;
    let first = serde_json::to_value(generate_architecture_spec(&req)).unwrap();
    let second = serde_json::to_value(generate_architecture_spec(&req)).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_missing_tasks_is_a_validation_error() {
    let res = Requirements::from_json(r#"{"name": "no-tasks"}"#);
    assert!(matches!(res, Err(ArchitectError::Validation { .. })));
}

#[test]
fn test_spec_from_parsed_json_document() {
    let req = Requirements::from_json(
        r#"{
            "name": "research-helper",
            "tasks": [
                {"type": "research", "requires_tools": true},
                {"type": "query"}
            ],
            "preferences": {"autonomy": "high"}
        }"#,
    )
    .unwrap();
    let spec = generate_architecture_spec(&req);
    assert_eq!(spec.project, "research-helper");
    assert_eq!(spec.architecture.framework.key, FrameworkKey::AutoGpt);
    assert_eq!(spec.implementation.risks.len(), 3);
}
