//! End-to-end scenarios for the analyze entry point

use agent_architect::catalog::{FrameworkKey, MemoryKey, PatternKey};
use agent_architect::requirements::{Autonomy, Complexity, Requirements, Task};
use agent_architect::analyze;

fn requirements(tasks: Vec<Task>) -> Requirements {
    Requirements {
        name: "test-project".to_string(),
        tasks,
        constraints: Default::default(),
        preferences: Default::default(),
    }
}

#[test]
fn test_single_query_defaults() {
    // Scenario: one plain query task, no preferences at all.
    let req = requirements(vec![Task::new("query")]);
    let rec = analyze(&req);

    assert_eq!(rec.pattern.key, PatternKey::Direct);
    assert_eq!(rec.framework.key, FrameworkKey::OpenClaw);
    assert_eq!(rec.memory.key, MemoryKey::FileBased);
    assert!(rec.pattern.rationale.contains("Direct Tool Use"));
}

#[test]
fn test_high_autonomy_pipeline() {
    // Scenario: four tasks under high autonomy, no framework preference.
    let mut req = requirements(vec![
        Task::new("research"),
        Task::new("query"),
        Task::new("query"),
        Task::new("report"),
    ]);
    req.preferences.autonomy = Autonomy::High;
    let rec = analyze(&req);

    assert_eq!(rec.pattern.key, PatternKey::PlanExecute);
    assert_eq!(rec.framework.key, FrameworkKey::AutoGpt);
    assert!(
        rec.recommendations
            .iter()
            .any(|r| r.contains("human confirmation gate"))
    );
}

#[test]
fn test_complex_creative_project() {
    // Scenario: six tasks, high complexity, one creative task. The creative
    // rule fires before the tool rule, and scale pushes the framework to
    // LangGraph.
    let mut tasks = vec![Task::new("query"); 5];
    tasks.push(Task::new("creative"));
    tasks[0].requires_tools = true;

    let mut req = requirements(tasks);
    req.preferences.complexity = Complexity::High;
    let rec = analyze(&req);

    assert_eq!(rec.pattern.key, PatternKey::Tot);
    assert_eq!(rec.framework.key, FrameworkKey::LangGraph);
    assert_eq!(rec.memory.key, MemoryKey::FileBased);
}

#[test]
fn test_langchain_preference_drives_memory() {
    // The memory override follows the requested preference even when the
    // resolved framework ends up different.
    let mut req = requirements(vec![Task::new("query"); 6]);
    req.preferences.complexity = Complexity::High;
    req.preferences.framework = Some(FrameworkKey::LangChain);
    let rec = analyze(&req);

    assert_eq!(rec.framework.key, FrameworkKey::LangGraph);
    assert_eq!(rec.memory.key, MemoryKey::VectorDb);
}

#[test]
fn test_sensitive_task_caution_appears_once() {
    let mut req = requirements(vec![Task::new("query"), Task::new("admin")]);
    req.tasks[0].sensitive = true;
    req.tasks[1].sensitive = true;
    let rec = analyze(&req);

    let caution_count = rec
        .recommendations
        .iter()
        .filter(|r| r.contains("audit logging"))
        .count();
    assert_eq!(caution_count, 1);
}

#[test]
fn test_alternatives_never_exceed_two() {
    for n in 0..10 {
        let req = requirements(vec![Task::new("query"); n]);
        let rec = analyze(&req);
        assert!(rec.framework.alternatives.len() <= 2);
    }
}

#[test]
fn test_empty_tasks_is_total() {
    let req = requirements(vec![]);
    let rec = analyze(&req);
    assert_eq!(rec.pattern.key, PatternKey::React);
    assert!(!rec.recommendations.is_empty());
}

#[test]
fn test_analyze_is_deterministic() {
    let mut req = requirements(vec![Task::new("research"), Task::new("creative")]);
    req.tasks[0].requires_tools = true;
    req.preferences.complexity = Complexity::High;

    let first = serde_json::to_value(analyze(&req)).unwrap();
    let second = serde_json::to_value(analyze(&req)).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_closing_recommendation_always_present() {
    let req = requirements(vec![Task::new("query")]);
    let rec = analyze(&req);
    assert!(
        rec.recommendations
            .last()
            .unwrap()
            .contains("simplest architecture")
    );
}
