//! Tests for the Output module
//!
//! Output provides structured result types that can be rendered as either
//! human-readable text or machine-parseable JSON.

use buildmail::core::models::{IntegrationStatus, Recipient, SubjectCategory, TriggerCategory};
use buildmail::output::{NotifyResult, OutputMode, SubjectInfo, ValidateResult};

#[test]
fn output_mode_default() {
    assert_eq!(OutputMode::default(), OutputMode::Human);
}

#[test]
fn notify_result_serialization() {
    let result = NotifyResult {
        status: IntegrationStatus::Failure,
        previous_status: IntegrationStatus::Success,
        state_changed: true,
        category: SubjectCategory::Broken,
        recipients: vec![Recipient::new("alice", "alice@example.com")],
        to: "alice@example.com".to_string(),
        subject: "Foo Build Failed".to_string(),
    };

    let json = serde_json::to_string(&result).unwrap();
    assert!(json.contains("\"status\":\"failure\""));
    assert!(json.contains("\"previous_status\":\"success\""));
    assert!(json.contains("\"category\":\"broken\""));
    assert!(json.contains("\"address\":\"alice@example.com\""));
    assert!(json.contains("\"subject\":\"Foo Build Failed\""));
}

#[test]
fn still_broken_serializes_lowercase() {
    let json = serde_json::to_string(&SubjectCategory::StillBroken).unwrap();
    assert_eq!(json, "\"stillbroken\"");
}

#[test]
fn validate_result_serialization() {
    let result = ValidateResult {
        path: "rules.toml".to_string(),
        users: 3,
        groups: 1,
        converters: vec!["regex".to_string(), "lowercase".to_string()],
        modifier_categories: vec![TriggerCategory::Failed],
        subjects: vec![SubjectInfo {
            category: SubjectCategory::Success,
            template: "green".to_string(),
        }],
        subject_prefix: None,
    };

    let json = serde_json::to_string(&result).unwrap();
    assert!(json.contains("\"users\":3"));
    assert!(json.contains("\"converters\":[\"regex\",\"lowercase\"]"));
    assert!(json.contains("\"modifier_categories\":[\"failed\"]"));
    assert!(json.contains("\"subject_prefix\":null"));
}
