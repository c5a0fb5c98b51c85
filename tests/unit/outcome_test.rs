//! Tests for outcome classification
//!
//! The state-change predicate, trigger guards and subject categories are
//! shared by the recipient resolver and the subject composer.

use buildmail::core::models::IntegrationStatus::{
    Cancelled, Exception, Failure, Success, Unknown,
};
use buildmail::core::models::{IntegrationStatus, SubjectCategory, TriggerCategory};
use buildmail::core::services::{classify, state_changed, trigger_applies};
use buildmail::NotifyError;
use test_case::test_case;

use crate::common::build;

// =============================================================================
// State Change
// =============================================================================

#[test_case(Success, Success, false ; "success after success")]
#[test_case(Success, Failure, true ; "success after failure")]
#[test_case(Failure, Failure, false ; "failure after failure")]
#[test_case(Failure, Success, true ; "failure after success")]
#[test_case(Exception, Failure, true ; "exception after failure")]
#[test_case(Success, Unknown, true ; "first run counts as changed")]
fn test_state_changed(status: IntegrationStatus, previous: IntegrationStatus, expected: bool) {
    assert_eq!(state_changed(&build(status, previous)), expected);
}

// =============================================================================
// Trigger Guards
// =============================================================================

#[test_case(TriggerCategory::Always, Success, Success, false, true ; "always on success")]
#[test_case(TriggerCategory::Always, Cancelled, Cancelled, false, true ; "always on cancelled")]
#[test_case(TriggerCategory::Change, Failure, Success, false, true ; "change when changed")]
#[test_case(TriggerCategory::Change, Failure, Failure, false, false ; "change when unchanged")]
#[test_case(TriggerCategory::Failed, Failure, Failure, false, true ; "failed on failure")]
#[test_case(TriggerCategory::Failed, Exception, Exception, false, true ; "failed on exception")]
#[test_case(TriggerCategory::Failed, Success, Failure, true, false ; "failed on success")]
#[test_case(TriggerCategory::Success, Success, Success, false, true ; "success on success")]
#[test_case(TriggerCategory::Success, Failure, Success, false, false ; "success on failure")]
#[test_case(TriggerCategory::Fixed, Success, Failure, true, true ; "fixed when flagged")]
#[test_case(TriggerCategory::Fixed, Success, Failure, false, false ; "fixed needs the flag")]
#[test_case(TriggerCategory::Exception, Exception, Success, false, true ; "exception on exception")]
#[test_case(TriggerCategory::Exception, Failure, Success, false, false ; "exception on failure")]
fn test_trigger_applies(
    category: TriggerCategory,
    status: IntegrationStatus,
    previous: IntegrationStatus,
    fixed: bool,
    expected: bool,
) {
    let result = build(status, previous).with_fixed(fixed);
    assert_eq!(trigger_applies(category, &result), expected);
}

#[test]
fn unchanged_and_not_fixed_blocks_change_and_fixed() {
    for status in [Success, Failure, Exception] {
        let result = build(status, status);
        assert!(!trigger_applies(TriggerCategory::Change, &result));
        assert!(!trigger_applies(TriggerCategory::Fixed, &result));
    }
}

// =============================================================================
// Subject Category
// =============================================================================

#[test_case(Exception, Success, SubjectCategory::Exception ; "exception after success")]
#[test_case(Exception, Exception, SubjectCategory::Exception ; "exception after exception")]
#[test_case(Success, Failure, SubjectCategory::Fixed ; "success after failure is fixed")]
#[test_case(Success, Success, SubjectCategory::Success ; "success after success")]
#[test_case(Failure, Success, SubjectCategory::Broken ; "failure after success is broken")]
#[test_case(Failure, Failure, SubjectCategory::StillBroken ; "failure after failure")]
#[test_case(Success, Unknown, SubjectCategory::Fixed ; "first successful run")]
#[test_case(Failure, Unknown, SubjectCategory::Broken ; "first failing run")]
fn test_classify(status: IntegrationStatus, previous: IntegrationStatus, expected: SubjectCategory) {
    assert_eq!(classify(&build(status, previous)).unwrap(), expected);
}

#[test_case(Cancelled ; "cancelled")]
#[test_case(Unknown ; "unknown")]
fn classify_rejects_unclassifiable_status(status: IntegrationStatus) {
    let err = classify(&build(status, Success)).unwrap_err();
    assert!(matches!(err, NotifyError::UnknownBuildStatus(s) if s == status));
    assert!(err.to_string().contains("Unknown build status"));
}
