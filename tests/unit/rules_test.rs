//! Tests for rule configuration building and category parsing

use std::collections::BTreeMap;

use buildmail::core::models::{
    NotificationGroup, NotificationUser, SubjectCategory, SubjectTemplates, TriggerCategory,
};
use buildmail::{ConfigError, RuleConfig};
use test_case::test_case;

// =============================================================================
// Category Parsing
// =============================================================================

#[test_case("always", TriggerCategory::Always ; "always")]
#[test_case("Change", TriggerCategory::Change ; "mixed case")]
#[test_case("FAILED", TriggerCategory::Failed ; "upper case")]
#[test_case("success", TriggerCategory::Success ; "success")]
#[test_case("fixed", TriggerCategory::Fixed ; "fixed")]
#[test_case(" exception ", TriggerCategory::Exception ; "surrounding whitespace")]
fn parse_trigger_category(input: &str, expected: TriggerCategory) {
    assert_eq!(input.parse::<TriggerCategory>().unwrap(), expected);
}

#[test_case("never" ; "unknown word")]
#[test_case("" ; "empty")]
#[test_case("stillbroken" ; "subject category")]
fn parse_trigger_category_rejects(input: &str) {
    let err = input.parse::<TriggerCategory>().unwrap_err();
    assert!(matches!(err, ConfigError::UnknownTriggerCategory(ref s) if s == input));
}

#[test_case("broken", SubjectCategory::Broken ; "broken")]
#[test_case("StillBroken", SubjectCategory::StillBroken ; "pascal case")]
#[test_case("still_broken", SubjectCategory::StillBroken ; "snake case")]
#[test_case("still-broken", SubjectCategory::StillBroken ; "kebab case")]
#[test_case("Exception", SubjectCategory::Exception ; "exception")]
fn parse_subject_category(input: &str, expected: SubjectCategory) {
    assert_eq!(input.parse::<SubjectCategory>().unwrap(), expected);
}

#[test]
fn parse_subject_category_rejects_unknown() {
    let err = "failed".parse::<SubjectCategory>().unwrap_err();
    assert!(matches!(err, ConfigError::UnknownSubjectCategory(_)));
}

#[test]
fn categories_round_trip_through_display() {
    for category in TriggerCategory::ALL {
        assert_eq!(category.to_string().parse::<TriggerCategory>().unwrap(), category);
    }
    for category in SubjectCategory::ALL {
        assert_eq!(category.to_string().parse::<SubjectCategory>().unwrap(), category);
    }
}

// =============================================================================
// Template Defaults
// =============================================================================

#[test]
fn defaults_cover_every_category() {
    let templates = SubjectTemplates::default();
    assert_eq!(templates.iter().count(), SubjectCategory::ALL.len());
    assert_eq!(templates.get(SubjectCategory::Broken), "${CCNetProject} Build Failed");
    assert_eq!(templates.get(SubjectCategory::Exception), "${CCNetProject} Exception in Build !");
    assert_eq!(
        templates.get(SubjectCategory::Fixed),
        "${CCNetProject} Build Fixed: Build ${CCNetLabel}"
    );
    assert_eq!(templates.get(SubjectCategory::StillBroken), "${CCNetProject} is still broken");
    assert_eq!(
        templates.get(SubjectCategory::Success),
        "${CCNetProject} Build Successful: Build ${CCNetLabel}"
    );
}

#[test]
fn partial_templates_are_merged_over_defaults() {
    let configured = BTreeMap::from([(SubjectCategory::Success, "green".to_string())]);
    let templates = SubjectTemplates::from_partial(configured).unwrap();
    assert_eq!(templates.get(SubjectCategory::Success), "green");
    assert_eq!(templates.get(SubjectCategory::Broken), "${CCNetProject} Build Failed");
    for category in SubjectCategory::ALL {
        assert!(!templates.get(category).is_empty());
    }
}

#[test_case("${} failed" ; "empty placeholder")]
#[test_case("${CCNetProject failed" ; "unterminated placeholder")]
#[test_case("${a{b}}" ; "nested braces")]
fn malformed_templates_are_rejected(template: &str) {
    let err = RuleConfig::builder().subject(SubjectCategory::Broken, template).build().unwrap_err();
    assert!(matches!(
        err,
        ConfigError::MalformedTemplate { category: SubjectCategory::Broken, .. }
    ));
}

#[test]
fn literal_dollar_signs_are_allowed() {
    let config = RuleConfig::builder()
        .subject(SubjectCategory::Success, "$5 build of ${CCNetProject}")
        .build()
        .unwrap();
    assert_eq!(config.templates().get(SubjectCategory::Success), "$5 build of ${CCNetProject}");
}

// =============================================================================
// Builder Validation
// =============================================================================

#[test]
fn duplicate_user_is_rejected() {
    let err = RuleConfig::builder()
        .user(NotificationUser::new("alice", None, None))
        .user(NotificationUser::new("alice", None, Some("a@example.com".to_string())))
        .build()
        .unwrap_err();
    assert!(matches!(err, ConfigError::DuplicateUser(ref u) if u == "alice"));
}

#[test]
fn duplicate_group_is_rejected() {
    let err = RuleConfig::builder()
        .group(NotificationGroup::new("devs", TriggerCategory::Failed))
        .group(NotificationGroup::new("devs", TriggerCategory::Always))
        .build()
        .unwrap_err();
    assert!(matches!(err, ConfigError::DuplicateGroup(ref g) if g == "devs"));
}

#[test]
fn duplicate_subject_is_rejected() {
    let err = RuleConfig::builder()
        .subject(SubjectCategory::Fixed, "a")
        .subject(SubjectCategory::Fixed, "b")
        .build()
        .unwrap_err();
    assert!(matches!(err, ConfigError::DuplicateSubject(SubjectCategory::Fixed)));
}

#[test]
fn modifier_categories_keep_configured_order() {
    let config = RuleConfig::builder()
        .modifier_category(TriggerCategory::Fixed)
        .modifier_category(TriggerCategory::Always)
        .build()
        .unwrap();
    assert_eq!(
        config.modifier_categories(),
        &[TriggerCategory::Fixed, TriggerCategory::Always]
    );
}

#[test]
fn default_config_is_empty() {
    let config = RuleConfig::default();
    assert!(config.users().is_empty());
    assert!(config.groups().is_empty());
    assert!(config.converters().is_empty());
    assert!(config.modifier_categories().is_empty());
    assert_eq!(config.subject_prefix(), None);
}
