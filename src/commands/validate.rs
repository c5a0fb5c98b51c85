//! Validate a rules file

use std::path::Path;

use anyhow::Context;
use buildmail::adapters::toml::load_rules;
use buildmail::output::{OutputMode, SubjectInfo, ValidateResult};

/// Load and validate a rules file, then print the effective configuration
pub fn validate(rules: &Path, mode: OutputMode) -> anyhow::Result<()> {
    let config = load_rules(rules)
        .with_context(|| format!("failed to load rules from {}", rules.display()))?;

    for user in config.users().values() {
        let Some(group) = user.group.as_deref() else {
            continue;
        };
        if config.group(group).is_none() {
            log::warn!("user {} references unknown group {group}", user.username);
        }
    }

    let result = ValidateResult {
        path: rules.display().to_string(),
        users: config.users().len(),
        groups: config.groups().len(),
        converters: config.converters().iter().map(|c| c.name().to_string()).collect(),
        modifier_categories: config.modifier_categories().to_vec(),
        subjects: config
            .templates()
            .iter()
            .map(|(category, template)| SubjectInfo {
                category,
                template: template.to_string(),
            })
            .collect(),
        subject_prefix: config.subject_prefix().map(String::from),
    };
    result.render(mode);
    Ok(())
}
