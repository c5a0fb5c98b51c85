//! Subject composer
//!
//! Picks the template for the run's outcome category and substitutes
//! `${name}` placeholders with build properties.

use std::collections::BTreeMap;

use regex::Captures;

use super::outcome::classify;
use crate::core::models::{BuildResult, PLACEHOLDER, PropertyValue, RuleConfig};
use crate::error::NotifyError;

/// Compose the subject line for `result`
///
/// # Errors
///
/// Returns [`NotifyError::UnknownBuildStatus`] if the run's status is not
/// success, failure or exception.
pub fn compose_subject(result: &BuildResult, config: &RuleConfig) -> Result<String, NotifyError> {
    let category = classify(result)?;
    let subject = render_template(config.templates().get(category), &result.properties);

    Ok(match config.subject_prefix() {
        Some(prefix) => format!("{prefix} {subject}"),
        None => subject,
    })
}

/// Substitute every `${name}` in `template` whose name is a property
///
/// Single pass: substituted text is never rescanned. Placeholders without a
/// matching property are left as they are.
#[must_use]
pub fn render_template(template: &str, properties: &BTreeMap<String, PropertyValue>) -> String {
    PLACEHOLDER
        .replace_all(template, |caps: &Captures<'_>| {
            properties
                .get(&caps[1])
                .map_or_else(|| caps[0].to_string(), PropertyValue::to_display_string)
        })
        .into_owned()
}
