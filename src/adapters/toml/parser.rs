//! TOML parser for notification rules files
//!
//! Handles reading and deserializing the rules file, then converting the raw
//! entries into a validated [`RuleConfig`].

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::adapters::converter::{LowerCaseConverter, RegexConverter};
use crate::core::models::{NotificationGroup, NotificationUser, RuleConfig, SubjectCategory, TriggerCategory};
use crate::error::ConfigError;

/// A rules file structure
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RulesFile {
    /// Prefix prepended to every subject
    #[serde(default)]
    pub subject_prefix: Option<String>,

    /// Categories under which contributors are notified, in order
    #[serde(default)]
    pub modifier_notification_types: Vec<String>,

    /// User directory
    #[serde(default)]
    pub users: Vec<UserEntry>,

    /// Group directory
    #[serde(default)]
    pub groups: Vec<GroupEntry>,

    /// Address converter chain, in application order
    #[serde(default)]
    pub converters: Vec<ConverterEntry>,

    /// Subject templates overriding the built-in defaults
    #[serde(default)]
    pub subjects: Vec<SubjectEntry>,
}

/// A user entry in the rules file
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UserEntry {
    /// Source control identity
    pub name: String,

    /// Group name
    #[serde(default)]
    pub group: Option<String>,

    /// Deliverable address
    #[serde(default)]
    pub address: Option<String>,
}

/// A group entry in the rules file
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GroupEntry {
    /// Group name
    pub name: String,

    /// Trigger category: always, change, failed, success, fixed, exception
    pub notification: String,
}

/// A converter entry in the rules file
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ConverterEntry {
    /// Regex find/replace
    Regex {
        /// Pattern to search for
        find: String,
        /// Replacement text
        replace: String,
    },
    /// Lowercase the identity
    Lowercase,
}

/// A subject template entry in the rules file
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SubjectEntry {
    /// Outcome category: broken, exception, fixed, stillbroken, success
    pub build_result: String,

    /// Template text with `${name}` placeholders
    pub value: String,
}

impl RulesFile {
    /// Validate the raw entries and build a [`RuleConfig`]
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] for unknown categories, invalid converter
    /// patterns, duplicates and malformed templates.
    pub fn into_config(self) -> Result<RuleConfig, ConfigError> {
        let mut builder = RuleConfig::builder();

        for user in self.users {
            builder = builder.user(NotificationUser::new(user.name, user.group, user.address));
        }

        for group in self.groups {
            let trigger: TriggerCategory = group.notification.parse()?;
            builder = builder.group(NotificationGroup::new(group.name, trigger));
        }

        for converter in self.converters {
            builder = match converter {
                ConverterEntry::Regex { find, replace } => {
                    builder.converter(Box::new(RegexConverter::new(&find, replace)?))
                },
                ConverterEntry::Lowercase => builder.converter(Box::new(LowerCaseConverter)),
            };
        }

        for subject in self.subjects {
            let category: SubjectCategory = subject.build_result.parse()?;
            builder = builder.subject(category, subject.value);
        }

        for name in &self.modifier_notification_types {
            builder = builder.modifier_category(name.parse()?);
        }

        if let Some(prefix) = self.subject_prefix {
            builder = builder.subject_prefix(prefix);
        }

        builder.build()
    }
}

/// Parse a rules file from TOML text
///
/// # Errors
///
/// Returns an error if the text is not valid TOML for a rules file, or if
/// the rules fail validation.
pub fn parse_rules(content: &str) -> anyhow::Result<RuleConfig> {
    let file: RulesFile = toml::from_str(content)?;
    Ok(file.into_config()?)
}

/// Load and validate a rules file
///
/// # Errors
///
/// Returns an error if the file cannot be read, parsed or validated.
pub fn load_rules(path: &Path) -> anyhow::Result<RuleConfig> {
    let content = fs::read_to_string(path)?;
    let config = parse_rules(&content)?;
    log::debug!(
        "loaded rules from {}: {} users, {} groups, {} converters",
        path.display(),
        config.users().len(),
        config.groups().len(),
        config.converters().len()
    );
    Ok(config)
}
