//! Rule configuration
//!
//! A [`RuleConfig`] holds everything the notifier needs to know about who
//! gets notified and how subjects look. It is validated once when built and
//! treated as read-only afterwards.

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use std::fmt;

use super::{NotificationGroup, NotificationUser, SubjectCategory, SubjectTemplates, TriggerCategory};
use crate::core::ports::AddressConverter;
use crate::error::ConfigError;

/// Validated notification rules
#[derive(Default)]
pub struct RuleConfig {
    users: BTreeMap<String, NotificationUser>,
    groups: BTreeMap<String, NotificationGroup>,
    converters: Vec<Box<dyn AddressConverter>>,
    templates: SubjectTemplates,
    subject_prefix: Option<String>,
    modifier_categories: Vec<TriggerCategory>,
}

impl RuleConfig {
    /// Start building a configuration
    #[must_use]
    pub fn builder() -> RuleConfigBuilder {
        RuleConfigBuilder::default()
    }

    /// Users keyed by username
    #[must_use]
    pub const fn users(&self) -> &BTreeMap<String, NotificationUser> {
        &self.users
    }

    /// Look up a user by username
    #[must_use]
    pub fn user(&self, username: &str) -> Option<&NotificationUser> {
        self.users.get(username)
    }

    /// Groups keyed by name
    #[must_use]
    pub const fn groups(&self) -> &BTreeMap<String, NotificationGroup> {
        &self.groups
    }

    /// Look up a group by name
    #[must_use]
    pub fn group(&self, name: &str) -> Option<&NotificationGroup> {
        self.groups.get(name)
    }

    /// Address converters in application order
    #[must_use]
    pub fn converters(&self) -> &[Box<dyn AddressConverter>] {
        &self.converters
    }

    /// Complete subject template set
    #[must_use]
    pub const fn templates(&self) -> &SubjectTemplates {
        &self.templates
    }

    /// Prefix prepended to every subject, if any
    ///
    /// An empty prefix counts as no prefix.
    #[must_use]
    pub fn subject_prefix(&self) -> Option<&str> {
        self.subject_prefix.as_deref().filter(|p| !p.is_empty())
    }

    /// Categories under which contributors are notified, in configured order
    #[must_use]
    pub fn modifier_categories(&self) -> &[TriggerCategory] {
        &self.modifier_categories
    }
}

impl fmt::Debug for RuleConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let converters: Vec<&str> = self.converters.iter().map(|c| c.name()).collect();
        f.debug_struct("RuleConfig")
            .field("users", &self.users)
            .field("groups", &self.groups)
            .field("converters", &converters)
            .field("templates", &self.templates)
            .field("subject_prefix", &self.subject_prefix)
            .field("modifier_categories", &self.modifier_categories)
            .finish()
    }
}

/// Builder for [`RuleConfig`]
///
/// Duplicate keys and malformed templates are reported by [`build`](Self::build).
#[derive(Default)]
pub struct RuleConfigBuilder {
    users: Vec<NotificationUser>,
    groups: Vec<NotificationGroup>,
    converters: Vec<Box<dyn AddressConverter>>,
    subjects: Vec<(SubjectCategory, String)>,
    subject_prefix: Option<String>,
    modifier_categories: Vec<TriggerCategory>,
}

impl RuleConfigBuilder {
    /// Add a user to the directory
    #[must_use]
    pub fn user(mut self, user: NotificationUser) -> Self {
        self.users.push(user);
        self
    }

    /// Add a group to the directory
    #[must_use]
    pub fn group(mut self, group: NotificationGroup) -> Self {
        self.groups.push(group);
        self
    }

    /// Append a converter to the chain
    #[must_use]
    pub fn converter(mut self, converter: Box<dyn AddressConverter>) -> Self {
        self.converters.push(converter);
        self
    }

    /// Configure the subject template for one category
    #[must_use]
    pub fn subject(mut self, category: SubjectCategory, template: impl Into<String>) -> Self {
        self.subjects.push((category, template.into()));
        self
    }

    /// Set the subject prefix
    #[must_use]
    pub fn subject_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.subject_prefix = Some(prefix.into());
        self
    }

    /// Append a modifier notification category
    #[must_use]
    pub fn modifier_category(mut self, category: TriggerCategory) -> Self {
        self.modifier_categories.push(category);
        self
    }

    /// Validate and build the configuration
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] for duplicate users, groups or subject
    /// categories, and for malformed subject templates.
    pub fn build(self) -> Result<RuleConfig, ConfigError> {
        let mut users = BTreeMap::new();
        for user in self.users {
            match users.entry(user.username.clone()) {
                Entry::Occupied(_) => return Err(ConfigError::DuplicateUser(user.username)),
                Entry::Vacant(slot) => {
                    slot.insert(user);
                },
            }
        }

        let mut groups = BTreeMap::new();
        for group in self.groups {
            match groups.entry(group.name.clone()) {
                Entry::Occupied(_) => return Err(ConfigError::DuplicateGroup(group.name)),
                Entry::Vacant(slot) => {
                    slot.insert(group);
                },
            }
        }

        let mut subjects = BTreeMap::new();
        for (category, template) in self.subjects {
            if subjects.insert(category, template).is_some() {
                return Err(ConfigError::DuplicateSubject(category));
            }
        }

        Ok(RuleConfig {
            users,
            groups,
            converters: self.converters,
            templates: SubjectTemplates::from_partial(subjects)?,
            subject_prefix: self.subject_prefix,
            modifier_categories: self.modifier_categories,
        })
    }
}

impl fmt::Debug for RuleConfigBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuleConfigBuilder")
            .field("users", &self.users.len())
            .field("groups", &self.groups.len())
            .field("converters", &self.converters.len())
            .field("subjects", &self.subjects)
            .finish_non_exhaustive()
    }
}
