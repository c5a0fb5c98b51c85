//! Notification message metadata for one build result

use super::outcome::{classify, state_changed};
use super::recipients::{recipients_string, resolve_recipients};
use super::subject::compose_subject;
use crate::core::models::{BuildResult, Recipient, RuleConfig, SubjectCategory};
use crate::error::NotifyError;

/// Binds one build result to one rule configuration
///
/// Every accessor is computed on demand and holds no state of its own.
#[derive(Debug, Clone, Copy)]
pub struct NotificationMessage<'a> {
    result: &'a BuildResult,
    config: &'a RuleConfig,
}

impl<'a> NotificationMessage<'a> {
    /// Create a message view
    #[must_use]
    pub const fn new(result: &'a BuildResult, config: &'a RuleConfig) -> Self {
        Self { result, config }
    }

    /// The build result this message describes
    #[must_use]
    pub const fn result(&self) -> &'a BuildResult {
        self.result
    }

    /// Whether the run's status differs from the previous run's
    #[must_use]
    pub fn state_changed(&self) -> bool {
        state_changed(self.result)
    }

    /// Recipients sorted by address
    #[must_use]
    pub fn recipients(&self) -> Vec<Recipient> {
        resolve_recipients(self.result, self.config)
    }

    /// Recipients as a `", "`-joined address list
    #[must_use]
    pub fn recipients_string(&self) -> String {
        recipients_string(self.result, self.config)
    }

    /// Outcome category used to pick the subject template
    pub fn category(&self) -> Result<SubjectCategory, NotifyError> {
        classify(self.result)
    }

    /// Rendered subject line
    pub fn subject(&self) -> Result<String, NotifyError> {
        compose_subject(self.result, self.config)
    }
}
