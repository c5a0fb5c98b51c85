//! Error types for recipient resolution and subject composition
//!
//! Two kinds of defects are surfaced: a bad rule configuration, caught when
//! the configuration is built, and a build result whose status cannot be
//! classified, caught when a subject is composed.

use thiserror::Error;

use crate::core::models::{IntegrationStatus, SubjectCategory};

/// Errors raised while building a rule configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A trigger category string is not one of the known categories
    #[error("unknown notification type: {0} (use: always, change, failed, success, fixed, exception)")]
    UnknownTriggerCategory(String),

    /// A subject category string is not one of the known categories
    #[error("unknown build result: {0} (use: broken, exception, fixed, stillbroken, success)")]
    UnknownSubjectCategory(String),

    /// The same subject category was configured twice
    #[error("subject for build result {0} is configured more than once")]
    DuplicateSubject(SubjectCategory),

    /// The same username appears twice in the user directory
    #[error("user {0} is configured more than once")]
    DuplicateUser(String),

    /// The same group name appears twice in the group directory
    #[error("group {0} is configured more than once")]
    DuplicateGroup(String),

    /// A regex converter pattern failed to compile
    #[error("invalid converter pattern {pattern:?}: {source}")]
    InvalidConverterPattern {
        /// The offending pattern
        pattern: String,
        /// Underlying compile error
        #[source]
        source: regex::Error,
    },

    /// A subject template contains a malformed placeholder
    #[error("malformed subject template for {category}: {reason}")]
    MalformedTemplate {
        /// Category the template was configured for
        category: SubjectCategory,
        /// What is wrong with it
        reason: String,
    },
}

/// Errors returned by the notification core
#[derive(Debug, Error)]
pub enum NotifyError {
    /// The rule configuration is defective
    #[error("bad configuration: {0}")]
    Config(#[from] ConfigError),

    /// The build result carries a status that cannot be classified
    #[error("Unknown build status: {0}")]
    UnknownBuildStatus(IntegrationStatus),
}
