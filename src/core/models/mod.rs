//! Domain models for buildmail
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`BuildResult`] - Read-only view of one integration run
//! - [`IntegrationStatus`] - Outcome of a run
//! - [`TriggerCategory`] / [`SubjectCategory`] - Routing and subject keys
//! - [`NotificationUser`] / [`NotificationGroup`] - The user directory
//! - [`RuleConfig`] - Validated notification rules

mod build_result;
mod category;
mod rules;
mod status;
mod template;
mod user;

pub use build_result::{BuildResult, Contributor, DATETIME_FORMAT, PropertyValue};
pub use category::{SubjectCategory, TriggerCategory};
pub use rules::{RuleConfig, RuleConfigBuilder};
pub use status::IntegrationStatus;
pub(crate) use template::PLACEHOLDER;
pub use template::SubjectTemplates;
pub use user::{NotificationGroup, NotificationUser, Recipient};
