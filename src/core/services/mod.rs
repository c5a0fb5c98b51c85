//! Business logic services
//!
//! Pure functions over a [`BuildResult`](crate::core::models::BuildResult)
//! and a [`RuleConfig`](crate::core::models::RuleConfig). No I/O.
//!
//! - [`outcome`] - State-change predicate, trigger guards, subject category
//! - [`recipients`] - Recipient resolution
//! - [`subject`] - Subject composition
//! - [`message`] - Both facets bound to one build result

pub mod message;
pub mod outcome;
pub mod recipients;
pub mod subject;

pub use message::NotificationMessage;
pub use outcome::{classify, state_changed, trigger_applies};
pub use recipients::{join_addresses, recipients_string, resolve_identity, resolve_recipients};
pub use subject::{compose_subject, render_template};
