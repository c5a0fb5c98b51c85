//! buildmail - Recipient routing and subject composition for build notifications
//!
//! Given the result of one build run and a set of notification rules, this
//! library decides who receives the notification and what its subject line
//! says. It does not send anything.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod adapters;
pub mod core;
pub mod error;
pub mod output;

pub use crate::core::models::{BuildResult, IntegrationStatus, RuleConfig};
pub use crate::core::services::{NotificationMessage, compose_subject, resolve_recipients};
pub use crate::error::{ConfigError, NotifyError};
