//! Core domain logic for buildmail
//!
//! This module contains pure business logic with no I/O dependencies.
//! Pluggable behaviour is abstracted through port traits.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (`BuildResult`, `RuleConfig`, categories)
//! - `services/` - Recipient resolution and subject composition
//! - `ports/` - Trait definitions for pluggable behaviour (address converters)

pub mod models;
pub mod ports;
pub mod services;
