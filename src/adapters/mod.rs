//! Adapter implementations
//!
//! This module contains concrete implementations and I/O:
//!
//! - `converter/` - Built-in address converters
//! - `toml/` - Rules file and build result file loading

pub mod converter;
pub mod toml;
