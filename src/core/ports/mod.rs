//! Port traits (interfaces) for pluggable behaviour
//!
//! The core depends only on these traits. Concrete implementations live in
//! the `adapters` module, and tests can supply closures directly.

mod converter;

pub use converter::{AddressConverter, convert_chain};
