//! Command implementations

mod notify;
mod validate;

pub use notify::notify;
pub use validate::validate;
