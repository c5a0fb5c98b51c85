//! Built-in address converters
//!
//! - [`LowerCaseConverter`] - lowercases the identity
//! - [`RegexConverter`] - regex find/replace, e.g. appending a mail domain

use regex::Regex;

use crate::core::ports::AddressConverter;
use crate::error::ConfigError;

/// Lowercases the input
#[derive(Debug, Clone, Copy, Default)]
pub struct LowerCaseConverter;

impl AddressConverter for LowerCaseConverter {
    fn name(&self) -> &str {
        "lowercase"
    }

    fn convert(&self, input: &str) -> Option<String> {
        Some(input.to_lowercase())
    }
}

/// Replaces every match of `find` with `replace`
///
/// `replace` may reference capture groups (`$1`, `${name}`).
#[derive(Debug, Clone)]
pub struct RegexConverter {
    find: Regex,
    replace: String,
}

impl RegexConverter {
    /// Compile a regex converter
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidConverterPattern`] if `find` is not a
    /// valid regex.
    pub fn new(find: &str, replace: impl Into<String>) -> Result<Self, ConfigError> {
        let find = Regex::new(find).map_err(|source| ConfigError::InvalidConverterPattern {
            pattern: find.to_string(),
            source,
        })?;
        Ok(Self {
            find,
            replace: replace.into(),
        })
    }
}

impl AddressConverter for RegexConverter {
    fn name(&self) -> &str {
        "regex"
    }

    fn convert(&self, input: &str) -> Option<String> {
        Some(self.find.replace_all(input, self.replace.as_str()).into_owned())
    }
}
