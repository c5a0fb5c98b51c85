//! Build result snapshot
//!
//! A [`BuildResult`] is the read-only view of one integration run that the
//! recipient resolver and the subject composer work from.

use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::IntegrationStatus;

/// Format used when a date-time property is rendered into a subject
pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A user whose changes are part of the current run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contributor {
    /// Source control identity of the user
    pub username: String,
}

impl Contributor {
    /// Create a contributor from a source control identity
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
        }
    }
}

/// Value of a named build property
///
/// Build files map onto these variants in the file adapters. Only a typed
/// date-time becomes [`PropertyValue::DateTime`]; strings always stay text.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PropertyValue {
    /// Explicitly unset value, rendered as an empty string
    Null,
    /// Boolean flag
    Bool(bool),
    /// Whole number
    Integer(i64),
    /// Floating point number
    Float(f64),
    /// Point in time
    DateTime(DateTime<Utc>),
    /// Free text
    Text(String),
    /// Ordered list of values
    List(Vec<PropertyValue>),
}

impl PropertyValue {
    /// Render the value the way it appears in a subject line
    ///
    /// Date-times use [`DATETIME_FORMAT`], lists are comma-joined and
    /// [`PropertyValue::Null`] renders as nothing.
    #[must_use]
    pub fn to_display_string(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => Ok(()),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Integer(i) => write!(f, "{i}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::DateTime(dt) => write!(f, "{}", dt.format(DATETIME_FORMAT)),
            Self::Text(s) => f.write_str(s),
            Self::List(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{item}")?;
                }
                Ok(())
            },
        }
    }
}

impl From<&str> for PropertyValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for PropertyValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<i64> for PropertyValue {
    fn from(i: i64) -> Self {
        Self::Integer(i)
    }
}

impl From<i32> for PropertyValue {
    fn from(i: i32) -> Self {
        Self::Integer(i64::from(i))
    }
}

impl From<u32> for PropertyValue {
    fn from(i: u32) -> Self {
        Self::Integer(i64::from(i))
    }
}

impl From<f64> for PropertyValue {
    fn from(x: f64) -> Self {
        Self::Float(x)
    }
}

impl From<bool> for PropertyValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<DateTime<Utc>> for PropertyValue {
    fn from(dt: DateTime<Utc>) -> Self {
        Self::DateTime(dt)
    }
}

impl<T: Into<Self>> From<Vec<T>> for PropertyValue {
    fn from(items: Vec<T>) -> Self {
        Self::List(items.into_iter().map(Into::into).collect())
    }
}

/// Outcome of one integration run, as seen by the notifier
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct BuildResult {
    /// Status of this run
    pub status: IntegrationStatus,

    /// Status of the previous run (`Unknown` for a first-ever run)
    pub previous_status: IntegrationStatus,

    /// True iff this run succeeded and ends a failing streak
    pub fixed: bool,

    /// Users whose changes are in this run, in modification order
    pub contributors: Vec<Contributor>,

    /// Users implicated across a still-failing streak
    pub failure_contributors: Vec<String>,

    /// Named properties available to subject templates
    pub properties: BTreeMap<String, PropertyValue>,
}

impl BuildResult {
    /// Create a result with the given current and previous status
    #[must_use]
    pub fn new(status: IntegrationStatus, previous_status: IntegrationStatus) -> Self {
        Self {
            status,
            previous_status,
            ..Self::default()
        }
    }

    /// Set the `fixed` flag
    #[must_use]
    pub fn with_fixed(mut self, fixed: bool) -> Self {
        self.fixed = fixed;
        self
    }

    /// Append a contributor
    #[must_use]
    pub fn with_contributor(mut self, username: impl Into<String>) -> Self {
        self.contributors.push(Contributor::new(username));
        self
    }

    /// Append a failure contributor
    #[must_use]
    pub fn with_failure_contributor(mut self, username: impl Into<String>) -> Self {
        self.failure_contributors.push(username.into());
        self
    }

    /// Set a named property
    #[must_use]
    pub fn with_property(mut self, name: impl Into<String>, value: impl Into<PropertyValue>) -> Self {
        self.properties.insert(name.into(), value.into());
        self
    }
}
