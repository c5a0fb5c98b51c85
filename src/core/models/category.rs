//! Notification trigger categories and subject categories
//!
//! A [`TriggerCategory`] decides *who* is notified for a run, a
//! [`SubjectCategory`] decides *which subject template* is used.
//! Both are closed enumerations; any other value is a configuration error.

use serde::Serialize;

use crate::error::ConfigError;

/// Condition under which the members of a group (or a run's contributors)
/// are notified
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TriggerCategory {
    /// Every run
    Always,
    /// Runs whose status differs from the previous run
    Change,
    /// Failed or exception runs
    Failed,
    /// Successful runs
    Success,
    /// Runs flagged as fixing a broken build
    Fixed,
    /// Runs that ended in an exception
    Exception,
}

impl TriggerCategory {
    /// All trigger categories in declaration order
    pub const ALL: [Self; 6] = [
        Self::Always,
        Self::Change,
        Self::Failed,
        Self::Success,
        Self::Fixed,
        Self::Exception,
    ];

    /// Lowercase name used in files and output
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Always => "always",
            Self::Change => "change",
            Self::Failed => "failed",
            Self::Success => "success",
            Self::Fixed => "fixed",
            Self::Exception => "exception",
        }
    }
}

impl std::fmt::Display for TriggerCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for TriggerCategory {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "always" => Ok(Self::Always),
            "change" => Ok(Self::Change),
            "failed" => Ok(Self::Failed),
            "success" => Ok(Self::Success),
            "fixed" => Ok(Self::Fixed),
            "exception" => Ok(Self::Exception),
            _ => Err(ConfigError::UnknownTriggerCategory(s.to_string())),
        }
    }
}

/// Outcome category a subject template is keyed by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SubjectCategory {
    /// A failing run that follows a non-failing one
    Broken,
    /// A run that ended in an exception
    Exception,
    /// A successful run that follows a non-successful one
    Fixed,
    /// A failing run that follows a failing one
    StillBroken,
    /// A successful run that follows a successful one
    Success,
}

impl SubjectCategory {
    /// All subject categories in declaration order
    pub const ALL: [Self; 5] = [
        Self::Broken,
        Self::Exception,
        Self::Fixed,
        Self::StillBroken,
        Self::Success,
    ];

    /// Built-in subject template used when the configuration omits this category
    #[must_use]
    pub const fn default_template(self) -> &'static str {
        match self {
            Self::Broken => "${CCNetProject} Build Failed",
            Self::Exception => "${CCNetProject} Exception in Build !",
            Self::Fixed => "${CCNetProject} Build Fixed: Build ${CCNetLabel}",
            Self::StillBroken => "${CCNetProject} is still broken",
            Self::Success => "${CCNetProject} Build Successful: Build ${CCNetLabel}",
        }
    }

    /// Lowercase name used in files and output
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Broken => "broken",
            Self::Exception => "exception",
            Self::Fixed => "fixed",
            Self::StillBroken => "stillbroken",
            Self::Success => "success",
        }
    }
}

impl std::fmt::Display for SubjectCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for SubjectCategory {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "broken" => Ok(Self::Broken),
            "exception" => Ok(Self::Exception),
            "fixed" => Ok(Self::Fixed),
            "stillbroken" => Ok(Self::StillBroken),
            "success" => Ok(Self::Success),
            _ => Err(ConfigError::UnknownSubjectCategory(s.to_string())),
        }
    }
}

/// Case-insensitive, ignores `_` and `-` so `StillBroken`, `still_broken`
/// and `still-broken` all parse the same
fn normalize(s: &str) -> String {
    s.trim().to_lowercase().replace(['_', '-'], "")
}
