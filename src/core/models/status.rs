//! Integration status of a build run

use serde::{Deserialize, Serialize};

/// Outcome of one build/integration run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IntegrationStatus {
    /// The build completed and passed
    Success,
    /// The build completed and failed
    Failure,
    /// The build could not complete because of an internal error
    Exception,
    /// The build was cancelled before completion
    Cancelled,
    /// No status recorded (the previous status of a first-ever run)
    #[default]
    Unknown,
}

impl IntegrationStatus {
    /// Whether this status counts as a failed run (failure or exception)
    #[must_use]
    pub const fn is_failed(self) -> bool {
        matches!(self, Self::Failure | Self::Exception)
    }

    /// Lowercase name used in files and output
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Failure => "failure",
            Self::Exception => "exception",
            Self::Cancelled => "cancelled",
            Self::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for IntegrationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for IntegrationStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "success" => Ok(Self::Success),
            "failure" => Ok(Self::Failure),
            "exception" => Ok(Self::Exception),
            "cancelled" => Ok(Self::Cancelled),
            "unknown" => Ok(Self::Unknown),
            _ => Err(format!(
                "Invalid build status: {s}. Use: success, failure, exception, cancelled, unknown"
            )),
        }
    }
}
