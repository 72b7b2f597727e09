use std::fmt;

use serde::{Deserialize, Serialize};

/// Outcome marker for a single checked dimension
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReasonStatus {
    Satisfied,
    Warning,
    Unsatisfied,
}

impl ReasonStatus {
    pub fn marker(self) -> &'static str {
        match self {
            ReasonStatus::Satisfied => "✓",
            ReasonStatus::Warning => "⚠",
            ReasonStatus::Unsatisfied => "✗",
        }
    }

    fn from_marker(marker: &str) -> Option<Self> {
        match marker {
            "✓" => Some(ReasonStatus::Satisfied),
            "⚠" => Some(ReasonStatus::Warning),
            "✗" => Some(ReasonStatus::Unsatisfied),
            _ => None,
        }
    }
}

/// Human-readable explanation of one check, rendered as `"<marker> <message>"`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Reason {
    pub status: ReasonStatus,
    pub message: String,
}

impl Reason {
    pub fn satisfied(message: impl Into<String>) -> Self {
        Self {
            status: ReasonStatus::Satisfied,
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            status: ReasonStatus::Warning,
            message: message.into(),
        }
    }

    pub fn unsatisfied(message: impl Into<String>) -> Self {
        Self {
            status: ReasonStatus::Unsatisfied,
            message: message.into(),
        }
    }

    pub fn is_satisfied(&self) -> bool {
        self.status == ReasonStatus::Satisfied
    }
}

impl fmt::Display for Reason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.status.marker(), self.message)
    }
}

impl From<Reason> for String {
    fn from(reason: Reason) -> Self {
        reason.to_string()
    }
}

impl TryFrom<String> for Reason {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        let (marker, message) = value
            .split_once(' ')
            .ok_or_else(|| format!("reason without marker: {value}"))?;
        let status = ReasonStatus::from_marker(marker)
            .ok_or_else(|| format!("unknown reason marker: {marker}"))?;

        Ok(Self {
            status,
            message: message.to_string(),
        })
    }
}
