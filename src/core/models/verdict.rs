//! Validation verdicts
//!
//! A [`ValidationVerdict`] is produced fresh for every submitted message and
//! carries the trace metadata the dashboard shows.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{ErrorDetail, ParsedRecord};

/// Final outcome of a submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerdictStatus {
    /// Structurally valid and passed every compliance rule
    Success,
    /// Structural violations, duplicate reference, or policy rejection
    #[default]
    Failed,
    /// Sanctions hit; a hard stop
    Blocked,
}

impl std::fmt::Display for VerdictStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Success => write!(f, "success"),
            Self::Failed => write!(f, "failed"),
            Self::Blocked => write!(f, "blocked"),
        }
    }
}

/// Which rule rejected a message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rejection {
    /// Required field missing or pattern mismatch
    Structural,
    /// Transaction reference already accepted
    Duplicate,
    /// Sanctioned jurisdiction in a customer field
    Sanctioned,
    /// Submitted outside configured business hours
    OutsideBusinessHours,
}

/// Result of validating one raw message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationVerdict {
    /// Overall status
    pub status: VerdictStatus,
    /// `true` only when the message was accepted
    pub valid: bool,
    /// Structural violations first, business-rule violations after
    pub errors: Vec<ErrorDetail>,
    /// Parsed fields
    pub data: ParsedRecord,
    /// The message exactly as submitted
    pub raw: String,
    /// Fresh identifier for this validation
    pub trace_id: Uuid,
    /// RFC 3339 time the verdict was produced
    pub timestamp: String,
    /// Rule that rejected the message, if any
    #[serde(skip)]
    pub rejection: Option<Rejection>,
}

impl ValidationVerdict {
    /// Whether the message was accepted
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status == VerdictStatus::Success
    }
}
