//! API response types
//!
//! All types are framework-agnostic and can be used by any client.

use serde::Serialize;

use crate::core::models::{Rejection, ValidationVerdict};

/// Header carrying an RFC 3339 submission time override
pub const SIMULATED_TIME_HEADER: &str = "X-Simulated-Time";

/// Outcome of `POST /swift`
#[derive(Debug, Clone)]
pub struct Submission {
    /// HTTP status to respond with
    pub status_code: u16,
    /// Response body
    pub verdict: ValidationVerdict,
}

impl Submission {
    /// Pick the HTTP status for a verdict
    ///
    /// Duplicates answer 409, sanctions and business-hours rejections 403,
    /// everything else (accepted or structurally invalid) 200.
    #[must_use]
    pub fn from_verdict(verdict: ValidationVerdict) -> Self {
        let status_code = match verdict.rejection {
            Some(Rejection::Duplicate) => 409,
            Some(Rejection::Sanctioned | Rejection::OutsideBusinessHours) => 403,
            Some(Rejection::Structural) | None => 200,
        };
        Self {
            status_code,
            verdict,
        }
    }
}

/// Body of `GET /swift`
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum LastMessage {
    /// The most recent verdict
    Verdict(Box<ValidationVerdict>),
    /// Nothing processed yet
    None(NoMessage),
}

/// Placeholder returned before any message was processed
#[derive(Debug, Clone, Copy, Serialize)]
pub struct NoMessage {
    /// Always `"none"`
    pub status: &'static str,
    /// Explanation for dashboard display
    pub message: &'static str,
}

impl Default for NoMessage {
    fn default() -> Self {
        Self {
            status: "none",
            message: "No message processed yet",
        }
    }
}
