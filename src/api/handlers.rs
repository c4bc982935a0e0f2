//! Pure API handlers
//!
//! These handlers contain the request logic and are HTTP-agnostic.
//! They take raw input and return `Result<T, ApiError>`.

use std::panic::{self, AssertUnwindSafe};

use chrono::{DateTime, Utc};

use crate::service::ValidationService;

use super::error::ApiError;
use super::types::{LastMessage, NoMessage, Submission};

// =============================================================================
// SWIFT
// =============================================================================

/// Validate a submitted message body
///
/// The body is decoded lossily, so binary input still reaches the parser.
/// `simulated_time` overrides the submission instant (RFC 3339).
pub fn submit_message(
    service: &ValidationService,
    body: &[u8],
    simulated_time: Option<&str>,
) -> Result<Submission, ApiError> {
    let submitted_at = match simulated_time.map(str::trim).filter(|s| !s.is_empty()) {
        Some(value) => DateTime::parse_from_rfc3339(value)
            .map(|t| t.with_timezone(&Utc))
            .map_err(|e| ApiError::bad_request(format!("Invalid simulated time '{value}': {e}")))?,
        None => Utc::now(),
    };

    let raw = String::from_utf8_lossy(body);

    // A panic here is a parser bug; it fails this request only.
    let result = panic::catch_unwind(AssertUnwindSafe(|| service.validate_at(&raw, submitted_at)))
        .map_err(|_| {
            log::error!("panic while validating {} byte message", body.len());
            ApiError::bad_request("Malformed SWIFT message")
        })?;

    let verdict = result.map_err(|e| {
        log::error!("validation failed: {e:#}");
        ApiError::internal("Internal error while validating message")
    })?;

    Ok(Submission::from_verdict(verdict))
}

/// The most recent verdict, or a placeholder
#[must_use]
pub fn last_message(service: &ValidationService) -> LastMessage {
    service.last_verdict().map_or_else(
        || LastMessage::None(NoMessage::default()),
        |v| LastMessage::Verdict(Box::new(v)),
    )
}
