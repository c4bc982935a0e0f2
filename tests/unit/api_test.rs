//! Tests for the HTTP-agnostic API handlers

use std::sync::Arc;

use swiftguard::ValidationService;
use swiftguard::api::{ErrorCode, last_message, submit_message};
use swiftguard::core::models::FieldSchema;
use swiftguard::core::ports::DedupLedger;
use swiftguard::core::services::{BusinessHours, ComplianceRules};

use super::common::{message_with_beneficiary, valid_message};

/// Ledger whose backing store is always unavailable
struct BrokenLedger;

impl DedupLedger for BrokenLedger {
    fn insert_if_absent(&self, _reference: &str) -> anyhow::Result<bool> {
        anyhow::bail!("disk full")
    }

    fn contains(&self, _reference: &str) -> anyhow::Result<bool> {
        anyhow::bail!("disk full")
    }

    fn len(&self) -> usize {
        0
    }
}

// =============================================================================
// POST /swift
// =============================================================================

#[test]
fn test_status_codes_per_outcome() {
    let service = ValidationService::in_memory();

    let accepted = submit_message(&service, valid_message("A1").as_bytes(), None).unwrap();
    assert_eq!(accepted.status_code, 200);
    assert!(accepted.verdict.valid);

    let duplicate = submit_message(&service, valid_message("A1").as_bytes(), None).unwrap();
    assert_eq!(duplicate.status_code, 409);

    let blocked = submit_message(
        &service,
        message_with_beneficiary("A2", "Tehran, Iran").as_bytes(),
        None,
    )
    .unwrap();
    assert_eq!(blocked.status_code, 403);

    let broken = submit_message(&service, b":20:A3", None).unwrap();
    assert_eq!(broken.status_code, 200);
    assert!(!broken.verdict.valid);
}

#[test]
fn test_simulated_time_drives_business_hours() {
    let rules = ComplianceRules {
        business_hours: Some(BusinessHours::default()),
        ..ComplianceRules::default()
    };
    let service = ValidationService::new(
        &FieldSchema::mt103(),
        Arc::new(swiftguard::adapters::InMemoryLedger::new()),
        &rules,
    )
    .unwrap();

    let night = submit_message(
        &service,
        valid_message("T1").as_bytes(),
        Some("2023-10-25T23:30:00Z"),
    )
    .unwrap();
    assert_eq!(night.status_code, 403);
    assert!(night.verdict.errors[0].message.starts_with("Business Hours Violation"));

    let noon = submit_message(
        &service,
        valid_message("T1").as_bytes(),
        Some("2023-10-25T14:00:00+02:00"),
    )
    .unwrap();
    assert_eq!(noon.status_code, 200);
}

#[test]
fn test_bad_simulated_time_is_bad_request() {
    let service = ValidationService::in_memory();
    let err = submit_message(&service, b":20:X", Some("yesterday")).unwrap_err();
    assert_eq!(err.code, ErrorCode::BadRequest);
    assert_eq!(err.status_code(), 400);
    assert!(service.last_verdict().is_none());
}

#[test]
fn test_binary_body_still_parsed() {
    let service = ValidationService::in_memory();
    let mut body = valid_message("B1").into_bytes();
    body.extend_from_slice(&[0xff, 0xfe, 0x00]);

    let submission = submit_message(&service, &body, None).unwrap();
    assert_eq!(submission.verdict.data.transaction_reference(), Some("B1"));
}

#[test]
fn test_ledger_failure_is_internal_error() {
    let service = ValidationService::new(
        &FieldSchema::mt103(),
        Arc::new(BrokenLedger),
        &ComplianceRules::default(),
    )
    .unwrap();

    let err = submit_message(&service, valid_message("L1").as_bytes(), None).unwrap_err();
    assert_eq!(err.status_code(), 500);
}

// =============================================================================
// GET /swift
// =============================================================================

#[test]
fn test_last_message_placeholder_then_verdict() {
    let service = ValidationService::in_memory();

    let empty = serde_json::to_value(last_message(&service)).unwrap();
    assert_eq!(empty, serde_json::json!({"status": "none", "message": "No message processed yet"}));

    submit_message(&service, valid_message("G1").as_bytes(), None).unwrap();
    let latest = serde_json::to_value(last_message(&service)).unwrap();
    assert_eq!(latest["status"], "success");
    assert_eq!(latest["data"]["transactionReference"], "G1");
}
