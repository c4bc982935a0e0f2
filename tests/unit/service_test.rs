//! End-to-end scenarios through the validation service

use swiftguard::core::models::Rejection;
use swiftguard::{Field, ValidationService, VerdictStatus};

use super::common::{message_with_beneficiary, valid_message, with_envelope};

#[test]
fn test_duplicate_reference_rejected() {
    let service = ValidationService::in_memory();

    let first = service.validate(&valid_message("REF1")).unwrap();
    assert_eq!(first.status, VerdictStatus::Success);
    assert!(first.valid);
    assert!(first.errors.is_empty());

    let second = service.validate(&valid_message("REF1")).unwrap();
    assert_eq!(second.status, VerdictStatus::Failed);
    assert!(!second.valid);
    assert_eq!(second.rejection, Some(Rejection::Duplicate));
    assert!(second.errors.iter().any(|e| e.message.contains("Duplicate Transaction Reference")));
}

#[test]
fn test_missing_fields_do_not_reserve_reference() {
    let service = ValidationService::in_memory();

    let broken = service.validate(":20:REF2\n:32A:240101USD500,\n:50K:X").unwrap();
    assert_eq!(broken.status, VerdictStatus::Failed);
    assert!(broken.errors.iter().any(|e| e.targets(Field::BankOperationCode)));
    assert!(broken.errors.iter().any(|e| e.targets(Field::Charges)));
    assert!(service.ledger().is_empty());

    let fixed = service.validate(&valid_message("REF2")).unwrap();
    assert!(fixed.valid);
}

#[test]
fn test_sanctioned_then_corrected_succeeds() {
    let service = ValidationService::in_memory();

    let blocked = service
        .validate(&message_with_beneficiary("SANC1", "Korea Trading Co\nPyongyang, North Korea"))
        .unwrap();
    assert_eq!(blocked.status, VerdictStatus::Blocked);
    assert!(blocked.errors.iter().any(|e| e.message.contains("AML Alert")));

    let corrected = service
        .validate(&message_with_beneficiary("SANC1", "Seoul Trading Co\nSeoul"))
        .unwrap();
    assert_eq!(corrected.status, VerdictStatus::Success);
}

#[test]
fn test_corrupted_amount_instance_path() {
    let service = ValidationService::in_memory();
    let raw = valid_message("REF3").replace("240101USD1000,", "INVALID_DATE_USD");

    let verdict = service.validate(&raw).unwrap();
    assert_eq!(verdict.status, VerdictStatus::Failed);
    assert_eq!(verdict.errors.len(), 1);
    assert_eq!(verdict.errors[0].instance_path.as_deref(), Some("/valueDateCurrencyAmount"));
}

#[test]
fn test_enveloped_message_accepted() {
    let service = ValidationService::in_memory();
    let verdict = service.validate(&with_envelope(&valid_message("ENV2"))).unwrap();
    assert!(verdict.valid);
    assert_eq!(verdict.data.transaction_reference(), Some("ENV2"));
}

#[test]
fn test_verdict_json_shape() {
    let service = ValidationService::in_memory();
    let verdict = service.validate(":20:J1").unwrap();
    let json = serde_json::to_value(&verdict).unwrap();

    assert_eq!(json["status"], "failed");
    assert_eq!(json["valid"], false);
    assert_eq!(json["data"]["transactionReference"], "J1");
    assert_eq!(json["raw"], ":20:J1");
    assert!(json["traceId"].is_string());
    assert!(json["timestamp"].as_str().unwrap().ends_with('Z'));
    assert_eq!(json["errors"][0]["instancePath"], "/bankOperationCode");
    assert_eq!(json["errors"][0]["params"]["missingProperty"], "bankOperationCode");
    assert!(json.get("rejection").is_none());
}

#[test]
fn test_empty_reference_accepted_only_once() {
    let service = ValidationService::in_memory();
    let raw = ":20:\n:23B:CRED\n:32A:240101USD1000,\n:50K:A\n:59:B\n:71A:OUR";

    let first = service.validate(raw).unwrap();
    assert!(first.valid);
    assert_eq!(first.data.transaction_reference(), Some(""));

    let second = service.validate(raw).unwrap();
    assert!(!second.valid);
    assert_eq!(second.rejection, Some(Rejection::Duplicate));
    assert_eq!(service.ledger().len(), 1);
}
