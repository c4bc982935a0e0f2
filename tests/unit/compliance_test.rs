//! Tests for the compliance gate against real ledgers

use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};
use swiftguard::adapters::InMemoryLedger;
use swiftguard::core::models::{Rejection, VerdictStatus};
use swiftguard::core::ports::DedupLedger;
use swiftguard::core::services::{
    AML_ALERT, BusinessHours, ComplianceGate, ComplianceRules, SanctionedJurisdiction, parse,
};

use super::common::{message_with_beneficiary, valid_message};

fn gate(rules: &ComplianceRules) -> (ComplianceGate, Arc<InMemoryLedger>) {
    let ledger = Arc::new(InMemoryLedger::new());
    let gate = ComplianceGate::new(ledger.clone(), rules).unwrap();
    (gate, ledger)
}

fn at(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap()
}

// =============================================================================
// SANCTIONS
// =============================================================================

#[test]
fn test_north_korea_blocked() {
    let (gate, ledger) = gate(&ComplianceRules::default());
    let record = parse(&message_with_beneficiary("S1", "Trading Co\nPyongyang, NORTH  KOREA"));

    let outcome = gate.screen(&record, true, Utc::now()).unwrap();
    assert_eq!(outcome.status, VerdictStatus::Blocked);
    assert_eq!(outcome.rejection, Some(Rejection::Sanctioned));
    assert_eq!(outcome.extra_errors[0].message, AML_ALERT);
    assert!(ledger.is_empty());
}

#[test]
fn test_iso_code_token_blocked() {
    let (gate, _) = gate(&ComplianceRules::default());
    let record = parse(&message_with_beneficiary("S2", "Teheran Imports\nIR"));
    let outcome = gate.screen(&record, true, Utc::now()).unwrap();
    assert_eq!(outcome.rejection, Some(Rejection::Sanctioned));
}

#[test]
fn test_substrings_do_not_match() {
    let (gate, _) = gate(&ComplianceRules::default());
    let record = parse(&message_with_beneficiary("S3", "Irene Kpalma\nIreland"));
    let outcome = gate.screen(&record, true, Utc::now()).unwrap();
    assert_eq!(outcome.status, VerdictStatus::Success);
}

#[test]
fn test_configured_denylist_replaces_default() {
    let rules = ComplianceRules {
        sanctions: vec![SanctionedJurisdiction::new("Syria", "SY")],
        business_hours: None,
    };
    let (gate, _) = gate(&rules);

    let korea = parse(&message_with_beneficiary("S4", "North Korea"));
    assert_eq!(gate.screen(&korea, true, Utc::now()).unwrap().status, VerdictStatus::Success);

    let syria = parse(&message_with_beneficiary("S5", "Damascus, Syria"));
    assert_eq!(gate.screen(&syria, true, Utc::now()).unwrap().status, VerdictStatus::Blocked);
}

// =============================================================================
// BUSINESS HOURS
// =============================================================================

#[test]
fn test_business_hours_window() {
    let rules = ComplianceRules {
        business_hours: Some(BusinessHours::default()),
        ..ComplianceRules::default()
    };
    let (gate, ledger) = gate(&rules);
    let record = parse(&valid_message("BH1"));

    // Saturday
    let weekend = gate.screen(&record, true, at(2023, 10, 28, 12)).unwrap();
    assert_eq!(weekend.rejection, Some(Rejection::OutsideBusinessHours));
    assert_eq!(weekend.status, VerdictStatus::Failed);

    let evening = gate.screen(&record, true, at(2023, 10, 25, 17)).unwrap();
    assert_eq!(evening.rejection, Some(Rejection::OutsideBusinessHours));
    assert!(ledger.is_empty());

    let morning = gate.screen(&record, true, at(2023, 10, 25, 9)).unwrap();
    assert_eq!(morning.status, VerdictStatus::Success);
    assert!(ledger.contains("BH1").unwrap());
}

#[test]
fn test_business_hours_any_day() {
    let hours = BusinessHours {
        weekdays_only: false,
        ..BusinessHours::default()
    };
    assert!(hours.contains(at(2023, 10, 29, 10)));
    assert!(!hours.contains(at(2023, 10, 29, 8)));
}

// =============================================================================
// DUPLICATES
// =============================================================================

#[test]
fn test_second_acceptance_is_duplicate() {
    let (gate, ledger) = gate(&ComplianceRules::default());
    let record = parse(&valid_message("D1"));

    assert_eq!(gate.screen(&record, true, Utc::now()).unwrap().status, VerdictStatus::Success);
    let replay = gate.screen(&record, true, Utc::now()).unwrap();
    assert_eq!(replay.rejection, Some(Rejection::Duplicate));
    assert_eq!(
        replay.extra_errors[0].message,
        "Duplicate Transaction Reference: D1 already exists."
    );
    assert_eq!(ledger.len(), 1);
}
