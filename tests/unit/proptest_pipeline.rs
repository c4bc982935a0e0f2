//! Property-based tests for the parse and validate pipeline
//!
//! Uses proptest to check totality and envelope tolerance across generated inputs.

use proptest::prelude::*;
use swiftguard::core::services::{FieldValidator, parse};
use swiftguard::{Field, ValidationService};

use super::common::with_envelope;

/// Single-line values that cannot be mistaken for tags or envelope noise
fn field_value() -> impl Strategy<Value = String> {
    "[A-Za-z0-9][A-Za-z0-9 ,./]{0,20}".prop_map(|s| s.trim().to_string())
}

fn message() -> impl Strategy<Value = (String, String, String)> {
    (field_value(), field_value(), field_value()).prop_map(|(reference, ordering, beneficiary)| {
        let raw = format!(
            ":20:{reference}\n:23B:CRED\n:32A:240101USD1,\n:50K:{ordering}\n:59:{beneficiary}\n:71A:SHA"
        );
        (raw, ordering, beneficiary)
    })
}

proptest! {
    #[test]
    fn parse_never_panics(raw in "\\PC*") {
        let _ = parse(&raw);
    }

    #[test]
    fn service_never_panics(raw in "(:[0-9A-Z]{1,3}:)?\\PC{0,40}(\n\\PC{0,40}){0,5}") {
        let service = ValidationService::in_memory();
        let verdict = service.validate(&raw).unwrap();
        prop_assert_eq!(verdict.valid, verdict.is_success());
        prop_assert_eq!(verdict.raw, raw);
    }

    #[test]
    fn parsed_values_are_trimmed((raw, _, _) in message()) {
        for (_, value) in parse(&raw).iter() {
            prop_assert_eq!(value, value.trim());
        }
    }

    #[test]
    fn envelope_does_not_change_fields((raw, ordering, beneficiary) in message()) {
        let record = parse(&with_envelope(&raw));
        prop_assert_eq!(&record, &parse(&raw));
        prop_assert_eq!(record.get(Field::OrderingCustomer), Some(ordering.as_str()));
        prop_assert_eq!(record.get(Field::BeneficiaryCustomer), Some(beneficiary.as_str()));
    }

    #[test]
    fn validation_is_deterministic(raw in "\\PC{0,80}") {
        let validator = FieldValidator::mt103();
        let record = parse(&raw);
        prop_assert_eq!(validator.validate(&record), validator.validate(&record));
    }
}
