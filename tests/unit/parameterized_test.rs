//! Parameterized tests using test-case
//!
//! Table-driven checks of tag mapping and the amount pattern.

use swiftguard::core::services::{FieldValidator, parse};
use swiftguard::Field;
use test_case::test_case;

use super::common::valid_message;

// =============================================================================
// TAG MAPPING
// =============================================================================

#[test_case(":20:", Field::TransactionReference ; "tag 20")]
#[test_case(":23B:", Field::BankOperationCode ; "tag 23B")]
#[test_case(":32A:", Field::ValueDateCurrencyAmount ; "tag 32A")]
#[test_case(":50K:", Field::OrderingCustomer ; "tag 50K")]
#[test_case(":59:", Field::BeneficiaryCustomer ; "tag 59")]
#[test_case(":71A:", Field::Charges ; "tag 71A")]
#[test_case(":70:", Field::RemittanceInfo ; "tag 70")]
fn test_tag_maps_to_field(tag: &str, field: Field) {
    assert_eq!(Field::from_tag(tag), Some(field));
    assert_eq!(field.tag(), tag);

    let record = parse(&format!("{tag}value"));
    assert_eq!(record.get(field), Some("value"));
}

#[test_case(":50A:" ; "ordering customer option A")]
#[test_case(":50F:" ; "ordering customer option F")]
#[test_case(":33B:" ; "instructed amount")]
#[test_case(":23b:" ; "lower case letter")]
fn test_unmapped_tags(tag: &str) {
    assert_eq!(Field::from_tag(tag), None);
    assert!(parse(&format!("{tag}value")).is_empty());
}

// =============================================================================
// AMOUNT PATTERN
// =============================================================================

#[test_case("240101USD1000," => true ; "comma decimal")]
#[test_case("240101EUR1000.50" => true ; "dot decimal")]
#[test_case("240101JPY5" => true ; "integer amount")]
#[test_case("24011USD1000," => false ; "short date")]
#[test_case("240101usd1000," => false ; "lower case currency")]
#[test_case("240101USD" => false ; "no amount")]
#[test_case("240101USD10 00" => false ; "embedded space")]
fn test_amount_pattern(value: &str) -> bool {
    let mut record = parse(&valid_message("P1"));
    record.set(Field::ValueDateCurrencyAmount, value);
    FieldValidator::mt103().validate(&record).valid
}
