//! Business logic services
//!
//! Pure pipeline stages. Only the compliance gate holds state, and it reaches
//! that state through the [`DedupLedger`](crate::core::ports::DedupLedger) port.
//!
//! - [`tag_parser`] - Raw text to [`ParsedRecord`](crate::core::models::ParsedRecord)
//! - [`field_validator`] - Schema-driven structural validation
//! - [`compliance`] - Sanctions, business hours and duplicate screening

pub mod compliance;
pub mod field_validator;
pub mod tag_parser;

pub use compliance::{
    AML_ALERT, BusinessHours, ComplianceGate, ComplianceRules, SanctionedJurisdiction,
    ScreenOutcome,
};
pub use field_validator::{FieldValidator, StructuralReport};
pub use tag_parser::parse;
