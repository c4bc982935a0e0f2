//! Domain models for swiftguard
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`Field`] / [`ParsedRecord`] - The understood MT103 fields
//! - [`ErrorDetail`] - One itemized violation
//! - [`FieldSchema`] - Declarative field rules
//! - [`ValidationVerdict`] - Outcome of one submission
//! - [`MessageKind`] - Sample message variants

mod error_detail;
mod message_kind;
mod record;
mod schema;
mod verdict;

pub use error_detail::ErrorDetail;
pub use message_kind::MessageKind;
pub use record::{Field, ParsedRecord};
pub use schema::{FieldRule, FieldSchema, SchemaError};
pub use verdict::{Rejection, ValidationVerdict, VerdictStatus};
