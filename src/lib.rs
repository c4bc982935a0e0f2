//! swiftguard - SWIFT MT103 parsing, validation and compliance screening
//!
//! This library turns raw MT103 payment instructions into structured records,
//! checks them against a declarative field schema, and screens structurally
//! valid messages for duplicate references and sanctioned jurisdictions.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod adapters;
pub mod api;
pub mod config;
pub mod core;
pub mod output;
pub mod service;

pub use crate::core::models::{ErrorDetail, Field, ParsedRecord, ValidationVerdict, VerdictStatus};
pub use service::ValidationService;
