//! Core domain logic for swiftguard
//!
//! This module contains the message pipeline with no transport dependencies.
//! External state is abstracted through port traits.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (ParsedRecord, FieldSchema, ValidationVerdict)
//! - `services/` - Parser, validator and compliance gate
//! - `ports/` - Trait definitions for the dedup ledger and message generators

pub mod models;
pub mod ports;
pub mod services;
