//! Adapter implementations for port traits
//!
//! This module contains concrete implementations that handle I/O:
//!
//! - `ledger/` - Dedup ledger stores (memory, JSON-lines file)
//! - `generator/` - Sample message generators (templates, chat API)

pub mod generator;
pub mod ledger;

pub use generator::TemplateGenerator;
pub use ledger::{FileLedger, InMemoryLedger};
