//! Port traits (interfaces) for external dependencies
//!
//! These traits define the boundaries between core business logic
//! and external systems (reference storage, message generation backends).
//!
//! Implementations live in the `adapters` module.

mod dedup_ledger;
mod message_generator;

pub use dedup_ledger::DedupLedger;
#[cfg(test)]
pub use dedup_ledger::MockDedupLedger;
pub use message_generator::MessageGenerator;
