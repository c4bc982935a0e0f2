//! Dedup ledger implementations
//!
//! - [`InMemoryLedger`] - Process-lifetime set (default)
//! - [`FileLedger`] - JSON-lines file reloaded on start

mod file;
mod memory;

pub use file::FileLedger;
pub use memory::InMemoryLedger;
