//! In-memory dedup ledger
//!
//! Lives for the lifetime of the process. This is the default store.

use std::collections::HashSet;
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::core::ports::DedupLedger;

/// Mutex-guarded set of accepted references
#[derive(Debug, Default)]
pub struct InMemoryLedger {
    references: Mutex<HashSet<String>>,
}

impl InMemoryLedger {
    /// Create an empty ledger
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn references(&self) -> MutexGuard<'_, HashSet<String>> {
        self.references.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl DedupLedger for InMemoryLedger {
    fn insert_if_absent(&self, reference: &str) -> anyhow::Result<bool> {
        Ok(self.references().insert(reference.to_string()))
    }

    fn contains(&self, reference: &str) -> anyhow::Result<bool> {
        Ok(self.references().contains(reference))
    }

    fn len(&self) -> usize {
        self.references().len()
    }
}
