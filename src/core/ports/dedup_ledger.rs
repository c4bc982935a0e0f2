//! Dedup ledger port
//!
//! Defines the store of accepted transaction references.

/// Store of transaction references that have already been accepted
///
/// The ledger only grows. Implementations must make [`insert_if_absent`]
/// atomic: two concurrent calls with the same reference must not both
/// return `true`.
///
/// [`insert_if_absent`]: DedupLedger::insert_if_absent
#[cfg_attr(test, mockall::automock)]
pub trait DedupLedger: Send + Sync {
    /// Record a reference; returns `true` if it was not seen before
    fn insert_if_absent(&self, reference: &str) -> anyhow::Result<bool>;

    /// Whether a reference has been accepted
    fn contains(&self, reference: &str) -> anyhow::Result<bool>;

    /// Number of accepted references
    fn len(&self) -> usize;

    /// Whether nothing has been accepted yet
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
