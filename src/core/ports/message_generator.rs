//! Message generator port
//!
//! Produces sample MT103 messages for exercising the validation pipeline.
//! The pipeline itself never depends on this port.

use super::super::models::MessageKind;

/// Source of sample MT103 messages
pub trait MessageGenerator: Send + Sync {
    /// Name of the backend (e.g. "template", "chat")
    fn name(&self) -> &str;

    /// Produce one raw message of the requested kind
    fn generate(&self, kind: MessageKind) -> anyhow::Result<String>;
}
