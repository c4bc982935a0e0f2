//! Offline template generator
//!
//! Produces deterministic-shape sample messages with unique references.
//! Also serves as the fallback for network-backed generators.

use std::sync::atomic::{AtomicU64, Ordering};

use chrono::Utc;

use crate::core::models::MessageKind;
use crate::core::ports::MessageGenerator;

/// Generates messages from fixed templates
#[derive(Debug, Default)]
pub struct TemplateGenerator {
    sequence: AtomicU64,
}

impl TemplateGenerator {
    /// Create a generator
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a message synchronously; never fails
    #[must_use]
    pub fn render(&self, kind: MessageKind) -> String {
        let now = Utc::now();
        let seq = self.sequence.fetch_add(1, Ordering::Relaxed);
        let reference = format!("{}{}{seq:03}", prefix(kind), now.format("%y%m%d%H%M%S"));
        let value_date = now.format("%y%m%d");

        match kind {
            MessageKind::Valid => format!(
                ":20:{reference}\n:23B:CRED\n:32A:{value_date}USD1000,\n\
                 :50K:Template User\n123 Sample Lane\n\
                 :59:Template Beneficiary\n456 Sample St\n:71A:OUR"
            ),
            MessageKind::Invalid => {
                format!(":20:{reference}\n:32A:{value_date}USD500,\n:50K:Invalid User")
            },
            MessageKind::Sanctioned => format!(
                ":20:{reference}\n:23B:CRED\n:32A:{value_date}USD25000,\n\
                 :50K:Template User\n123 Sample Lane\n\
                 :59:Korea Trading Co\nPyongyang, North Korea\n:71A:SHA"
            ),
        }
    }
}

const fn prefix(kind: MessageKind) -> &'static str {
    match kind {
        MessageKind::Valid => "REF",
        MessageKind::Invalid => "INV",
        MessageKind::Sanctioned => "SAN",
    }
}

impl MessageGenerator for TemplateGenerator {
    fn name(&self) -> &'static str {
        "template"
    }

    fn generate(&self, kind: MessageKind) -> anyhow::Result<String> {
        Ok(self.render(kind))
    }
}
