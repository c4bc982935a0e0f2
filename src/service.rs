//! Validation service - the one entry point transports call
//!
//! Composes parse → structural validation → compliance screen and stamps
//! the result with a trace id and timestamp. The most recent verdict is kept
//! in a single slot for dashboards to poll.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use chrono::{DateTime, SecondsFormat, Utc};
use uuid::Uuid;

use crate::adapters::InMemoryLedger;
use crate::config::ServiceConfig;
use crate::core::models::{FieldSchema, ValidationVerdict, VerdictStatus};
use crate::core::ports::DedupLedger;
use crate::core::services::{ComplianceGate, ComplianceRules, FieldValidator, parse};

/// Parses, validates and screens MT103 messages
#[derive(Debug)]
pub struct ValidationService {
    validator: FieldValidator,
    gate: ComplianceGate,
    last: Mutex<Option<ValidationVerdict>>,
}

impl ValidationService {
    /// Build a service from its parts
    pub fn new(
        schema: &FieldSchema,
        ledger: Arc<dyn DedupLedger>,
        rules: &ComplianceRules,
    ) -> anyhow::Result<Self> {
        Ok(Self {
            validator: FieldValidator::new(schema)?,
            gate: ComplianceGate::new(ledger, rules)?,
            last: Mutex::new(None),
        })
    }

    /// Build a service from configuration
    pub fn from_config(config: &ServiceConfig) -> anyhow::Result<Self> {
        Self::new(&config.field_schema()?, config.open_ledger()?, &config.compliance)
    }

    /// Service with the built-in schema, default rules and a fresh in-memory ledger
    ///
    /// # Panics
    ///
    /// Panics if the built-in schema or denylist fails to compile.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(
            &FieldSchema::mt103(),
            Arc::new(InMemoryLedger::new()),
            &ComplianceRules::default(),
        )
        .expect("built-in schema and rules compile")
    }

    /// Validate a message submitted now
    pub fn validate(&self, raw: &str) -> anyhow::Result<ValidationVerdict> {
        self.validate_at(raw, Utc::now())
    }

    /// Validate a message as if submitted at `submitted_at`
    ///
    /// # Errors
    ///
    /// Fails only if the dedup ledger fails; the verdict slot is left as is.
    pub fn validate_at(
        &self,
        raw: &str,
        submitted_at: DateTime<Utc>,
    ) -> anyhow::Result<ValidationVerdict> {
        let data = parse(raw);
        let report = self.validator.validate(&data);
        let outcome = self.gate.screen(&data, report.valid, submitted_at)?;

        let mut errors = report.errors;
        errors.extend(outcome.extra_errors);

        let verdict = ValidationVerdict {
            status: outcome.status,
            valid: outcome.status == VerdictStatus::Success,
            errors,
            data,
            raw: raw.to_string(),
            trace_id: Uuid::new_v4(),
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            rejection: outcome.rejection,
        };
        log::debug!(
            "trace {}: {} with {} error(s)",
            verdict.trace_id,
            verdict.status,
            verdict.errors.len()
        );

        *self.last_slot() = Some(verdict.clone());
        Ok(verdict)
    }

    /// The most recently produced verdict
    #[must_use]
    pub fn last_verdict(&self) -> Option<ValidationVerdict> {
        self.last_slot().clone()
    }

    /// The dedup ledger shared by all calls
    #[must_use]
    pub fn ledger(&self) -> &Arc<dyn DedupLedger> {
        self.gate.ledger()
    }

    fn last_slot(&self) -> MutexGuard<'_, Option<ValidationVerdict>> {
        self.last.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
