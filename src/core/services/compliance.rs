//! Compliance gate - business rules beyond structure
//!
//! Only structurally valid records are screened. Rules run in this order and
//! the first rejection wins:
//!
//! 1. Sanctions screen on the ordering and beneficiary customer text
//! 2. Business-hours window (only when configured)
//! 3. Duplicate reference check, combined with the ledger insert
//!
//! Only an accepted record touches the [`DedupLedger`], so a blocked or
//! rejected reference can be resubmitted once corrected.

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::{DateTime, Datelike, Timelike, Utc, Weekday};
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::core::models::{ErrorDetail, Field, ParsedRecord, Rejection, VerdictStatus};
use crate::core::ports::DedupLedger;

/// Message appended when a sanctioned jurisdiction is found
pub const AML_ALERT: &str = "AML Alert: Sanctioned jurisdiction detected";

/// A denylisted jurisdiction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SanctionedJurisdiction {
    /// Country name, matched case-insensitively as whole words
    pub name: String,
    /// ISO 3166 alpha-2 code, matched as an upper-case standalone token
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

impl SanctionedJurisdiction {
    /// Create an entry with name and code
    #[must_use]
    pub fn new(name: &str, code: &str) -> Self {
        Self {
            name: name.to_string(),
            code: Some(code.to_string()),
        }
    }
}

/// The default denylist
#[must_use]
pub fn default_sanctions() -> Vec<SanctionedJurisdiction> {
    vec![
        SanctionedJurisdiction::new("North Korea", "KP"),
        SanctionedJurisdiction::new("Iran", "IR"),
    ]
}

/// Window in which submissions are accepted (UTC)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusinessHours {
    /// First accepted hour (inclusive)
    #[serde(default = "default_start_hour")]
    pub start_hour: u32,
    /// First rejected hour (exclusive end)
    #[serde(default = "default_end_hour")]
    pub end_hour: u32,
    /// Reject Saturdays and Sundays
    #[serde(default = "default_weekdays_only")]
    pub weekdays_only: bool,
}

const fn default_start_hour() -> u32 {
    9
}

const fn default_end_hour() -> u32 {
    17
}

const fn default_weekdays_only() -> bool {
    true
}

impl Default for BusinessHours {
    fn default() -> Self {
        Self {
            start_hour: default_start_hour(),
            end_hour: default_end_hour(),
            weekdays_only: default_weekdays_only(),
        }
    }
}

impl BusinessHours {
    /// Reject windows that could never contain an instant
    ///
    /// # Errors
    ///
    /// Fails unless `start_hour < end_hour <= 24`.
    pub fn check(&self) -> anyhow::Result<()> {
        if self.start_hour >= self.end_hour || self.end_hour > 24 {
            anyhow::bail!(
                "invalid business hours {}..{}: need start_hour < end_hour <= 24 (UTC, no overnight windows)",
                self.start_hour,
                self.end_hour
            );
        }
        Ok(())
    }

    /// Whether an instant falls inside the window
    #[must_use]
    pub fn contains(&self, at: DateTime<Utc>) -> bool {
        if self.weekdays_only && matches!(at.weekday(), Weekday::Sat | Weekday::Sun) {
            return false;
        }
        (self.start_hour..self.end_hour).contains(&at.hour())
    }
}

/// Rules the gate enforces
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplianceRules {
    /// Jurisdiction denylist
    #[serde(default = "default_sanctions")]
    pub sanctions: Vec<SanctionedJurisdiction>,
    /// Business-hours window; absent means always open
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub business_hours: Option<BusinessHours>,
}

impl Default for ComplianceRules {
    fn default() -> Self {
        Self {
            sanctions: default_sanctions(),
            business_hours: None,
        }
    }
}

/// Result of screening one record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenOutcome {
    /// Verdict status after compliance rules
    pub status: VerdictStatus,
    /// Rule that rejected the record, if any
    pub rejection: Option<Rejection>,
    /// Business-rule violations to append after structural ones
    pub extra_errors: Vec<ErrorDetail>,
}

impl ScreenOutcome {
    fn accepted() -> Self {
        Self {
            status: VerdictStatus::Success,
            rejection: None,
            extra_errors: Vec::new(),
        }
    }

    fn rejected(status: VerdictStatus, rejection: Rejection, error: Option<ErrorDetail>) -> Self {
        Self {
            status,
            rejection: Some(rejection),
            extra_errors: error.into_iter().collect(),
        }
    }
}

#[derive(Debug)]
struct CompiledJurisdiction {
    name: String,
    name_re: Regex,
    code_re: Option<Regex>,
}

impl CompiledJurisdiction {
    fn compile(entry: &SanctionedJurisdiction) -> anyhow::Result<Self> {
        let words: Vec<String> = entry.name.split_whitespace().map(regex::escape).collect();
        let name_re = Regex::new(&format!(r"(?i)\b{}\b", words.join(r"\s+")))?;
        let code_re = entry
            .code
            .as_deref()
            .map(|code| Regex::new(&format!(r"\b{}\b", regex::escape(&code.to_uppercase()))))
            .transpose()?;
        Ok(Self {
            name: entry.name.clone(),
            name_re,
            code_re,
        })
    }

    fn matches(&self, text: &str) -> bool {
        self.name_re.is_match(text) || self.code_re.as_ref().is_some_and(|re| re.is_match(text))
    }
}

/// Applies compliance rules against a shared [`DedupLedger`]
pub struct ComplianceGate {
    ledger: Arc<dyn DedupLedger>,
    sanctions: Vec<CompiledJurisdiction>,
    business_hours: Option<BusinessHours>,
}

impl std::fmt::Debug for ComplianceGate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ComplianceGate")
            .field("ledger", &format!("{} reference(s)", self.ledger.len()))
            .field("sanctions", &self.sanctions.len())
            .field("business_hours", &self.business_hours)
            .finish()
    }
}

impl ComplianceGate {
    /// Build a gate over a ledger
    ///
    /// # Errors
    ///
    /// Fails if a denylist entry cannot be turned into a matcher, or if the
    /// business-hours window is empty or runs past midnight.
    pub fn new(ledger: Arc<dyn DedupLedger>, rules: &ComplianceRules) -> anyhow::Result<Self> {
        if let Some(hours) = rules.business_hours {
            hours.check()?;
        }
        let sanctions = rules
            .sanctions
            .iter()
            .filter(|entry| !entry.name.trim().is_empty())
            .map(CompiledJurisdiction::compile)
            .collect::<anyhow::Result<Vec<_>>>()?;
        Ok(Self {
            ledger,
            sanctions,
            business_hours: rules.business_hours,
        })
    }

    /// The ledger this gate commits to
    #[must_use]
    pub fn ledger(&self) -> &Arc<dyn DedupLedger> {
        &self.ledger
    }

    /// Screen a record submitted at `submitted_at`
    ///
    /// # Errors
    ///
    /// Only fails when the ledger itself fails.
    pub fn screen(
        &self,
        record: &ParsedRecord,
        structurally_valid: bool,
        submitted_at: DateTime<Utc>,
    ) -> anyhow::Result<ScreenOutcome> {
        if !structurally_valid {
            return Ok(ScreenOutcome::rejected(VerdictStatus::Failed, Rejection::Structural, None));
        }

        if let Some((field, jurisdiction)) = self.sanctions_hit(record) {
            log::warn!(
                "sanctions hit on {field} ({jurisdiction}) for reference {:?}",
                record.transaction_reference()
            );
            let mut error = ErrorDetail::new(AML_ALERT).at(field);
            error.params =
                Some(BTreeMap::from([("jurisdiction".to_string(), jurisdiction.to_string())]));
            return Ok(ScreenOutcome::rejected(
                VerdictStatus::Blocked,
                Rejection::Sanctioned,
                Some(error),
            ));
        }

        if let Some(hours) = self.business_hours.filter(|h| !h.contains(submitted_at)) {
            log::warn!("submission at {submitted_at} outside business hours");
            let weekdays = if hours.weekdays_only { " on weekdays" } else { "" };
            let error = ErrorDetail::new(format!(
                "Business Hours Violation: submissions are accepted {:02}:00-{:02}:00 UTC{weekdays}.",
                hours.start_hour, hours.end_hour
            ));
            return Ok(ScreenOutcome::rejected(
                VerdictStatus::Failed,
                Rejection::OutsideBusinessHours,
                Some(error),
            ));
        }

        // An empty reference is still a reference and is reserved like any other.
        let Some(reference) = record.transaction_reference() else {
            log::warn!("accepted record carries no transaction reference; ledger untouched");
            return Ok(ScreenOutcome::accepted());
        };

        if self.ledger.insert_if_absent(reference)? {
            log::info!("accepted transaction reference {reference}");
            Ok(ScreenOutcome::accepted())
        } else {
            log::warn!("duplicate transaction reference {reference}");
            let error = ErrorDetail::new(format!(
                "Duplicate Transaction Reference: {reference} already exists."
            ))
            .at(Field::TransactionReference);
            Ok(ScreenOutcome::rejected(VerdictStatus::Failed, Rejection::Duplicate, Some(error)))
        }
    }

    fn sanctions_hit(&self, record: &ParsedRecord) -> Option<(Field, &str)> {
        [Field::OrderingCustomer, Field::BeneficiaryCustomer].into_iter().find_map(|field| {
            let text = record.get(field)?;
            self.sanctions
                .iter()
                .find(|j| j.matches(text))
                .map(|j| (field, j.name.as_str()))
        })
    }
}
