//! MT103 fields and the parsed record
//!
//! A [`ParsedRecord`] maps the closed set of understood MT103 fields to the
//! text found after their tag. Each field appears at most once.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A semantic MT103 field recognized by the tag parser
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    /// `:20:` sender's reference
    TransactionReference,
    /// `:23B:` bank operation code
    BankOperationCode,
    /// `:32A:` value date, currency code and interbank settled amount
    ValueDateCurrencyAmount,
    /// `:50K:` ordering customer (name and address lines)
    OrderingCustomer,
    /// `:59:` beneficiary customer (account, name and address lines)
    BeneficiaryCustomer,
    /// `:71A:` details of charges
    Charges,
    /// `:70:` remittance information
    RemittanceInfo,
}

impl Field {
    /// Every recognized field, in tag order
    pub const ALL: [Self; 7] = [
        Self::TransactionReference,
        Self::BankOperationCode,
        Self::ValueDateCurrencyAmount,
        Self::OrderingCustomer,
        Self::BeneficiaryCustomer,
        Self::Charges,
        Self::RemittanceInfo,
    ];

    /// Resolve a tag token (colons included, e.g. `:32A:`) to its field
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.tag() == tag)
    }

    /// Resolve a semantic name (e.g. `valueDateCurrencyAmount`) to its field
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.name() == name)
    }

    /// The tag token that introduces this field
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::TransactionReference => ":20:",
            Self::BankOperationCode => ":23B:",
            Self::ValueDateCurrencyAmount => ":32A:",
            Self::OrderingCustomer => ":50K:",
            Self::BeneficiaryCustomer => ":59:",
            Self::Charges => ":71A:",
            Self::RemittanceInfo => ":70:",
        }
    }

    /// The semantic name used in JSON output and schema files
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::TransactionReference => "transactionReference",
            Self::BankOperationCode => "bankOperationCode",
            Self::ValueDateCurrencyAmount => "valueDateCurrencyAmount",
            Self::OrderingCustomer => "orderingCustomer",
            Self::BeneficiaryCustomer => "beneficiaryCustomer",
            Self::Charges => "charges",
            Self::RemittanceInfo => "remittanceInfo",
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Structured view of an MT103 message
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParsedRecord {
    fields: BTreeMap<Field, String>,
}

impl ParsedRecord {
    /// Create an empty record
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the value of a field, if present
    #[must_use]
    pub fn get(&self, field: Field) -> Option<&str> {
        self.fields.get(&field).map(String::as_str)
    }

    /// Set a field, replacing any previous value
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        self.fields.insert(field, value.into());
    }

    /// Append a continuation line to a field that already has a value
    ///
    /// Returns `false` (and does nothing) when the field is absent or empty.
    pub fn append_line(&mut self, field: Field, line: &str) -> bool {
        match self.fields.get_mut(&field) {
            Some(value) if !value.is_empty() => {
                value.push('\n');
                value.push_str(line);
                true
            },
            _ => false,
        }
    }

    /// Whether a field is present
    #[must_use]
    pub fn contains(&self, field: Field) -> bool {
        self.fields.contains_key(&field)
    }

    /// Number of fields present
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether no field was recognized
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterate over present fields in tag order
    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.fields.iter().map(|(f, v)| (*f, v.as_str()))
    }

    /// Shortcut for the `:20:` transaction reference
    #[must_use]
    pub fn transaction_reference(&self) -> Option<&str> {
        self.get(Field::TransactionReference)
    }
}

impl FromIterator<(Field, String)> for ParsedRecord {
    fn from_iter<I: IntoIterator<Item = (Field, String)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}
