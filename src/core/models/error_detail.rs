//! Itemized validation and compliance violations

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::Field;

/// One structural or business-rule violation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorDetail {
    /// Human-readable description
    pub message: String,
    /// JSON pointer to the offending field (e.g. `/charges`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instance_path: Option<String>,
    /// Rule parameters (`missingProperty`, `pattern`, ...)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub params: Option<BTreeMap<String, String>>,
}

impl ErrorDetail {
    /// A violation carrying only a message
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            instance_path: None,
            params: None,
        }
    }

    /// A required field is absent
    #[must_use]
    pub fn missing_required(field: Field) -> Self {
        Self {
            message: format!("must have required property '{}'", field.name()),
            instance_path: Some(pointer(field)),
            params: Some(BTreeMap::from([(
                "missingProperty".to_string(),
                field.name().to_string(),
            )])),
        }
    }

    /// A field value does not match its pattern
    #[must_use]
    pub fn pattern_mismatch(field: Field, pattern: &str) -> Self {
        Self {
            message: format!("must match pattern \"{pattern}\""),
            instance_path: Some(pointer(field)),
            params: Some(BTreeMap::from([("pattern".to_string(), pattern.to_string())])),
        }
    }

    /// Attach a field pointer to a message-only violation
    #[must_use]
    pub fn at(mut self, field: Field) -> Self {
        self.instance_path = Some(pointer(field));
        self
    }

    /// Whether this violation points at the given field
    #[must_use]
    pub fn targets(&self, field: Field) -> bool {
        self.instance_path.as_deref() == Some(pointer(field).as_str())
    }
}

fn pointer(field: Field) -> String {
    format!("/{}", field.name())
}
