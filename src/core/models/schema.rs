//! Declarative field schema
//!
//! The schema is configuration data, not code: an ordered list of field
//! rules loaded from TOML (or JSON of the same shape). The built-in MT103
//! contract ships in `contracts/mt103.schema.toml`.
//!
//! ```toml
//! [[field]]
//! name = "valueDateCurrencyAmount"
//! required = true
//! pattern = '^[0-9]{6}[A-Z]{3}[0-9,.]+$'
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::Field;

const MT103_SCHEMA: &str = include_str!("../../../contracts/mt103.schema.toml");

/// Errors raised while loading or compiling a schema
#[derive(Debug, Error)]
pub enum SchemaError {
    /// Schema file could not be read
    #[error("failed to read schema {path}: {source}")]
    Read {
        /// File that failed to load
        path: String,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Schema text is not valid TOML/JSON of the expected shape
    #[error("invalid schema document: {0}")]
    Syntax(String),

    /// A rule names a field the parser never produces
    #[error("unknown field in schema: {0}")]
    UnknownField(String),

    /// The same field has two rules
    #[error("duplicate rule for field: {0}")]
    DuplicateField(String),

    /// A pattern is not a valid regular expression
    #[error("invalid pattern for {field}: {message}")]
    InvalidPattern {
        /// Field carrying the pattern
        field: String,
        /// Regex compiler message
        message: String,
    },
}

/// Rule for a single field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldRule {
    /// Semantic field name (e.g. `transactionReference`)
    pub name: String,
    /// Whether the field must be present
    #[serde(default)]
    pub required: bool,
    /// Regular expression the value must match
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
}

/// An ordered set of field rules
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSchema {
    /// Schema title, informational
    #[serde(default)]
    pub title: String,
    /// Schema version, informational
    #[serde(default)]
    pub version: String,
    /// Rules in evaluation order
    #[serde(default, rename = "field")]
    pub fields: Vec<FieldRule>,
}

impl FieldSchema {
    /// The built-in MT103 contract
    ///
    /// # Panics
    ///
    /// Panics if the embedded schema is malformed, which the unit tests rule out.
    #[must_use]
    pub fn mt103() -> Self {
        Self::from_toml_str(MT103_SCHEMA).expect("embedded MT103 schema is valid")
    }

    /// Parse a TOML schema document
    pub fn from_toml_str(content: &str) -> Result<Self, SchemaError> {
        toml::from_str(content).map_err(|e| SchemaError::Syntax(e.to_string()))
    }

    /// Parse a JSON schema document
    pub fn from_json_str(content: &str) -> Result<Self, SchemaError> {
        serde_json::from_str(content).map_err(|e| SchemaError::Syntax(e.to_string()))
    }

    /// Load a schema file, choosing the format by extension (`.json` or TOML)
    pub fn load(path: &Path) -> Result<Self, SchemaError> {
        let content = fs::read_to_string(path).map_err(|source| SchemaError::Read {
            path: path.display().to_string(),
            source,
        })?;

        if path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("json")) {
            Self::from_json_str(&content)
        } else {
            Self::from_toml_str(&content)
        }
    }

    /// Render the schema as pretty TOML
    pub fn to_toml_string(&self) -> Result<String, SchemaError> {
        toml::to_string_pretty(self).map_err(|e| SchemaError::Syntax(e.to_string()))
    }

    /// Rules resolved to known fields, rejecting unknown or repeated names
    pub fn resolved_rules(&self) -> Result<Vec<(Field, &FieldRule)>, SchemaError> {
        let mut resolved: Vec<(Field, &FieldRule)> = Vec::with_capacity(self.fields.len());
        for rule in &self.fields {
            let field = Field::from_name(&rule.name)
                .ok_or_else(|| SchemaError::UnknownField(rule.name.clone()))?;
            if resolved.iter().any(|(f, _)| *f == field) {
                return Err(SchemaError::DuplicateField(rule.name.clone()));
            }
            resolved.push((field, rule));
        }
        Ok(resolved)
    }

    /// Names of required fields, in rule order
    #[must_use]
    pub fn required_fields(&self) -> Vec<&str> {
        self.fields.iter().filter(|r| r.required).map(|r| r.name.as_str()).collect()
    }
}

impl Default for FieldSchema {
    fn default() -> Self {
        Self::mt103()
    }
}
