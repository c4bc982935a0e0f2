//! Field validator - applies a [`FieldSchema`] to a [`ParsedRecord`]
//!
//! Validation is pure: the same record always yields the same report.
//! Missing required fields are reported first, in schema order, followed by
//! pattern mismatches, also in schema order. Fields without a rule are ignored.

use regex::Regex;

use crate::core::models::{ErrorDetail, Field, FieldSchema, ParsedRecord, SchemaError};

/// Outcome of structural validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructuralReport {
    /// Whether no violation was found
    pub valid: bool,
    /// Violations in schema-evaluation order
    pub errors: Vec<ErrorDetail>,
}

#[derive(Debug)]
struct CompiledRule {
    field: Field,
    required: bool,
    pattern: Option<(String, Regex)>,
}

/// A schema compiled for repeated use
#[derive(Debug)]
pub struct FieldValidator {
    rules: Vec<CompiledRule>,
}

impl FieldValidator {
    /// Compile a schema
    ///
    /// # Errors
    ///
    /// Fails if a rule names an unknown field, repeats a field, or carries an
    /// invalid regular expression.
    pub fn new(schema: &FieldSchema) -> Result<Self, SchemaError> {
        let rules = schema
            .resolved_rules()?
            .into_iter()
            .map(|(field, rule)| {
                let pattern = rule
                    .pattern
                    .as_ref()
                    .map(|p| {
                        Regex::new(p).map(|re| (p.clone(), re)).map_err(|e| {
                            SchemaError::InvalidPattern {
                                field: rule.name.clone(),
                                message: e.to_string(),
                            }
                        })
                    })
                    .transpose()?;
                Ok(CompiledRule {
                    field,
                    required: rule.required,
                    pattern,
                })
            })
            .collect::<Result<Vec<_>, SchemaError>>()?;

        Ok(Self { rules })
    }

    /// Validator for the built-in MT103 contract
    #[must_use]
    pub fn mt103() -> Self {
        Self::new(&FieldSchema::mt103()).expect("embedded MT103 schema compiles")
    }

    /// Check a record against the schema
    #[must_use]
    pub fn validate(&self, record: &ParsedRecord) -> StructuralReport {
        let missing = self
            .rules
            .iter()
            .filter(|rule| rule.required && !record.contains(rule.field))
            .map(|rule| ErrorDetail::missing_required(rule.field));

        let mismatched = self.rules.iter().filter_map(|rule| {
            let (source, re) = rule.pattern.as_ref()?;
            let value = record.get(rule.field)?;
            (!re.is_match(value)).then(|| ErrorDetail::pattern_mismatch(rule.field, source))
        });

        let errors: Vec<ErrorDetail> = missing.chain(mismatched).collect();
        StructuralReport {
            valid: errors.is_empty(),
            errors,
        }
    }
}

impl Default for FieldValidator {
    fn default() -> Self {
        Self::mt103()
    }
}
