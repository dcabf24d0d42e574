//! Schema validation error types.

use std::fmt;

use serde::Serialize;
use thiserror::Error;

use super::SchemaKind;

/// A single field-level violation found while validating a record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    /// The offending field name (`$` for the record itself).
    pub field: String,

    /// Human readable description of the problem.
    pub message: String,
}

impl FieldViolation {
    /// A required field is absent (or `null`).
    pub fn missing(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: "field required".to_string(),
        }
    }

    /// A field is present but holds the wrong JSON type.
    pub fn wrong_type(field: impl Into<String>, expected: &str, found: &serde_json::Value) -> Self {
        Self {
            field: field.into(),
            message: format!("expected {}, found {}", expected, json_type_name(found)),
        }
    }
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Raised when a decoded JSON value does not match its schema.
///
/// Carries every violation of the record, not only the first one.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind} validation failed: {}", join_violations(.violations))]
pub struct ValidationError {
    /// Schema the value was checked against.
    pub kind: SchemaKind,

    /// All field-level violations, in schema field order.
    pub violations: Vec<FieldViolation>,
}

impl ValidationError {
    /// Create a new validation error.
    pub fn new(kind: SchemaKind, violations: Vec<FieldViolation>) -> Self {
        Self { kind, violations }
    }

    /// Whether a given field is among the violations.
    pub fn has_field(&self, field: &str) -> bool {
        self.violations.iter().any(|v| v.field == field)
    }
}

fn join_violations(violations: &[FieldViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

pub(crate) fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
