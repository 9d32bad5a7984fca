use crate::form::{Cardinality, ValueKind};
use serde_json::Value;
use thiserror::Error;

/// Errors that can occur while loading or writing a form descriptor.
#[derive(Error, Debug, Clone)]
pub enum FormError {
    #[error("Failed to parse form JSON: {0}")]
    Parse(String),

    #[error("Could not access form file '{path}': {message}")]
    Io { path: String, message: String },

    #[error("Failed to serialize form: {0}")]
    Serialize(String),
}

/// Errors raised when a form's `values` do not conform to its `definitions`.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error(
        "Type mismatch for field '{field}': expected {expected}, but found {kind} {found}",
        kind = ValueKind::of(.found)
    )]
    SchemaMismatch {
        field: String,
        expected: String,
        found: Value,
    },

    #[error("Required field '{0}' is missing or null")]
    MissingRequiredField(String),

    #[error("Field '{field}' violates cardinality {cardinality}: {message}")]
    CardinalityViolation {
        field: String,
        cardinality: Cardinality,
        message: String,
    },

    #[error("Field '{field}' declares an unregistered type: '{type_name}'")]
    UnknownFieldType { field: String, type_name: String },

    #[error("Value '{found}' is not among the allowed values of field '{field}'")]
    ValueNotAllowed { field: String, found: Value },

    #[error("Key '{0}' in form values has no matching field definition")]
    UnexpectedField(String),

    #[error("Form values carry no 'processId'")]
    MissingProcessId,
}

impl ValidationError {
    /// The name of the field the violation refers to, if any.
    pub fn field(&self) -> Option<&str> {
        match self {
            ValidationError::SchemaMismatch { field, .. }
            | ValidationError::CardinalityViolation { field, .. }
            | ValidationError::UnknownFieldType { field, .. }
            | ValidationError::ValueNotAllowed { field, .. } => Some(field),
            ValidationError::MissingRequiredField(field)
            | ValidationError::UnexpectedField(field) => Some(field),
            ValidationError::MissingProcessId => None,
        }
    }
}

/// Errors that can occur when applying a submission to a form.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SubmissionError {
    #[error("Form has already been submitted")]
    AlreadySubmitted,

    #[error("Submitted field '{0}' is not defined by the form")]
    UnknownField(String),

    #[error("Field '{0}' is read-only and cannot be submitted")]
    ReadOnlyField(String),

    #[error("Invalid submission pair '{0}', expected name=value")]
    InvalidPair(String),

    #[error("Submitted values are invalid: {0}")]
    Invalid(#[from] ValidationError),
}

/// Errors that can occur when converting a custom request into a form descriptor.
#[derive(Error, Debug, Clone)]
pub enum FormConversionError {
    #[error("Invalid custom data: {0}")]
    ValidationError(String),
}
