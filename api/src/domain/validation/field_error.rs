//! Field-scoped validation errors
//!
//! A form submission collects every problem before the workflow decides what
//! to do, so the user sees them all in one round trip.

use serde::Serialize;

/// Symbolic reason a field was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ErrorCode {
    #[serde(rename = "required")]
    Required,
    #[serde(rename = "duplicate")]
    Duplicate,
    #[serde(rename = "typeMismatch.birthDate")]
    TypeMismatchBirthDate,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::Required => "required",
            ErrorCode::Duplicate => "duplicate",
            ErrorCode::TypeMismatchBirthDate => "typeMismatch.birthDate",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A validation failure tied to one named form field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub code: ErrorCode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Errors collected against one bound form object
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors {
    errors: Vec<FieldError>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a rejected field value
    pub fn reject(&mut self, field: &'static str, code: ErrorCode) {
        self.errors.push(FieldError {
            field,
            code,
            message: None,
        });
    }

    /// Record a rejected field value with a default message
    pub fn reject_with_message(
        &mut self,
        field: &'static str,
        code: ErrorCode,
        message: impl Into<String>,
    ) {
        self.errors.push(FieldError {
            field,
            code,
            message: Some(message.into()),
        });
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// First error recorded against `field`
    pub fn field_error(&self, field: &str) -> Option<&FieldError> {
        self.errors.iter().find(|e| e.field == field)
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.errors.iter()
    }
}
