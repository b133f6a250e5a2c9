// Validation errors

use crate::{FieldKind, MessageLength};
use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Validation error for a single field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    /// Field that failed validation
    pub field: FieldKind,

    /// Message shown next to the field
    pub message: String,

    /// Validation constraint that failed
    pub constraint: &'static str,

    /// How much room the message needs when displayed
    pub length: MessageLength,
}

impl ValidationError {
    /// Create a new validation error
    pub fn new(field: FieldKind, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
            constraint: "custom",
            length: MessageLength::Normal,
        }
    }

    /// Set the constraint name
    pub fn with_constraint(mut self, constraint: &'static str) -> Self {
        self.constraint = constraint;
        self
    }

    /// Flag the message for wider display
    pub fn with_length(mut self, length: MessageLength) -> Self {
        self.length = length;
        self
    }

    /// Copy this error onto another field
    pub fn for_field(&self, field: FieldKind) -> Self {
        Self {
            field,
            ..self.clone()
        }
    }

    /// Whether the consumer should widen the error area
    pub fn is_long(&self) -> bool {
        self.length.is_long()
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Collection of validation errors
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    pub errors: Vec<ValidationError>,
}

impl ValidationErrors {
    /// Create a new validation errors collection
    pub fn new(errors: Vec<ValidationError>) -> Self {
        Self { errors }
    }

    /// Check if there are any errors
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Get the number of errors
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Add an error
    pub fn add(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    /// Get errors for a specific field
    pub fn get_field_errors(&self, field: FieldKind) -> Vec<&ValidationError> {
        self.errors.iter().filter(|e| e.field == field).collect()
    }

    /// Convert to JSON representation
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({ "errors": self.errors })
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for error in &self.errors {
            writeln!(f, "{}", error)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

impl From<Vec<ValidationError>> for ValidationErrors {
    fn from(errors: Vec<ValidationError>) -> Self {
        Self::new(errors)
    }
}

impl IntoIterator for ValidationErrors {
    type Item = ValidationError;
    type IntoIter = std::vec::IntoIter<ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

/// A field identifier outside the registration form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown form field `{0}` (expected username, email, password or confirm-password)")]
pub struct UnknownField(pub String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_builder() {
        let error = ValidationError::new(FieldKind::Username, "too short")
            .with_constraint("length")
            .with_length(MessageLength::Long);

        assert_eq!(error.constraint, "length");
        assert!(error.is_long());
        assert_eq!(error.to_string(), "username: too short");
    }

    #[test]
    fn test_for_field_keeps_message() {
        let error = ValidationError::new(FieldKind::Password, "Passwords don't match")
            .with_constraint("matches");
        let copy = error.for_field(FieldKind::ConfirmPassword);

        assert_eq!(copy.field, FieldKind::ConfirmPassword);
        assert_eq!(copy.message, error.message);
        assert_eq!(copy.constraint, "matches");
    }

    #[test]
    fn test_errors_collection() {
        let mut errors = ValidationErrors::default();
        assert!(errors.is_empty());

        errors.add(ValidationError::new(FieldKind::Email, "Email must be valid"));
        errors.add(ValidationError::new(FieldKind::Password, "Password is required"));

        assert_eq!(errors.len(), 2);
        assert_eq!(errors.get_field_errors(FieldKind::Email).len(), 1);
        assert!(errors.get_field_errors(FieldKind::Username).is_empty());

        let json = errors.to_json();
        assert_eq!(json["errors"][0]["field"], "email");
        assert_eq!(json["errors"][1]["length"], "normal");
    }

    #[test]
    fn test_unknown_field_message() {
        let err = UnknownField("age".to_string());
        assert!(err.to_string().contains("`age`"));
    }
}
