// Validation traits

use crate::{FieldKind, MessageLength, ValidationError};

/// Trait for validatable types
pub trait Validate {
    /// Validate the value and return errors if any
    fn validate(&self) -> Result<(), Vec<ValidationError>>;
}

/// A UI that displays per-field validation state.
///
/// Implemented by whatever owns the widgets; [`crate::FormResult::apply`]
/// drives it.
pub trait FieldPresenter {
    /// Back to neutral: no status class, no message, no wide-message style.
    fn reset(&mut self, field: FieldKind);

    /// Show the error status and its message.
    fn show_error(&mut self, field: FieldKind, message: &str, length: MessageLength);

    /// Show the success status.
    fn show_success(&mut self, field: FieldKind);
}

/// Receives the notification shown after an accepted submission.
pub trait SubmitNotifier {
    fn notify_success(&mut self, message: &str);
}

impl<F: FnMut(&str)> SubmitNotifier for F {
    fn notify_success(&mut self, message: &str) {
        self(message)
    }
}
