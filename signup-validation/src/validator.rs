// Registration form validator

use crate::validators::{PasswordsMatch, Required};
use crate::{
    FieldKind, FieldPresenter, FormResult, SignupForm, SubmitNotifier, Validate, ValidationError,
    ValidationOutcome,
};
use signup_log::{debug, info};

/// Notification shown once a submission is accepted.
pub const SUCCESS_MESSAGE: &str = "Successfully signed up!";

const TARGET: &str = "signup::validator";

/// Validates the registration form.
///
/// Each pass starts from a neutral form and recomputes every field, so
/// calling [`FormValidator::validate`] repeatedly with the same input gives
/// the same result.
#[derive(Debug, Clone, Copy, Default)]
pub struct FormValidator;

impl FormValidator {
    pub fn new() -> Self {
        Self
    }

    /// Run one validation pass.
    ///
    /// Fields are visited in [`FieldKind::ALL`] order. Once a field fails,
    /// the form stays rejected, but later fields are still checked so every
    /// error is displayed at once.
    pub fn validate(&self, form: &SignupForm) -> FormResult {
        let mut result = FormResult::neutral();
        let mut accepted = true;

        for field in FieldKind::ALL {
            let value = form.value(field);

            if value.is_empty() {
                if !field.is_required() {
                    debug!(target: TARGET, "{} blank, left neutral", field);
                    continue;
                }
                if let Err(error) = Required::validate(field, value) {
                    debug!(target: TARGET, "{} blank", field);
                    result.set(field, ValidationOutcome::Invalid(error));
                    accepted = false;
                }
                continue;
            }

            // confirm-password has no check of its own; the password
            // cross-check below decides its state.
            let Some(check) = field.format_check() else {
                continue;
            };

            let passed = match check(value) {
                Err(error) => {
                    debug!(target: TARGET, "{} failed {}", field, error.constraint);
                    result.set(field, ValidationOutcome::Invalid(error));
                    false
                }
                Ok(()) if field == FieldKind::Password => {
                    Self::cross_check(value, form.value(FieldKind::ConfirmPassword), &mut result)
                }
                Ok(()) => {
                    debug!(target: TARGET, "{} passed", field);
                    result.set(field, ValidationOutcome::Valid);
                    true
                }
            };

            if !accepted && passed {
                debug!(target: TARGET, "{} passed after an earlier failure", field);
            }
            accepted = accepted && passed;
        }

        result.accepted = accepted;
        info!(
            target: TARGET,
            "validation pass {} ({} field errors)",
            if accepted { "accepted" } else { "rejected" },
            result.errors().len()
        );
        result
    }

    /// Validate, push the result to the presenter, and notify on acceptance.
    pub fn submit<P, N>(&self, form: &SignupForm, presenter: &mut P, notifier: &mut N) -> FormResult
    where
        P: FieldPresenter + ?Sized,
        N: SubmitNotifier + ?Sized,
    {
        let result = self.validate(form);
        result.apply(presenter);
        if result.accepted {
            notifier.notify_success(SUCCESS_MESSAGE);
        }
        result
    }

    /// Marks password and confirm-password together.
    fn cross_check(password: &str, confirm: &str, result: &mut FormResult) -> bool {
        match PasswordsMatch::validate(password, confirm) {
            Ok(()) => {
                debug!(target: TARGET, "password confirmed");
                result.set(FieldKind::Password, ValidationOutcome::Valid);
                result.set(FieldKind::ConfirmPassword, ValidationOutcome::Valid);
                true
            }
            Err(error) => {
                debug!(target: TARGET, "password confirmation mismatch");
                let confirm_error = error.for_field(FieldKind::ConfirmPassword);
                result.set(FieldKind::Password, ValidationOutcome::Invalid(error));
                result.set(
                    FieldKind::ConfirmPassword,
                    ValidationOutcome::Invalid(confirm_error),
                );
                false
            }
        }
    }
}

impl Validate for SignupForm {
    fn validate(&self) -> Result<(), Vec<ValidationError>> {
        FormValidator::new().validate(self).into_result()
    }
}
