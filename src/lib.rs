// Signup - registration form validation
//
// Re-exports the validator and its logging so applications depend on a
// single crate.

pub use signup_validation::*;

pub use signup_log as log;

/// Commonly used types in one import.
pub mod prelude {
    pub use signup_validation::{
        FieldKind, FieldPresenter, FieldStatus, FormResult, FormValidator, MessageLength,
        RecordingPresenter, SignupForm, SubmitNotifier, Validate, ValidationError,
        ValidationOutcome,
    };
}
