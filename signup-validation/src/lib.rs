//! Registration form validation
//!
//! Checks the four fields of a signup form (username, email, password and
//! its confirmation) and produces a [`FormResult`]: one display state per
//! field plus an overall accepted flag. Presentation is left to the caller
//! through the [`FieldPresenter`] trait.
//!
//! # Examples
//!
//! ## Validating a form
//!
//! ```
//! use signup_validation::{FieldKind, FieldStatus, FormValidator, SignupForm};
//!
//! let form = SignupForm::new("user123", "user@example.com", "Abcdef1!", "Abcdef1!");
//! let result = FormValidator::new().validate(&form);
//!
//! assert!(result.accepted);
//! assert_eq!(result.field(FieldKind::Email).status(), FieldStatus::Success);
//! ```
//!
//! ## Showing errors
//!
//! ```
//! use signup_validation::{FieldKind, FormValidator, RecordingPresenter, SignupForm};
//!
//! let form = SignupForm::default().with(FieldKind::Username, "ab");
//! let mut presenter = RecordingPresenter::new();
//! let mut notices = Vec::new();
//!
//! let result = FormValidator::new().submit(&form, &mut presenter, &mut |msg: &str| {
//!     notices.push(msg.to_string())
//! });
//!
//! assert!(!result.accepted);
//! assert!(notices.is_empty());
//! assert_eq!(
//!     presenter.view(FieldKind::Username).message.as_deref(),
//!     Some("Username must be a minimum of 3 and maximum of 16 characters")
//! );
//! assert!(presenter.view(FieldKind::Username).long_message());
//! ```

mod errors;
mod field;
mod presenter;
mod result;
mod traits;
mod validator;
pub mod validators;

pub use errors::*;
pub use field::*;
pub use presenter::*;
pub use result::*;
pub use traits::*;
pub use validator::*;
