// Field checks

use crate::{FieldKind, MessageLength, ValidationError};
use once_cell::sync::Lazy;
use regex::Regex;

pub const USERNAME_SPACES: &str = "Username must not contain spaces";
pub const USERNAME_LENGTH: &str = "Username must be a minimum of 3 and maximum of 16 characters";
pub const USERNAME_SPECIAL_CHARS: &str = "Username must not contain special characters";
pub const USERNAME_LETTERS_AND_NUMBERS: &str = "Username must contain both letters and numbers";
pub const EMAIL_INVALID: &str = "Email must be valid";
pub const PASSWORD_SPACES: &str = "Password must not contain spaces";
pub const PASSWORD_STRENGTH: &str = "Password must be 8 characters long and must have an uppercase and lowercase letter, number, and a special character";
pub const PASSWORDS_MISMATCH: &str = "Passwords don't match";

/// Username length bounds, inclusive.
pub const USERNAME_MIN_LEN: usize = 3;
pub const USERNAME_MAX_LEN: usize = 16;

pub const PASSWORD_MIN_LEN: usize = 8;
/// Characters that satisfy the password special-character rule.
pub const PASSWORD_SPECIALS: &str = "@$!%*?&";

static USERNAME_CHARSET_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[a-zA-Z0-9_]+$").unwrap());

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").unwrap()
});

/// Validates that a field is not blank
pub struct Required;

impl Required {
    pub fn validate(field: FieldKind, value: &str) -> Result<(), ValidationError> {
        if value.trim().is_empty() {
            Err(
                ValidationError::new(field, format!("{} is required", field.display_name()))
                    .with_constraint("required"),
            )
        } else {
            Ok(())
        }
    }
}

/// Validates username shape, reporting the first rule that fails
pub struct UsernameFormat;

impl UsernameFormat {
    pub fn validate(value: &str) -> Result<(), ValidationError> {
        let field = FieldKind::Username;
        let len = value.chars().count();

        if value.contains(' ') {
            Err(ValidationError::new(field, USERNAME_SPACES).with_constraint("noSpaces"))
        } else if !(USERNAME_MIN_LEN..=USERNAME_MAX_LEN).contains(&len) {
            Err(ValidationError::new(field, USERNAME_LENGTH)
                .with_constraint("length")
                .with_length(MessageLength::Long))
        } else if !USERNAME_CHARSET_REGEX.is_match(value) {
            Err(ValidationError::new(field, USERNAME_SPECIAL_CHARS).with_constraint("specialChars"))
        } else if !(has_ascii_letter(value) && has_ascii_digit(value)) {
            Err(ValidationError::new(field, USERNAME_LETTERS_AND_NUMBERS)
                .with_constraint("lettersAndNumbers"))
        } else {
            Ok(())
        }
    }
}

/// Validates `local@domain.tld` email shape
pub struct EmailFormat;

impl EmailFormat {
    pub fn validate(value: &str) -> Result<(), ValidationError> {
        if EMAIL_REGEX.is_match(value) {
            Ok(())
        } else {
            Err(ValidationError::new(FieldKind::Email, EMAIL_INVALID).with_constraint("isEmail"))
        }
    }
}

/// Validates password spacing and composition
pub struct PasswordStrength;

impl PasswordStrength {
    pub fn validate(value: &str) -> Result<(), ValidationError> {
        let field = FieldKind::Password;

        if value.contains(' ') {
            return Err(ValidationError::new(field, PASSWORD_SPACES).with_constraint("noSpaces"));
        }

        let strong = value.chars().count() >= PASSWORD_MIN_LEN
            && value.chars().any(|c| c.is_ascii_lowercase())
            && value.chars().any(|c| c.is_ascii_uppercase())
            && has_ascii_digit(value)
            && value.chars().any(|c| PASSWORD_SPECIALS.contains(c));

        if strong {
            Ok(())
        } else {
            Err(ValidationError::new(field, PASSWORD_STRENGTH)
                .with_constraint("strength")
                .with_length(MessageLength::Longer))
        }
    }
}

/// Cross-field check between password and its confirmation
pub struct PasswordsMatch;

impl PasswordsMatch {
    /// The error is reported on the password field; callers copy it onto
    /// confirm-password with [`ValidationError::for_field`].
    pub fn validate(password: &str, confirm: &str) -> Result<(), ValidationError> {
        if password.trim() == confirm.trim() {
            Ok(())
        } else {
            Err(ValidationError::new(FieldKind::Password, PASSWORDS_MISMATCH)
                .with_constraint("matches"))
        }
    }
}

fn has_ascii_letter(value: &str) -> bool {
    value.chars().any(|c| c.is_ascii_alphabetic())
}

fn has_ascii_digit(value: &str) -> bool {
    value.chars().any(|c| c.is_ascii_digit())
}
