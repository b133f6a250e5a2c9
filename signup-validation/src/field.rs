// Registration form fields

use crate::validators::{EmailFormat, PasswordStrength, UsernameFormat};
use crate::{UnknownField, ValidationError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Field-specific format check.
pub type FormatCheck = fn(&str) -> Result<(), ValidationError>;

/// The fields of the registration form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FieldKind {
    Username,
    Email,
    Password,
    ConfirmPassword,
}

impl FieldKind {
    /// All fields, in the order a validation pass visits them.
    pub const ALL: [FieldKind; 4] = [
        FieldKind::Username,
        FieldKind::Email,
        FieldKind::Password,
        FieldKind::ConfirmPassword,
    ];

    /// Element identifier of the field.
    pub fn id(self) -> &'static str {
        match self {
            FieldKind::Username => "username",
            FieldKind::Email => "email",
            FieldKind::Password => "password",
            FieldKind::ConfirmPassword => "confirm-password",
        }
    }

    /// Identifier with its first letter capitalized, as used in messages.
    pub fn display_name(self) -> &'static str {
        match self {
            FieldKind::Username => "Username",
            FieldKind::Email => "Email",
            FieldKind::Password => "Password",
            FieldKind::ConfirmPassword => "Confirm-password",
        }
    }

    /// Blank confirm-password is tolerated; its state comes from the
    /// password cross-check.
    pub fn is_required(self) -> bool {
        !matches!(self, FieldKind::ConfirmPassword)
    }

    /// The format check owned by this field, if it has one of its own.
    pub fn format_check(self) -> Option<FormatCheck> {
        match self {
            FieldKind::Username => Some(UsernameFormat::validate as FormatCheck),
            FieldKind::Email => Some(EmailFormat::validate as FormatCheck),
            FieldKind::Password => Some(PasswordStrength::validate as FormatCheck),
            FieldKind::ConfirmPassword => None,
        }
    }

    /// Whether the value is masked when entered or logged.
    pub fn is_secret(self) -> bool {
        matches!(self, FieldKind::Password | FieldKind::ConfirmPassword)
    }

    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for FieldKind {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "username" => Ok(FieldKind::Username),
            "email" => Ok(FieldKind::Email),
            "password" => Ok(FieldKind::Password),
            "confirm-password" => Ok(FieldKind::ConfirmPassword),
            _ => Err(UnknownField(s.to_string())),
        }
    }
}

/// Display status of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldStatus {
    #[default]
    Neutral,
    Error,
    Success,
}

impl FieldStatus {
    /// Class list of the field's form group.
    pub fn css_class(self) -> &'static str {
        match self {
            FieldStatus::Neutral => "form-group",
            FieldStatus::Error => "form-group error",
            FieldStatus::Success => "form-group success",
        }
    }
}

/// Display width an error message needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLength {
    #[default]
    Normal,
    /// Username length message
    Long,
    /// Password strength message
    Longer,
}

impl MessageLength {
    pub fn is_long(self) -> bool {
        !matches!(self, MessageLength::Normal)
    }

    /// Extra class applied to the input, if any.
    pub fn css_class(self) -> Option<&'static str> {
        match self {
            MessageLength::Normal => None,
            MessageLength::Long => Some("long-message"),
            MessageLength::Longer => Some("longer-message"),
        }
    }
}

/// Raw values of the registration form.
///
/// Values are stored as entered; [`SignupForm::value`] trims them.
#[derive(Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SignupForm {
    pub username: String,
    pub email: String,
    pub password: String,
    #[serde(rename = "confirm-password", alias = "confirm_password")]
    pub confirm_password: String,
}

impl SignupForm {
    pub fn new(
        username: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
        confirm_password: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            email: email.into(),
            password: password.into(),
            confirm_password: confirm_password.into(),
        }
    }

    /// Build a form from `(field id, value)` pairs. Absent fields stay blank.
    pub fn from_pairs<I, K, V>(pairs: I) -> Result<Self, UnknownField>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut form = Self::default();
        for (key, value) in pairs {
            let kind: FieldKind = key.as_ref().parse()?;
            form.set(kind, value);
        }
        Ok(form)
    }

    /// Builder-style setter.
    pub fn with(mut self, kind: FieldKind, value: impl Into<String>) -> Self {
        self.set(kind, value);
        self
    }

    pub fn set(&mut self, kind: FieldKind, value: impl Into<String>) {
        *self.raw_mut(kind) = value.into();
    }

    /// Trimmed current value of a field.
    pub fn value(&self, kind: FieldKind) -> &str {
        self.raw(kind).trim()
    }

    fn raw(&self, kind: FieldKind) -> &String {
        match kind {
            FieldKind::Username => &self.username,
            FieldKind::Email => &self.email,
            FieldKind::Password => &self.password,
            FieldKind::ConfirmPassword => &self.confirm_password,
        }
    }

    fn raw_mut(&mut self, kind: FieldKind) -> &mut String {
        match kind {
            FieldKind::Username => &mut self.username,
            FieldKind::Email => &mut self.email,
            FieldKind::Password => &mut self.password,
            FieldKind::ConfirmPassword => &mut self.confirm_password,
        }
    }
}

impl fmt::Debug for SignupForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignupForm")
            .field("username", &self.username)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("confirm_password", &"<redacted>")
            .finish()
    }
}
