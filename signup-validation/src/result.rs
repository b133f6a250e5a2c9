// Validation results

use crate::{FieldKind, FieldPresenter, FieldStatus, MessageLength, ValidationError, ValidationErrors};
use serde::{Serialize, Serializer};

/// Outcome of checking one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationOutcome {
    Valid,
    Invalid(ValidationError),
}

impl ValidationOutcome {
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationOutcome::Valid)
    }

    pub fn error(&self) -> Option<&ValidationError> {
        match self {
            ValidationOutcome::Valid => None,
            ValidationOutcome::Invalid(error) => Some(error),
        }
    }
}

impl From<Result<(), ValidationError>> for ValidationOutcome {
    fn from(result: Result<(), ValidationError>) -> Self {
        match result {
            Ok(()) => ValidationOutcome::Valid,
            Err(error) => ValidationOutcome::Invalid(error),
        }
    }
}

/// Presentation state of one field after a pass. No outcome means neutral.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldState {
    pub field: FieldKind,
    pub outcome: Option<ValidationOutcome>,
}

impl FieldState {
    pub fn neutral(field: FieldKind) -> Self {
        Self {
            field,
            outcome: None,
        }
    }

    pub fn status(&self) -> FieldStatus {
        match &self.outcome {
            None => FieldStatus::Neutral,
            Some(ValidationOutcome::Valid) => FieldStatus::Success,
            Some(ValidationOutcome::Invalid(_)) => FieldStatus::Error,
        }
    }

    /// Error text; present only in the error status.
    pub fn message(&self) -> Option<&str> {
        self.error().map(|e| e.message.as_str())
    }

    pub fn message_length(&self) -> MessageLength {
        self.error().map(|e| e.length).unwrap_or_default()
    }

    pub fn long_message(&self) -> bool {
        self.message_length().is_long()
    }

    pub fn error(&self) -> Option<&ValidationError> {
        self.outcome.as_ref().and_then(ValidationOutcome::error)
    }
}

impl Serialize for FieldState {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct View<'a> {
            status: FieldStatus,
            #[serde(skip_serializing_if = "Option::is_none")]
            message: Option<&'a str>,
            long_message: bool,
        }

        View {
            status: self.status(),
            message: self.message(),
            long_message: self.long_message(),
        }
        .serialize(serializer)
    }
}

/// Result of one validation pass over the whole form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormResult {
    pub accepted: bool,
    fields: [FieldState; 4],
}

impl FormResult {
    /// All four fields neutral, nothing decided yet.
    pub(crate) fn neutral() -> Self {
        Self {
            accepted: true,
            fields: FieldKind::ALL.map(FieldState::neutral),
        }
    }

    pub(crate) fn set(&mut self, field: FieldKind, outcome: ValidationOutcome) {
        self.fields[field.index()].outcome = Some(outcome);
    }

    pub fn field(&self, field: FieldKind) -> &FieldState {
        &self.fields[field.index()]
    }

    pub fn outcome(&self, field: FieldKind) -> Option<&ValidationOutcome> {
        self.field(field).outcome.as_ref()
    }

    /// Field states in pass order.
    pub fn fields(&self) -> impl Iterator<Item = &FieldState> {
        self.fields.iter()
    }

    pub fn errors(&self) -> ValidationErrors {
        self.fields
            .iter()
            .filter_map(FieldState::error)
            .cloned()
            .collect::<Vec<_>>()
            .into()
    }

    pub fn into_result(self) -> Result<(), Vec<ValidationError>> {
        if self.accepted {
            Ok(())
        } else {
            Err(self.errors().errors)
        }
    }

    /// Push this result onto a UI. Every field is reset first, so nothing
    /// from an earlier pass survives.
    pub fn apply<P: FieldPresenter + ?Sized>(&self, presenter: &mut P) {
        for state in &self.fields {
            presenter.reset(state.field);
        }

        for state in &self.fields {
            match &state.outcome {
                None => {}
                Some(ValidationOutcome::Valid) => presenter.show_success(state.field),
                Some(ValidationOutcome::Invalid(error)) => {
                    presenter.show_error(state.field, &error.message, error.length)
                }
            }
        }
    }

    /// Convert to JSON representation
    pub fn to_json(&self) -> serde_json::Value {
        let fields: serde_json::Map<String, serde_json::Value> = self
            .fields
            .iter()
            .map(|state| {
                let view = serde_json::to_value(state).unwrap_or(serde_json::Value::Null);
                (state.field.id().to_string(), view)
            })
            .collect();

        serde_json::json!({
            "accepted": self.accepted,
            "fields": fields,
        })
    }
}

impl Serialize for FormResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_json().serialize(serializer)
    }
}
