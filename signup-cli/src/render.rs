//! Terminal rendering of validation results.

use colored::Colorize;
use signup_validation::{FieldStatus, FormResult, RecordingPresenter, SUCCESS_MESSAGE};

/// Width of the field-name column.
const NAME_WIDTH: usize = 18;

/// One line per field; long messages go on their own indented line.
pub fn render_pretty(presenter: &RecordingPresenter, accepted: bool) -> String {
    let mut out = String::new();

    for (field, view) in presenter.views() {
        let name = format!("{:<width$}", field.id(), width = NAME_WIDTH);
        let line = match (view.status, view.message.as_deref()) {
            (FieldStatus::Success, _) => format!("  {} {}", "✔".green(), name),
            (FieldStatus::Error, Some(message)) if view.long_message() => format!(
                "  {} {}\n      {}",
                "✘".red(),
                name.bold(),
                message.red()
            ),
            (FieldStatus::Error, message) => format!(
                "  {} {} {}",
                "✘".red(),
                name.bold(),
                message.unwrap_or_default().red()
            ),
            (FieldStatus::Neutral, _) => format!("  {} {}", "·".dimmed(), name.dimmed()),
        };
        out.push_str(line.trim_end());
        out.push('\n');
    }

    out.push('\n');
    if accepted {
        out.push_str(&format!("  {}\n", SUCCESS_MESSAGE.green().bold()));
    } else {
        out.push_str(&format!("  {}\n", "Please fix the errors above.".yellow()));
    }
    out
}

/// The result as pretty-printed JSON, with the notification when accepted.
pub fn render_json(result: &FormResult) -> String {
    let mut json = result.to_json();
    if result.accepted {
        json["notification"] = serde_json::Value::String(SUCCESS_MESSAGE.to_string());
    }
    serde_json::to_string_pretty(&json).unwrap_or_else(|_| json.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use signup_validation::{FieldKind, FormValidator, SignupForm};

    fn presented(form: &SignupForm) -> (FormResult, RecordingPresenter) {
        let result = FormValidator::new().validate(form);
        let mut presenter = RecordingPresenter::new();
        result.apply(&mut presenter);
        (result, presenter)
    }

    #[test]
    fn test_pretty_rejected() {
        colored::control::set_override(false);
        let form = SignupForm::default().with(FieldKind::Username, "ab");
        let (result, presenter) = presented(&form);

        let out = render_pretty(&presenter, result.accepted);
        assert!(out.contains("✘ username"));
        // long message is moved below the field name
        assert!(out.contains("\n      Username must be a minimum of 3"));
        assert!(out.contains("Email is required"));
        assert!(out.contains("· confirm-password"));
        assert!(out.contains("Please fix the errors above."));
        assert!(!out.contains(SUCCESS_MESSAGE));
    }

    #[test]
    fn test_pretty_accepted() {
        colored::control::set_override(false);
        let form = SignupForm::new("user123", "user@example.com", "Abcdef1!", "Abcdef1!");
        let (result, presenter) = presented(&form);

        let out = render_pretty(&presenter, result.accepted);
        assert_eq!(out.matches('✔').count(), 4);
        assert!(out.contains(SUCCESS_MESSAGE));
    }

    #[test]
    fn test_json_notification_only_when_accepted() {
        let (rejected, _) = presented(&SignupForm::default());
        let json: serde_json::Value = serde_json::from_str(&render_json(&rejected)).unwrap();
        assert!(json.get("notification").is_none());

        let form = SignupForm::new("user123", "user@example.com", "Abcdef1!", "Abcdef1!");
        let (accepted, _) = presented(&form);
        let json: serde_json::Value = serde_json::from_str(&render_json(&accepted)).unwrap();
        assert_eq!(json["notification"], SUCCESS_MESSAGE);
    }
}
