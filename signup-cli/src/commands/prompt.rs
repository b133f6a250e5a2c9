//! Prompt command - fill in the form interactively until it is accepted.

use colored::Colorize;
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Input, Password};
use signup_log::info;
use signup_validation::{FieldKind, FormValidator, RecordingPresenter, SignupForm};
use std::io::{self, Write};

use crate::error::CliResult;
use crate::render::render_pretty;

/// Where the interactive form gets its answers from.
pub trait FormInput {
    /// Value for `field`. `previous` is what the field held after the last round.
    fn value(&mut self, field: FieldKind, previous: &str) -> CliResult<String>;

    /// Whether to go another round after a rejected form.
    fn retry(&mut self) -> CliResult<bool>;
}

/// Answers read from the terminal with dialoguer.
#[derive(Default)]
pub struct TerminalInput {
    theme: ColorfulTheme,
}

impl FormInput for TerminalInput {
    fn value(&mut self, field: FieldKind, previous: &str) -> CliResult<String> {
        let prompt = field.display_name();

        let value = if field.is_secret() {
            Password::with_theme(&self.theme)
                .with_prompt(prompt)
                .allow_empty_password(true)
                .interact()?
        } else {
            Input::<String>::with_theme(&self.theme)
                .with_prompt(prompt)
                .with_initial_text(previous)
                .allow_empty(true)
                .interact_text()?
        };

        Ok(value)
    }

    fn retry(&mut self) -> CliResult<bool> {
        Ok(Confirm::with_theme(&self.theme)
            .with_prompt("Try again?")
            .default(true)
            .interact()?)
    }
}

/// Ask for every field on the terminal until the form is accepted or the
/// user gives up.
pub fn run() -> CliResult<bool> {
    println!();
    println!("  {}", "Create your account".bright_cyan().bold());
    println!();

    fill_in(&mut TerminalInput::default(), &mut io::stdout())
}

/// Run validation rounds against `input`, writing each round's result to `out`.
pub fn fill_in<I, W>(input: &mut I, out: &mut W) -> CliResult<bool>
where
    I: FormInput + ?Sized,
    W: Write,
{
    let validator = FormValidator::new();
    let mut presenter = RecordingPresenter::new();
    let mut form = SignupForm::default();

    loop {
        for field in FieldKind::ALL {
            let value = input.value(field, form.value(field))?;
            form.set(field, value);
        }

        let result = validator.submit(&form, &mut presenter, &mut |msg: &str| {
            info!("{}", msg);
        });

        writeln!(out)?;
        write!(out, "{}", render_pretty(&presenter, result.accepted))?;
        writeln!(out)?;

        if result.accepted {
            return Ok(true);
        }
        if !input.retry()? {
            return Ok(false);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;

    /// Answers each round from a list of changed fields; unchanged fields
    /// keep their previous value.
    #[derive(Default)]
    struct ScriptedInput {
        rounds: VecDeque<Vec<(FieldKind, &'static str)>>,
        retries: VecDeque<bool>,
        seen_previous: Vec<(FieldKind, String)>,
        retry_asked: usize,
    }

    impl ScriptedInput {
        fn round(mut self, answers: Vec<(FieldKind, &'static str)>) -> Self {
            self.rounds.push_back(answers);
            self
        }

        fn retries(mut self, answers: &[bool]) -> Self {
            self.retries.extend(answers);
            self
        }
    }

    impl FormInput for ScriptedInput {
        fn value(&mut self, field: FieldKind, previous: &str) -> CliResult<String> {
            self.seen_previous.push((field, previous.to_string()));
            let answer = self
                .rounds
                .front()
                .and_then(|round| round.iter().find(|(f, _)| *f == field))
                .map(|(_, v)| v.to_string())
                .unwrap_or_else(|| previous.to_string());
            if field == FieldKind::ConfirmPassword {
                self.rounds.pop_front();
            }
            Ok(answer)
        }

        fn retry(&mut self) -> CliResult<bool> {
            self.retry_asked += 1;
            Ok(self.retries.pop_front().unwrap_or(false))
        }
    }

    fn short_username_round() -> Vec<(FieldKind, &'static str)> {
        vec![
            (FieldKind::Username, "ab"),
            (FieldKind::Email, "user@example.com"),
            (FieldKind::Password, "Abcdef1!"),
            (FieldKind::ConfirmPassword, "Abcdef1!"),
        ]
    }

    #[test]
    fn test_rejected_then_fixed_is_accepted() {
        colored::control::set_override(false);
        let mut input = ScriptedInput::default()
            .round(short_username_round())
            .round(vec![(FieldKind::Username, "user123")])
            .retries(&[true]);
        let mut out = Vec::new();

        let accepted = fill_in(&mut input, &mut out).unwrap();

        assert!(accepted);
        assert_eq!(input.retry_asked, 1);

        // Second round starts from what the first round entered.
        let second_round = &input.seen_previous[4..];
        assert_eq!(second_round[0], (FieldKind::Username, "ab".to_string()));
        assert_eq!(second_round[1], (FieldKind::Email, "user@example.com".to_string()));

        let out = String::from_utf8(out).unwrap();
        let (first, second) = out.split_once("Please fix the errors above.").unwrap();
        assert!(first.contains("minimum of 3 and maximum of 16"));
        assert!(!second.contains("minimum of 3 and maximum of 16"));
        assert!(second.contains("Successfully signed up!"));
    }

    #[test]
    fn test_declined_retry_returns_false() {
        colored::control::set_override(false);
        let mut input = ScriptedInput::default()
            .round(short_username_round())
            .retries(&[false]);
        let mut out = Vec::new();

        let accepted = fill_in(&mut input, &mut out).unwrap();

        assert!(!accepted);
        assert_eq!(input.retry_asked, 1);
        assert_eq!(input.seen_previous.len(), 4);
        let out = String::from_utf8(out).unwrap();
        assert!(!out.contains("Successfully signed up!"));
    }

    #[test]
    fn test_valid_first_round_never_asks_to_retry() {
        let mut input = ScriptedInput::default().round(vec![
            (FieldKind::Username, "user123"),
            (FieldKind::Email, "user@example.com"),
            (FieldKind::Password, "Abcdef1!"),
            (FieldKind::ConfirmPassword, "Abcdef1!"),
        ]);

        assert!(fill_in(&mut input, &mut Vec::new()).unwrap());
        assert_eq!(input.retry_asked, 0);
    }
}
