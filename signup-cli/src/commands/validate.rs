//! Validate command - check form values given as flags or in a file.

use signup_log::debug;
use signup_validation::{FieldKind, FormValidator, RecordingPresenter, SignupForm};

use crate::ValidateArgs;
use crate::config::{CliConfig, OutputFormat, load_form};
use crate::error::CliResult;
use crate::render::{render_json, render_pretty};

/// Validate once and print the result. Returns whether the form was accepted.
pub fn run(args: &ValidateArgs, config: &CliConfig, quiet: bool) -> CliResult<bool> {
    let form = collect_form(args)?;
    let format = args.format.unwrap_or(config.format);

    let mut presenter = RecordingPresenter::new();
    // The notification is part of the rendered output below.
    let result = FormValidator::new().submit(&form, &mut presenter, &mut |_: &str| {});

    if !quiet {
        match format {
            OutputFormat::Pretty => print!("{}", render_pretty(&presenter, result.accepted)),
            OutputFormat::Json => println!("{}", render_json(&result)),
        }
    }

    Ok(result.accepted)
}

/// Values from the input file, overridden by any flags given.
fn collect_form(args: &ValidateArgs) -> CliResult<SignupForm> {
    let mut form = match &args.input {
        Some(path) => {
            debug!("reading form values from {}", path.display());
            load_form(path)?
        }
        None => SignupForm::default(),
    };

    let flags = [
        (FieldKind::Username, &args.username),
        (FieldKind::Email, &args.email),
        (FieldKind::Password, &args.password),
        (FieldKind::ConfirmPassword, &args.confirm_password),
    ];
    for (field, value) in flags {
        if let Some(value) = value {
            form.set(field, value.as_str());
        }
    }

    Ok(form)
}
