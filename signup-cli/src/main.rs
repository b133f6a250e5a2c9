//! Signup CLI - validate registration form input from the terminal.
//!
//! # Commands
//!
//! - `signup validate` - Validate values given as flags or in a file
//! - `signup prompt` - Fill in the form interactively
//! - `signup completions <shell>` - Generate shell completions
//!
//! Exit status is 0 when the form is accepted, 1 when it is rejected and
//! 2 on any other error.

use clap::{Args, CommandFactory, Parser, Subcommand};
use clap_complete::{Shell, generate};
use colored::Colorize;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

mod commands;
mod config;
mod error;
mod render;

use commands::{prompt, validate};
use config::{CliConfig, OutputFormat};
use error::CliResult;

/// Signup form validator
#[derive(Parser)]
#[command(name = "signup")]
#[command(version)]
#[command(about = "Validate registration form input: username, email, password and confirmation")]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file (TOML or JSON); defaults to ./signup.toml when present
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate form values and print each field's state
    #[command(alias = "v")]
    Validate(ValidateArgs),

    /// Fill in the form interactively
    #[command(alias = "p")]
    Prompt,

    /// Generate shell completions
    Completions {
        /// The shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Args)]
struct ValidateArgs {
    /// Username value
    #[arg(short, long, allow_hyphen_values = true)]
    username: Option<String>,

    /// Email value
    #[arg(short, long, allow_hyphen_values = true)]
    email: Option<String>,

    /// Password value
    #[arg(short, long, allow_hyphen_values = true)]
    password: Option<String>,

    /// Password confirmation value
    #[arg(short = 'c', long, allow_hyphen_values = true)]
    confirm_password: Option<String>,

    /// Read values from a .json, .toml or .env file keyed by field id
    #[arg(short, long, value_name = "FILE")]
    input: Option<PathBuf>,

    /// Output format (overrides config)
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    signup_log::init();
    if cli.verbose {
        signup_log::set_debug(true);
    } else if cli.quiet {
        signup_log::set_level(signup_log::Level::Error);
    }

    match run(cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            eprintln!("{} {}", "error:".red().bold(), e);
            ExitCode::from(2)
        }
    }
}

fn run(cli: Cli) -> CliResult<bool> {
    let config = CliConfig::load(cli.config.as_deref())?;

    if cli.no_color || !config.color {
        colored::control::set_override(false);
    }

    match cli.command {
        Commands::Validate(args) => validate::run(&args, &config, cli.quiet),
        Commands::Prompt => prompt::run(),
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "signup", &mut io::stdout());
            Ok(true)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_validate_flags() {
        let cli = Cli::try_parse_from([
            "signup",
            "validate",
            "-u",
            "user123",
            "--confirm-password",
            "-Abcdef1!",
            "--format",
            "json",
        ])
        .unwrap();

        let Commands::Validate(args) = cli.command else {
            panic!("expected validate");
        };
        assert_eq!(args.username.as_deref(), Some("user123"));
        assert_eq!(args.confirm_password.as_deref(), Some("-Abcdef1!"));
        assert_eq!(args.format, Some(OutputFormat::Json));
        assert!(args.email.is_none());
    }

    #[test]
    fn test_quiet_conflicts_with_verbose() {
        assert!(Cli::try_parse_from(["signup", "-q", "-v", "prompt"]).is_err());
    }
}
