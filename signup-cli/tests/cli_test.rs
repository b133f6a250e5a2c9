//! Integration tests for the signup binary

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Runs in an empty directory with no config or env overrides.
fn signup(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("signup").unwrap();
    cmd.current_dir(dir.path())
        .env_remove("SIGNUP_FORMAT")
        .env_remove("SIGNUP_COLOR")
        .env("NO_COLOR", "1")
        .arg("--no-color");
    cmd
}

fn valid_args() -> [&'static str; 8] {
    [
        "--username",
        "user123",
        "--email",
        "user@example.com",
        "--password",
        "Abcdef1!",
        "--confirm-password",
        "Abcdef1!",
    ]
}

#[test]
fn test_valid_form_is_accepted() {
    let dir = TempDir::new().unwrap();
    signup(&dir)
        .arg("validate")
        .args(valid_args())
        .assert()
        .success()
        .stdout(predicate::str::contains("Successfully signed up!"));
}

#[test]
fn test_empty_form_is_rejected() {
    let dir = TempDir::new().unwrap();
    signup(&dir)
        .arg("validate")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Username is required"))
        .stdout(predicate::str::contains("Email is required"))
        .stdout(predicate::str::contains("Password is required"))
        .stdout(predicate::str::contains("Successfully signed up!").not());
}

#[test]
fn test_json_output() {
    let dir = TempDir::new().unwrap();
    let output = signup(&dir)
        .args(["validate", "--format", "json"])
        .args(&valid_args()[..6])
        .args(["--confirm-password", "Abcdef1?"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["accepted"], false);
    assert_eq!(json["fields"]["username"]["status"], "success");
    assert_eq!(json["fields"]["password"]["message"], "Passwords don't match");
    assert_eq!(
        json["fields"]["confirm-password"]["message"],
        "Passwords don't match"
    );
}

#[test]
fn test_input_file_with_flag_override() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("form.toml");
    fs::write(
        &input,
        r#"
username = "ab"
email = "user@example.com"
password = "Abcdef1!"
confirm-password = "Abcdef1!"
"#,
    )
    .unwrap();

    signup(&dir)
        .args(["validate", "--input"])
        .arg(&input)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("minimum of 3 and maximum of 16"));

    signup(&dir)
        .args(["validate", "--input"])
        .arg(&input)
        .args(["--username", "user123"])
        .assert()
        .success();
}

#[test]
fn test_dotenv_input_file() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join(".env"),
        "# signup form\n\
         username=user123 # my name\n\
         email=\"user@example.com\" # work\n\
         password='Abcdef1!'\n\
         confirm_password='Abcdef1!'\n",
    )
    .unwrap();

    signup(&dir)
        .args(["validate", "--input", ".env"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Successfully signed up!"))
        .stdout(predicate::str::contains("must not contain spaces").not());
}

#[test]
fn test_config_file_sets_format() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("signup.toml"), "format = \"json\"\n").unwrap();

    signup(&dir)
        .arg("validate")
        .args(valid_args())
        .assert()
        .success()
        .stdout(predicate::str::contains("\"accepted\": true"));
}

#[test]
fn test_env_overrides_config_file() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("signup.toml"), "format = \"json\"\n").unwrap();

    signup(&dir)
        .env("SIGNUP_FORMAT", "pretty")
        .arg("validate")
        .args(valid_args())
        .assert()
        .success()
        .stdout(predicate::str::contains("✔ username"));
}

#[test]
fn test_unknown_field_in_input_is_an_error() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("form.json");
    fs::write(&input, r#"{"nickname": "bob"}"#).unwrap();

    signup(&dir)
        .args(["validate", "--input"])
        .arg(&input)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("nickname"));
}

#[test]
fn test_quiet_prints_nothing() {
    let dir = TempDir::new().unwrap();
    signup(&dir)
        .args(["-q", "validate", "--username", "ab"])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_completions() {
    let dir = TempDir::new().unwrap();
    signup(&dir)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("signup"));
}
