//! CLI configuration and input file loading.
//!
//! Precedence, lowest first: built-in defaults, `signup.toml` (or the file
//! given with `--config`), `SIGNUP_*` environment variables, command flags.

use clap::ValueEnum;
use serde::Deserialize;
use serde_json::Value;
use signup_log::debug;
use signup_validation::SignupForm;
use std::env;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use crate::error::{CliError, CliResult};

/// Config file looked up in the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "signup.toml";

/// Prefix of environment overrides.
pub const ENV_PREFIX: &str = "SIGNUP";

/// How validation results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One line per field, colored
    #[default]
    Pretty,
    /// The result as a JSON document
    Json,
}

impl FromStr for OutputFormat {
    type Err = CliError;

    fn from_str(s: &str) -> CliResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "pretty" => Ok(OutputFormat::Pretty),
            "json" => Ok(OutputFormat::Json),
            other => Err(CliError::Config(format!(
                "unknown output format `{}` (expected pretty or json)",
                other
            ))),
        }
    }
}

/// Settings that shape CLI output.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    pub format: OutputFormat,
    pub color: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Pretty,
            color: true,
        }
    }
}

impl CliConfig {
    /// Load defaults, the config file, then environment overrides.
    pub fn load(path: Option<&Path>) -> CliResult<Self> {
        // A missing .env is fine.
        dotenvy::dotenv().ok();

        let default_path = Path::new(DEFAULT_CONFIG_FILE);
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None if default_path.is_file() => Self::from_file(default_path)?,
            None => Self::default(),
        };

        let env = EnvLoader::new(ENV_PREFIX);
        config.apply_overrides(|key| env.var(key))?;
        Ok(config)
    }

    /// Read a TOML or JSON config file.
    pub fn from_file(path: &Path) -> CliResult<Self> {
        debug!(target: "signup::config", "loading config from {}", path.display());
        let value = ConfigLoader::auto(path)?.load_file(path)?;
        serde_json::from_value(value)
            .map_err(|e| CliError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Apply `FORMAT` / `COLOR` overrides from a key lookup.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> CliResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = lookup("FORMAT") {
            self.format = raw.parse()?;
        }
        if let Some(raw) = lookup("COLOR") {
            self.color = parse_flag(&raw).ok_or_else(|| {
                CliError::Config(format!("{}_COLOR must be a boolean, got `{}`", ENV_PREFIX, raw))
            })?;
        }
        Ok(())
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Prefixed environment variable lookup.
pub struct EnvLoader {
    prefix: String,
}

impl EnvLoader {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    /// `var("FORMAT")` reads `SIGNUP_FORMAT`.
    pub fn var(&self, key: &str) -> Option<String> {
        env::var(self.key(key)).ok()
    }

    fn key(&self, key: &str) -> String {
        format!("{}_{}", self.prefix, key.to_uppercase())
    }
}

/// Supported file formats
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FileFormat {
    Json,
    Toml,
    Env,
}

impl FileFormat {
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "json" => Some(FileFormat::Json),
            "toml" => Some(FileFormat::Toml),
            "env" => Some(FileFormat::Env),
            _ => None,
        }
    }
}

/// Loads config and form files into a JSON value
pub struct ConfigLoader {
    format: FileFormat,
}

impl ConfigLoader {
    pub fn new(format: FileFormat) -> Self {
        Self { format }
    }

    /// Pick the format from the file extension. A bare `.env` is a dotenv file.
    pub fn auto(path: &Path) -> CliResult<Self> {
        if path.file_name().and_then(|s| s.to_str()) == Some(".env") {
            return Ok(Self::new(FileFormat::Env));
        }

        let ext = path.extension().and_then(|s| s.to_str()).ok_or_else(|| {
            CliError::Config(format!("{}: no file extension found", path.display()))
        })?;

        let format = FileFormat::from_extension(ext)
            .ok_or_else(|| CliError::Config(format!("unsupported file format: {}", ext)))?;

        Ok(Self::new(format))
    }

    pub fn load_file(&self, path: &Path) -> CliResult<Value> {
        let content = fs::read_to_string(path)?;
        self.parse(&content)
    }

    pub fn parse(&self, content: &str) -> CliResult<Value> {
        match self.format {
            FileFormat::Json => serde_json::from_str(content)
                .map_err(|e| CliError::Parse(format!("JSON parse error: {}", e))),
            FileFormat::Toml => self.parse_toml(content),
            FileFormat::Env => Self::parse_env(content),
        }
    }

    fn parse_toml(&self, content: &str) -> CliResult<Value> {
        let toml_value: toml::Value = toml::from_str(content)
            .map_err(|e| CliError::Parse(format!("TOML parse error: {}", e)))?;

        serde_json::to_value(toml_value)
            .map_err(|e| CliError::Parse(format!("TOML to JSON conversion error: {}", e)))
    }

    /// Dotenv syntax: comments, quoting and `export` prefixes. Keys may not
    /// contain `-`, so `confirm_password` stands in for `confirm-password`.
    fn parse_env(content: &str) -> CliResult<Value> {
        let mut map = serde_json::Map::new();

        for item in dotenvy::from_read_iter(content.as_bytes()) {
            let (key, value) =
                item.map_err(|e| CliError::Parse(format!("env parse error: {}", e)))?;
            map.insert(key, Value::String(value));
        }

        Ok(Value::Object(map))
    }
}

/// Read form values from a `.json`, `.toml` or `.env` file keyed by field id.
pub fn load_form(path: &Path) -> CliResult<SignupForm> {
    let value = ConfigLoader::auto(path)?.load_file(path)?;
    form_from_value(value)
        .map_err(|e| match e {
            CliError::Parse(msg) => CliError::Parse(format!("{}: {}", path.display(), msg)),
            other => other,
        })
}

fn form_from_value(value: Value) -> CliResult<SignupForm> {
    let Value::Object(map) = value else {
        return Err(CliError::Parse("expected a table of field values".to_string()));
    };

    let mut pairs = Vec::with_capacity(map.len());
    for (key, value) in map {
        match value {
            Value::String(s) => pairs.push((key, s)),
            other => {
                return Err(CliError::Parse(format!(
                    "field `{}` must be a string, got {}",
                    key, other
                )));
            }
        }
    }

    Ok(SignupForm::from_pairs(pairs)?)
}
