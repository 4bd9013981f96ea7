//! Configuration source for the MongoDB connection.
//!
//! Settings are read from a TOML file with a `[mongodb]` table:
//!
//! ```toml
//! [mongodb]
//! uri = "mongodb://localhost:27017"
//! database = "aafl"
//! strict_bootstrap = false
//! ```
//!
//! `AAFL_MONGODB_URI` and `AAFL_MONGODB_DATABASE` override the file values.

use crate::error::{FederationError, Result};
use crate::storage::BootstrapPolicy;
use serde::Deserialize;
use std::path::{Path, PathBuf};


pub const CONFIG_ENV_VAR: &str = "AAFL_CONFIG";
pub const URI_ENV_VAR: &str = "AAFL_MONGODB_URI";
pub const DATABASE_ENV_VAR: &str = "AAFL_MONGODB_DATABASE";

#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    mongodb: RawMongoSettings,
}

#[derive(Debug, Default, Deserialize)]
struct RawMongoSettings {
    uri: Option<String>,
    database: Option<String>,
    #[serde(default)]
    strict_bootstrap: bool,
}

/// Resolved connection settings consumed by the connection manager.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MongoSettings {
    pub uri: String,
    pub database: String,
    pub strict_bootstrap: bool,
}

impl MongoSettings {
    /// Build settings from the two required values, rejecting blanks.
    pub fn new(uri: impl Into<String>, database: impl Into<String>) -> Result<Self> {
        let uri = required("mongodb.uri", Some(uri.into()))?;
        let database = required("mongodb.database", Some(database.into()))?;
        Ok(Self {
            uri,
            database,
            strict_bootstrap: false,
        })
    }

    pub fn with_strict_bootstrap(mut self, strict: bool) -> Self {
        self.strict_bootstrap = strict;
        self
    }

    pub fn bootstrap_policy(&self) -> BootstrapPolicy {
        if self.strict_bootstrap {
            BootstrapPolicy::Strict
        } else {
            BootstrapPolicy::Lenient
        }
    }

    /// Parse settings from TOML text without consulting the environment.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        Self::from_sources(Some(contents), None, None)
    }

    /// Load settings from the resolved config file plus environment overrides.
    ///
    /// A missing file is treated as empty so that the environment alone can
    /// supply both values.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let path = resolve_config_path(explicit);
        let contents = match std::fs::read_to_string(&path) {
            Ok(s) => Some(s),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "config file not found");
                None
            }
            Err(e) => return Err(e.into()),
        };

        Self::from_sources(
            contents.as_deref(),
            env_override(URI_ENV_VAR),
            env_override(DATABASE_ENV_VAR),
        )
        .map_err(|e| match e {
            FederationError::Configuration { message } => FederationError::configuration(format!(
                "{} (config file: {})",
                message,
                path.display()
            )),
            other => other,
        })
    }

    /// Merge file contents with override values. Overrides win when present
    /// and not blank.
    pub(crate) fn from_sources(
        contents: Option<&str>,
        uri_override: Option<String>,
        database_override: Option<String>,
    ) -> Result<Self> {
        let file: ConfigFile = match contents {
            Some(s) => toml::from_str(s)?,
            None => ConfigFile::default(),
        };
        let raw = file.mongodb;

        Ok(Self {
            uri: required("mongodb.uri", non_blank(uri_override).or(raw.uri))?,
            database: required(
                "mongodb.database",
                non_blank(database_override).or(raw.database),
            )?,
            strict_bootstrap: raw.strict_bootstrap,
        })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Environment value, with an exported-but-empty variable treated as unset.
fn env_override(var: &str) -> Option<String> {
    non_blank(std::env::var(var).ok())
}

fn required(key: &str, value: Option<String>) -> Result<String> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v.trim().to_string()),
        Some(_) => Err(FederationError::configuration(format!("{} is empty", key))),
        None => Err(FederationError::configuration(format!("{} is not set", key))),
    }
}

/// Path: ~/.config/aafl-federation/config.toml
pub fn default_config_path() -> PathBuf {
    let base = dirs::config_dir().unwrap_or_else(|| {
        let mut home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        home.push(".config");
        home
    });
    base.join("aafl-federation").join("config.toml")
}

/// Explicit path, then `AAFL_CONFIG`, then the default location.
pub fn resolve_config_path(explicit: Option<&Path>) -> PathBuf {
    if let Some(path) = explicit {
        return path.to_path_buf();
    }
    match std::env::var(CONFIG_ENV_VAR) {
        Ok(p) if !p.trim().is_empty() => PathBuf::from(p),
        _ => default_config_path(),
    }
}
