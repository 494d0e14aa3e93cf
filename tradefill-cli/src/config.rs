//! CLI configuration.
//!
//! Loaded from an optional TOML file. Every field has a default, so a file
//! only needs the keys it changes. A file may name a `base_config` (path
//! relative to the file) that is loaded first; keys in the file override
//! keys in its base, table by table. Command-line flags override both.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;
use toml::{Table, Value};

const BASE_CONFIG_KEY: &str = "base_config";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("`{BASE_CONFIG_KEY}` in {0} must be a string path")]
    BaseConfigNotPath(PathBuf),

    #[error("config {0} includes itself through `{BASE_CONFIG_KEY}`")]
    Cycle(PathBuf),

    #[error("invalid config: {0}")]
    Invalid(#[from] toml::de::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Csv,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// Filter directive, e.g. `info` or `tradefill_core=debug`.
    pub level: String,
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            format: LogFormat::Pretty,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    pub format: OutputFormat,
    /// Decimal places for prices in CSV output.
    pub price_decimals: usize,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Csv,
            price_decimals: 6,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    pub logging: LoggingConfig,
    pub output: OutputConfig,
}

impl CliConfig {
    /// Load a config file, resolving its `base_config` chain.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let mut visited = HashSet::new();
        let table = load_layered(path, &mut visited)?;
        Ok(Value::Table(table).try_into()?)
    }

    /// Parse a config from a TOML string. A `base_config` is resolved
    /// relative to the current directory.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let here = PathBuf::from("<string>");
        let mut table: Table = toml::from_str(content).map_err(|source| ConfigError::Parse {
            path: here.clone(),
            source,
        })?;
        if let Some(base) = take_base_config(&mut table, &here)? {
            let mut visited = HashSet::new();
            let mut merged = load_layered(&base, &mut visited)?;
            merge_tables(&mut merged, table);
            table = merged;
        }
        Ok(Value::Table(table).try_into()?)
    }
}

/// Read `path` and everything beneath it, later layers winning.
fn load_layered(path: &Path, visited: &mut HashSet<PathBuf>) -> Result<Table, ConfigError> {
    let canonical = path.canonicalize().map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    if !visited.insert(canonical.clone()) {
        return Err(ConfigError::Cycle(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(&canonical).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let mut table: Table = toml::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    match take_base_config(&mut table, path)? {
        Some(base) => {
            let base = match canonical.parent() {
                Some(dir) if base.is_relative() => dir.join(base),
                _ => base,
            };
            let mut merged = load_layered(&base, visited)?;
            merge_tables(&mut merged, table);
            Ok(merged)
        }
        None => Ok(table),
    }
}

fn take_base_config(table: &mut Table, path: &Path) -> Result<Option<PathBuf>, ConfigError> {
    match table.remove(BASE_CONFIG_KEY) {
        None => Ok(None),
        Some(Value::String(base)) => Ok(Some(PathBuf::from(base))),
        Some(_) => Err(ConfigError::BaseConfigNotPath(path.to_path_buf())),
    }
}

/// Recursively overlay `overlay` onto `base`. Nested tables merge key by
/// key; any other value replaces what was there.
fn merge_tables(base: &mut Table, overlay: Table) {
    for (key, value) in overlay {
        match (base.get_mut(&key), value) {
            (Some(Value::Table(existing)), Value::Table(incoming)) => {
                merge_tables(existing, incoming)
            }
            (_, value) => {
                base.insert(key, value);
            }
        }
    }
}
