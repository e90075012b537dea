//! Calculator configuration domain models.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::Deserialize;

use super::operator::Value;

/// Configuration loaded from `config.toml`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CalcConfig {
    /// Interactive loop settings.
    #[serde(default)]
    pub repl: ReplSettings,
    /// Logging settings.
    #[serde(default)]
    pub log: LogSettings,
    /// Symbols defined before the first line is read.
    #[serde(default)]
    pub symbols: BTreeMap<String, Value>,
}

/// Interactive loop settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReplSettings {
    /// Label shown before the input field.
    #[serde(default = "default_prompt")]
    pub prompt: String,
    /// Maximum number of history entries kept.
    #[serde(default = "default_history_size")]
    pub history_size: usize,
    /// History file location; defaults under the home directory.
    #[serde(default)]
    pub history_file: Option<PathBuf>,
    /// Whether history survives between sessions.
    #[serde(default = "default_true")]
    pub persist_history: bool,
}

impl Default for ReplSettings {
    fn default() -> Self {
        Self {
            prompt: default_prompt(),
            history_size: default_history_size(),
            history_file: None,
            persist_history: default_true(),
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LogSettings {
    /// Filter directive used when `RUST_LOG` is unset.
    #[serde(default = "default_level")]
    pub level: String,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self { level: default_level() }
    }
}

fn default_prompt() -> String {
    "calc".to_string()
}

fn default_history_size() -> usize {
    500
}

fn default_true() -> bool {
    true
}

fn default_level() -> String {
    "warn".to_string()
}
