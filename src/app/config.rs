//! Configuration loading and path resolution.

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::{AppError, CalcConfig, ReplSettings};

/// Directory under `$HOME` holding the config file and history.
pub const CONFIG_DIR_NAME: &str = ".desktop-calculator";
const CONFIG_FILE_NAME: &str = "config.toml";
const HISTORY_FILE_NAME: &str = "history";

/// Default config file location for `home`.
pub fn default_config_path(home: &Path) -> PathBuf {
    home.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME)
}

/// Find the config file to read.
///
/// An explicit path must exist. Without one, the file under `home` is used
/// when present. `None` means defaults apply.
pub fn resolve_config_path(
    explicit: Option<&Path>,
    home: Option<&Path>,
) -> Result<Option<PathBuf>, AppError> {
    match (explicit, home) {
        (Some(path), _) => {
            if !path.exists() {
                return Err(AppError::config_error(format!(
                    "Config file not found: {}",
                    path.display()
                )));
            }
            Ok(Some(path.to_path_buf()))
        }
        (None, Some(home)) => {
            let path = default_config_path(home);
            Ok(path.exists().then_some(path))
        }
        (None, None) => Ok(None),
    }
}

/// Read the config at `path`, or the defaults when there is none.
pub fn read_config(path: Option<&Path>) -> Result<CalcConfig, AppError> {
    match path {
        Some(path) => parse_config_content(&fs::read_to_string(path)?),
        None => Ok(CalcConfig::default()),
    }
}

/// Load configuration: [`resolve_config_path`] followed by [`read_config`].
pub fn load_config(explicit: Option<&Path>, home: Option<&Path>) -> Result<CalcConfig, AppError> {
    let path = resolve_config_path(explicit, home)?;
    read_config(path.as_deref())
}

/// Parse configuration from TOML text.
pub fn parse_config_content(content: &str) -> Result<CalcConfig, AppError> {
    Ok(toml::from_str(content)?)
}

/// Where history is persisted, if anywhere.
pub fn resolve_history_path(repl: &ReplSettings, home: Option<&Path>) -> Option<PathBuf> {
    if !repl.persist_history {
        return None;
    }
    repl.history_file
        .clone()
        .or_else(|| home.map(|home| home.join(CONFIG_DIR_NAME).join(HISTORY_FILE_NAME)))
}
