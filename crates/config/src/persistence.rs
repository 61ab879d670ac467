//! Configuration file discovery, reading and writing.
//!
//! Files may be JSON5 (comments, unquoted keys, trailing commas) or plain
//! JSON; both are read with the JSON5 parser. Files are always written as
//! pretty-printed JSON, which is valid JSON5.
//!
//! # File Locations
//!
//! Configuration is searched in the following order:
//!
//! 1. Working directory: `./kbw.json5`, then `./kbw.json`
//! 2. User config directory: `~/.config/kbw/config.json5`, then `config.json`

use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};

/// Local configuration file names, in priority order.
const LOCAL_FILE_NAMES: &[&str] = &["kbw.json5", "kbw.json"];

/// Name of the application directory under the user config directory.
const USER_CONFIG_DIR: &str = "kbw";

/// User configuration file names, in priority order.
const USER_FILE_NAMES: &[&str] = &["config.json5", "config.json"];

/// Finds the configuration file in the default locations.
///
/// # Examples
///
/// ```no_run
/// use kbw_config::persistence::find_config_file;
///
/// if let Some(path) = find_config_file() {
///     println!("Using config at {}", path.display());
/// }
/// ```
#[must_use]
pub fn find_config_file() -> Option<PathBuf> {
    let user_dir = dirs::config_dir().map(|d| d.join(USER_CONFIG_DIR));
    find_config_file_in(Path::new("."), user_dir.as_deref())
}

/// Finds the configuration file given an explicit working directory and
/// user configuration directory.
///
/// Local files win over user files; within each location JSON5 wins over
/// JSON.
#[must_use]
pub fn find_config_file_in(working_dir: &Path, user_dir: Option<&Path>) -> Option<PathBuf> {
    let local = LOCAL_FILE_NAMES.iter().map(|name| working_dir.join(name));
    let user = user_dir
        .into_iter()
        .flat_map(|dir| USER_FILE_NAMES.iter().map(move |name| dir.join(name)));

    local.chain(user).find(|path| path.is_file())
}

/// Returns the user configuration directory (`~/.config/kbw/` on Linux).
///
/// # Errors
///
/// Returns [`ConfigError::NoHomeDirectory`] if the platform config
/// directory cannot be determined.
pub fn user_config_dir() -> Result<PathBuf> {
    dirs::config_dir()
        .map(|d| d.join(USER_CONFIG_DIR))
        .ok_or(ConfigError::NoHomeDirectory)
}

/// Returns the default path used when saving user configuration.
///
/// # Errors
///
/// Returns [`ConfigError::NoHomeDirectory`] if the platform config
/// directory cannot be determined.
pub fn default_user_config_path() -> Result<PathBuf> {
    Ok(user_config_dir()?.join(USER_FILE_NAMES[0]))
}

/// Reads and parses a JSON5 or JSON file.
///
/// # Errors
///
/// Returns [`ConfigError::ReadFile`] if the file cannot be read and
/// [`ConfigError::ParseJson5`] if its content does not parse into `T`.
///
/// # Examples
///
/// ```no_run
/// use kbw_config::Config;
/// use kbw_config::persistence::read_config_file;
///
/// # fn main() -> kbw_config::Result<()> {
/// let config: Config = read_config_file("kbw.json5")?;
/// # Ok(())
/// # }
/// ```
pub fn read_config_file<T: serde::de::DeserializeOwned>(path: impl AsRef<Path>) -> Result<T> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json5::from_str(&content).map_err(ConfigError::from)
}

/// Writes a value as pretty-printed JSON, creating parent directories.
///
/// # Errors
///
/// Returns [`ConfigError::SerializeJson`] if the value cannot be serialized
/// and [`ConfigError::WriteFile`] if the directories or file cannot be
/// written.
pub fn write_config_file<T: serde::Serialize>(path: impl AsRef<Path>, value: &T) -> Result<()> {
    let path = path.as_ref();
    let write_error = |source| ConfigError::WriteFile {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(write_error)?;
    }

    let content = serde_json::to_string_pretty(value)?;
    std::fs::write(path, content).map_err(write_error)
}
