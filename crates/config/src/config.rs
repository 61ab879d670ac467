//! Core configuration struct and loading logic.
//!
//! This module provides the main [`Config`] struct which aggregates the
//! server and loader settings of kbw.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::env::apply_env_overrides;
use crate::error::{ConfigError, Result};
use crate::loader::LoaderConfig;
use crate::persistence::{find_config_file, read_config_file, write_config_file};
use crate::server::ServerConfig;

/// The main configuration struct for kbw.
///
/// # Examples
///
/// ```
/// use kbw_config::{Config, ServerConfig};
///
/// let config = Config {
///     server: ServerConfig {
///         bind: "0.0.0.0:8080".to_string(),
///         ..Default::default()
///     },
///     public_origin: Some("https://help.example.com".to_string()),
///     ..Default::default()
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,

    /// Loader settings.
    #[serde(default)]
    pub loader: LoaderConfig,

    /// Origin the widget is publicly served from.
    ///
    /// Used in embed snippets and as the default origin for `fetch`. When
    /// unset, `http://{bind}` is assumed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_origin: Option<String>,
}

impl Config {
    /// Loads configuration from the default file locations, then applies
    /// environment overrides.
    ///
    /// If no configuration file is found, the defaults are used.
    ///
    /// # Errors
    ///
    /// Returns an error if a configuration file is found but cannot be
    /// read or parsed, or if the resulting configuration is invalid.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use kbw_config::Config;
    ///
    /// # fn example() -> kbw_config::Result<()> {
    /// let config = Config::load()?;
    /// println!("Listening on {}", config.server.bind);
    /// # Ok(())
    /// # }
    /// ```
    pub fn load() -> Result<Self> {
        let mut config = match find_config_file() {
            Some(path) => read_config_file(&path)?,
            None => Self::default(),
        };
        apply_env_overrides(&mut config);
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a specific file, then applies environment
    /// overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if the
    /// resulting configuration is invalid.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let mut config: Config = read_config_file(path)?;
        apply_env_overrides(&mut config);
        config.validate()?;
        Ok(config)
    }

    /// Saves the configuration to a file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<()> {
        write_config_file(path, self)
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns the first invalid setting found.
    pub fn validate(&self) -> Result<()> {
        self.server.validate()?;
        self.loader.validate()?;

        if let Some(origin) = &self.public_origin {
            if !(origin.starts_with("http://") || origin.starts_with("https://")) {
                return Err(ConfigError::InvalidPublicOrigin(origin.clone()));
            }
        }

        Ok(())
    }

    /// Returns the origin widgets are served from.
    ///
    /// Falls back to `http://{bind}` when no public origin is configured.
    /// Trailing slashes are removed.
    ///
    /// # Examples
    ///
    /// ```
    /// use kbw_config::Config;
    ///
    /// let config = Config::default();
    /// assert_eq!(config.origin(), "http://127.0.0.1:8787");
    /// ```
    #[must_use]
    pub fn origin(&self) -> String {
        match &self.public_origin {
            Some(origin) => origin.trim_end_matches('/').to_string(),
            None => format!("http://{}", self.server.bind),
        }
    }
}
