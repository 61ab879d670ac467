//! Settings for the widget loader.
//!
//! The loader recognizes its own script tag by the `loader_path` suffix,
//! fetches the stylesheet and bundle from sibling paths on the same origin,
//! and mounts a widget on every element matching `selector`.

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Default placeholder selector.
pub const DEFAULT_SELECTOR: &str = "[data-kb-widget]";

/// Default path of the loader script.
pub const DEFAULT_LOADER_PATH: &str = "/loader.js";

/// Default path of the widget stylesheet.
pub const DEFAULT_STYLESHEET_PATH: &str = "/widget.css";

/// Default path of the widget bundle.
pub const DEFAULT_SCRIPT_PATH: &str = "/widget.js";

/// Configuration of the loader.
///
/// # Examples
///
/// ```
/// use kbw_config::LoaderConfig;
///
/// let config = LoaderConfig::default();
/// assert_eq!(config.selector, "[data-kb-widget]");
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoaderConfig {
    /// CSS selector matching placeholder elements.
    #[serde(default = "default_selector")]
    pub selector: String,

    /// Path suffix identifying the loader's own script tag.
    #[serde(default = "default_loader_path")]
    pub loader_path: String,

    /// Path of the stylesheet, relative to the resource origin.
    #[serde(default = "default_stylesheet_path")]
    pub stylesheet_path: String,

    /// Path of the widget bundle, relative to the resource origin.
    #[serde(default = "default_script_path")]
    pub script_path: String,
}

fn default_selector() -> String {
    DEFAULT_SELECTOR.to_string()
}

fn default_loader_path() -> String {
    DEFAULT_LOADER_PATH.to_string()
}

fn default_stylesheet_path() -> String {
    DEFAULT_STYLESHEET_PATH.to_string()
}

fn default_script_path() -> String {
    DEFAULT_SCRIPT_PATH.to_string()
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            selector: default_selector(),
            loader_path: default_loader_path(),
            stylesheet_path: default_stylesheet_path(),
            script_path: default_script_path(),
        }
    }
}

impl LoaderConfig {
    /// Validates the loader settings.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptySelector`] for a blank selector and
    /// [`ConfigError::InvalidResourcePath`] for a path without a leading `/`.
    pub fn validate(&self) -> Result<()> {
        if self.selector.trim().is_empty() {
            return Err(ConfigError::EmptySelector);
        }

        let paths = [
            ("loader_path", &self.loader_path),
            ("stylesheet_path", &self.stylesheet_path),
            ("script_path", &self.script_path),
        ];
        for (field, value) in paths {
            if !value.starts_with('/') {
                return Err(ConfigError::InvalidResourcePath {
                    field,
                    value: value.clone(),
                });
            }
        }

        Ok(())
    }
}
