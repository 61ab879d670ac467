//! Settings for the widget read API server.
//!
//! The server binds a socket, loads its content from a JSON file and may
//! serve the widget bundle and loader script from a static directory.

use std::net::SocketAddr;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Default bind address of the server.
pub const DEFAULT_BIND: &str = "127.0.0.1:8787";

/// Configuration of the HTTP server.
///
/// # Examples
///
/// ```
/// use kbw_config::ServerConfig;
///
/// let config = ServerConfig::default();
/// assert_eq!(config.bind, "127.0.0.1:8787");
/// assert!(config.content_path.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Socket address to listen on.
    #[serde(default = "default_bind")]
    pub bind: String,

    /// JSON content file holding knowledge bases, categories and articles.
    ///
    /// When unset the server serves the built-in demo content.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_path: Option<PathBuf>,

    /// Directory served as static files (widget bundle, loader script).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assets_dir: Option<PathBuf>,
}

fn default_bind() -> String {
    DEFAULT_BIND.to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            content_path: None,
            assets_dir: None,
        }
    }
}

impl ServerConfig {
    /// Parses the bind address.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBindAddress`] if `bind` is not a socket
    /// address such as `0.0.0.0:8080`.
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        self.bind
            .parse()
            .map_err(|_| ConfigError::InvalidBindAddress(self.bind.clone()))
    }

    /// Validates the server settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the bind address does not parse.
    pub fn validate(&self) -> Result<()> {
        self.socket_addr().map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_bind_parses() {
        let addr = ServerConfig::default().socket_addr().unwrap();
        assert_eq!(addr.port(), 8787);
    }

    #[test]
    fn hostname_bind_is_rejected() {
        let config = ServerConfig {
            bind: "localhost:8787".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidBindAddress(ref s)) if s == "localhost:8787"
        ));
    }

    #[test]
    fn deserialize_partial() {
        let config: ServerConfig =
            serde_json::from_str(r#"{"content_path": "content.json"}"#).unwrap();
        assert_eq!(config.bind, DEFAULT_BIND);
        assert_eq!(config.content_path, Some(PathBuf::from("content.json")));
        assert!(config.assets_dir.is_none());
    }
}
