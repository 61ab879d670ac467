//! Configuration management for kbw.
//!
//! This crate handles loading, validating, and persisting configuration
//! from multiple sources (files, environment variables, defaults).
//!
//! # Overview
//!
//! The crate is organized into the following modules:
//!
//! - [`config`]: Core configuration struct and loading logic
//! - [`server`]: Bind address, content file and static assets of the server
//! - [`loader`]: Placeholder selector and resource paths of the loader
//! - [`env`]: Environment variable overrides
//! - [`persistence`]: Config file reading and writing
//! - [`error`]: Error types for configuration operations
//!
//! # Configuration Sources (Priority)
//!
//! Configuration is loaded from multiple sources with the following priority
//! (highest to lowest):
//!
//! 1. Environment variables (`KBW_*`)
//! 2. Local config (`./kbw.json5` or `./kbw.json`)
//! 3. User config (`~/.config/kbw/config.json5` or `~/.config/kbw/config.json`)
//! 4. Built-in defaults
//!
//! # Example File
//!
//! ```json5
//! {
//!   server: {
//!     bind: "0.0.0.0:8787",
//!     content_path: "content.json",
//!     // widget.js and loader.js are served from here
//!     assets_dir: "dist",
//!   },
//!   public_origin: "https://help.example.com",
//! }
//! ```

pub mod config;
pub mod env;
pub mod error;
pub mod loader;
pub mod persistence;
pub mod server;

pub use config::Config;
pub use error::{ConfigError, Result};
pub use loader::LoaderConfig;
pub use server::ServerConfig;
