//! Environment variable overrides.
//!
//! Environment variables take precedence over configuration files:
//!
//! | Variable | Setting |
//! |---|---|
//! | `KBW_BIND` | `server.bind` |
//! | `KBW_CONTENT` | `server.content_path` |
//! | `KBW_PUBLIC_ORIGIN` | `public_origin` |
//!
//! Empty values are ignored.

use std::path::PathBuf;

use crate::config::Config;

/// Overrides the server bind address.
pub const BIND_VAR: &str = "KBW_BIND";

/// Overrides the content file path.
pub const CONTENT_VAR: &str = "KBW_CONTENT";

/// Overrides the public origin used in embed snippets and article links.
pub const PUBLIC_ORIGIN_VAR: &str = "KBW_PUBLIC_ORIGIN";

/// Applies overrides from the process environment.
pub fn apply_env_overrides(config: &mut Config) {
    apply_overrides(config, |name| std::env::var(name).ok());
}

/// Applies overrides read through `lookup`.
///
/// Taking the lookup as a closure keeps tests independent of the process
/// environment.
pub fn apply_overrides<F>(config: &mut Config, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    let value = |name| lookup(name).filter(|v: &String| !v.trim().is_empty());

    if let Some(bind) = value(BIND_VAR) {
        config.server.bind = bind;
    }
    if let Some(content) = value(CONTENT_VAR) {
        config.server.content_path = Some(PathBuf::from(content));
    }
    if let Some(origin) = value(PUBLIC_ORIGIN_VAR) {
        config.public_origin = Some(origin);
    }
}
