//! Error types for read API operations.
//!
//! Failures are deliberately undifferentiated: a transport error, a non-2xx
//! status and an undecodable body all surface as [`Error::Load`], whose
//! message only names the resource. The detail is kept for logging.

/// Errors that can occur while talking to the read API.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A resource could not be loaded.
    #[error("failed to load {resource}")]
    Load {
        /// Human name of the resource (e.g. `articles`).
        resource: &'static str,
        /// What went wrong, for logs.
        detail: String,
    },

    /// The base URL could not be parsed or cannot carry paths.
    #[error("invalid base URL `{url}`: {reason}")]
    InvalidBaseUrl {
        /// The rejected URL.
        url: String,
        /// Why it was rejected.
        reason: String,
    },
}

impl Error {
    /// Creates a load error for the named resource.
    pub fn load(resource: &'static str, detail: impl Into<String>) -> Self {
        Self::Load {
            resource,
            detail: detail.into(),
        }
    }
}

/// A specialized Result type for read API operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_load_hides_detail() {
        let err = Error::load("articles", "HTTP 500");
        assert_eq!(err.to_string(), "failed to load articles");
    }

    #[test]
    fn error_display_invalid_base_url() {
        let err = Error::InvalidBaseUrl {
            url: "nope".to_string(),
            reason: "relative URL without a base".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid base URL `nope`: relative URL without a base"
        );
    }
}
