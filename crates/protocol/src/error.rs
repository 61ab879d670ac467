//! Error types for the kbw-protocol crate.

use thiserror::Error;

/// Errors that can occur during protocol operations.
#[derive(Debug, Error)]
pub enum ProtocolError {
    /// A required placeholder attribute is missing or blank.
    #[error("missing required attribute `{name}`")]
    MissingAttribute {
        /// Name of the attribute.
        name: &'static str,
    },
}

/// A specialized Result type for protocol operations.
pub type Result<T> = std::result::Result<T, ProtocolError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_messages() {
        let err = ProtocolError::MissingAttribute {
            name: "data-knowledge-base",
        };
        assert_eq!(
            err.to_string(),
            "missing required attribute `data-knowledge-base`"
        );
    }
}
