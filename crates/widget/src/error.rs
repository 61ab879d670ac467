//! Error types for widget construction and loading.

use kbw_protocol::ProtocolError;

/// Errors that can occur while mounting widgets.
///
/// Fetch failures are not errors at this level: the controller reports
/// them in the widget body and keeps running.
#[derive(Debug, thiserror::Error)]
pub enum WidgetError {
    /// The placeholder lacks required configuration.
    #[error("invalid widget configuration: {0}")]
    Config(#[from] ProtocolError),

    /// The placeholder selector is not valid CSS.
    #[error("invalid placeholder selector `{0}`")]
    InvalidSelector(String),

    /// The host page or resource URL is not a valid URL.
    #[error("invalid URL `{url}`: {reason}")]
    InvalidUrl {
        /// The rejected URL.
        url: String,
        /// Why it was rejected.
        reason: String,
    },
}

/// A specialized Result type for widget operations.
pub type Result<T> = std::result::Result<T, WidgetError>;
