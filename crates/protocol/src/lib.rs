//! Shared protocol types for the kbw application.
//!
//! This crate defines the types exchanged between the widget, the API
//! client and the read API server: the knowledge base entities, the widget
//! configuration parsed from a host placeholder, the widget messages, and the
//! endpoint paths of the read API.
//!
//! # Overview
//!
//! The crate is organized into the following modules:
//!
//! - [`knowledge`]: `KnowledgeBase`, `Category` and `Article`
//! - [`widget_config`]: Placeholder attributes, `Theme` and `WidgetConfig`
//! - [`message`]: Widget messages produced from host events
//! - [`endpoint`]: Read API paths
//! - [`dummy`]: Demo content for previews and tests
//! - [`error`]: Error types for protocol operations
//!
//! # Examples
//!
//! Parsing a widget configuration from placeholder attributes:
//!
//! ```
//! use kbw_protocol::{Theme, WidgetConfig, attr};
//!
//! let config = WidgetConfig::from_attributes("https://kb.example.com", |name| match name {
//!     attr::KNOWLEDGE_BASE => Some("kb-1".to_string()),
//!     attr::THEME => Some("dark".to_string()),
//!     _ => None,
//! })
//! .unwrap();
//!
//! assert_eq!(config.knowledge_base_id, "kb-1");
//! assert_eq!(config.theme, Theme::Dark);
//! ```

pub mod dummy;
pub mod endpoint;
pub mod error;
pub mod knowledge;
pub mod message;
pub mod widget_config;

// Re-export primary types at crate root for convenience
pub use endpoint::{API_PREFIX, Endpoint};
pub use error::{ProtocolError, Result};
pub use knowledge::{Article, Category, KnowledgeBase};
pub use message::Message;
pub use widget_config::{Theme, WidgetConfig, attr};
