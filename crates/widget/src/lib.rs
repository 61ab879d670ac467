//! Widget engine for kbw.
//!
//! This crate contains everything a mounted knowledge base widget does, with
//! the host page abstracted behind [`Container`] and the read API behind
//! [`kbw_client::WidgetApi`].
//!
//! # Overview
//!
//! The crate is organized into the following modules:
//!
//! - [`loader`]: Host page parsing, resource loading and mounting
//! - [`controller`]: Per-widget state machine and fetch fencing
//! - [`state`]: View, navigation data, open flag and drag position
//! - [`event`]: Host events and their mapping to messages
//! - [`views`]: Pure rendering of the widget views
//! - [`dom`]: Element tree with escaping serialization
//! - [`sanitize`]: Sanitization of server-provided HTML
//! - [`container`]: The placeholder abstraction and an in-memory element
//! - [`classes`]: CSS class names shared by the views and the stylesheet
//! - [`stylesheet`]: The stylesheet served next to the bundle
//! - [`error`]: Error types for mounting
//!
//! # Example
//!
//! ```no_run
//! use kbw_client::HttpApiClient;
//! use kbw_widget::{HtmlContainer, Loader, Mount, WidgetController};
//!
//! # async fn example(html: &str) -> Result<(), Box<dyn std::error::Error>> {
//! let loader = Loader::default();
//! let page = loader.parse_page(html, "https://shop.example.com/help")?;
//! let resources = loader.resources(&page)?;
//! let client = HttpApiClient::new(resources.origin())?;
//!
//! for mount in loader
//!     .initialize(page, &client, WidgetController::<HtmlContainer>::from_container)
//!     .await
//! {
//!     if let Mount::Ready(mut widget) = mount {
//!         widget.load(&client).await;
//!         println!("{}", widget.container().outer_html());
//!     }
//! }
//! # Ok(())
//! # }
//! ```

pub mod classes;
pub mod container;
pub mod controller;
pub mod dom;
pub mod error;
pub mod event;
pub mod loader;
pub mod sanitize;
pub mod state;
pub mod stylesheet;
pub mod views;

#[cfg(test)]
pub(crate) mod test_utils;

pub use container::{Container, HtmlContainer};
pub use controller::WidgetController;
pub use error::{Result, WidgetError};
pub use event::{HostEvent, event_to_message};
pub use loader::{HostPage, Loader, Mount};
pub use stylesheet::STYLESHEET;
