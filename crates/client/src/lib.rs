//! Read API client for kbw.
//!
//! This crate provides access to the four public, unauthenticated widget
//! endpoints and to the resources the loader injects into a host page.
//!
//! # Overview
//!
//! The crate provides:
//!
//! - [`WidgetApi`]: The read operations the widget controller depends on
//! - [`AssetLoader`] and [`Asset`]: Loading of the stylesheet and bundle
//! - [`HttpApiClient`]: The reqwest-backed implementation of both traits
//! - [`Error`]: Error types for read API operations
//!
//! # Failure model
//!
//! Every failure is reported as "failed to load X". There is no caching
//! and no retry; callers render an error placeholder and move on.
//!
//! # Examples
//!
//! ```no_run
//! use kbw_client::{HttpApiClient, WidgetApi};
//!
//! # async fn example() -> kbw_client::Result<()> {
//! let client = HttpApiClient::new("https://kb.example.com")?;
//!
//! let articles = client.fetch_articles("cat-1").await?;
//! for article in &articles {
//!     println!("{}", article.title);
//! }
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod client;
pub mod error;

pub use api::{Asset, AssetLoader, WidgetApi};
pub use client::HttpApiClient;
pub use error::{Error, Result};
pub use reqwest::Url;
