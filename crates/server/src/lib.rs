//! Read API server for kbw.
//!
//! This crate serves what embedded widgets talk to: the four read endpoints,
//! the public article pages the widget links to, and the stylesheet.
//!
//! # Overview
//!
//! The crate is organized into the following modules:
//!
//! - [`store`]: Validated in-memory content loaded from JSON
//! - [`routes`]: The axum router and its handlers
//! - [`page`]: Server-rendered article pages
//! - [`error`]: Error types for content loading
//!
//! # Example
//!
//! ```no_run
//! use kbw_server::{ContentStore, build_router, serve};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let router = build_router(ContentStore::demo(), None);
//! let listener = tokio::net::TcpListener::bind("127.0.0.1:8787").await?;
//! serve(listener, router, std::future::pending()).await?;
//! # Ok(())
//! # }
//! ```

use std::future::Future;

use axum::Router;
use tokio::net::TcpListener;
use tracing::info;

pub mod error;
pub mod page;
pub mod routes;
pub mod store;

pub use error::{Result, StoreError};
pub use routes::build_router;
pub use store::ContentStore;

/// Serves `router` on `listener` until `shutdown` resolves.
///
/// # Errors
///
/// Returns an error if the listener fails.
pub async fn serve<F>(listener: TcpListener, router: Router, shutdown: F) -> std::io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    info!(addr = %listener.local_addr()?, "serving read API");
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown)
        .await
}
