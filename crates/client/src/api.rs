//! Traits the widget depends on for network access.
//!
//! The widget controller and the loader only see these traits, so tests can
//! substitute scripted implementations and the HTTP client stays swappable.

use async_trait::async_trait;
use kbw_protocol::{Article, Category, KnowledgeBase};
use reqwest::Url;

use crate::error::Result;

/// The four read operations of the widget API.
///
/// Every call is a fresh request: implementations must not cache.
#[async_trait]
pub trait WidgetApi: Send + Sync {
    /// Fetches a knowledge base with its category summaries.
    async fn fetch_knowledge_base(&self, id: &str) -> Result<KnowledgeBase>;

    /// Fetches the categories of a knowledge base.
    async fn fetch_categories(&self, knowledge_base_id: &str) -> Result<Vec<Category>>;

    /// Fetches the articles of a category.
    async fn fetch_articles(&self, category_id: &str) -> Result<Vec<Article>>;

    /// Fetches a single article with its content.
    async fn fetch_article(&self, id: &str) -> Result<Article>;
}

/// A resource the loader injects into the host page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Asset {
    /// The widget stylesheet.
    Stylesheet,
    /// The widget bundle.
    Script,
}

impl Asset {
    /// Returns the human name of the asset, as used in error messages.
    #[must_use]
    pub const fn resource_name(self) -> &'static str {
        match self {
            Self::Stylesheet => "stylesheet",
            Self::Script => "widget script",
        }
    }
}

/// Loads widget resources for the loader.
#[async_trait]
pub trait AssetLoader: Send + Sync {
    /// Loads the asset at `url`, succeeding only once it is fully available.
    async fn load_asset(&self, url: &Url, asset: Asset) -> Result<()>;
}
