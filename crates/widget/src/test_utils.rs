//! Test utilities for the widget crate.
//!
//! [`MockApi`] serves the demo content from memory. Individual requests can
//! be made to fail or to wait on a gate, which lets tests control the order
//! in which concurrent fetches resolve.

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use kbw_client::{Asset, AssetLoader, Error, Result, Url, WidgetApi};
use kbw_protocol::dummy::{dummy_articles, dummy_knowledge_base};
use kbw_protocol::{Article, Category, KnowledgeBase};
use tokio::sync::Notify;

/// In-memory read API.
///
/// Requests are keyed as `kb:{id}`, `categories:{id}`, `articles:{id}` and
/// `article:{id}`.
#[derive(Debug, Default)]
pub(crate) struct MockApi {
    knowledge_bases: Vec<KnowledgeBase>,
    articles: Vec<Article>,
    failing: HashSet<String>,
    gates: HashMap<String, Arc<Notify>>,
    calls: Mutex<Vec<String>>,
}

impl MockApi {
    /// Serves the demo knowledge base and articles.
    pub(crate) fn demo() -> Self {
        Self {
            knowledge_bases: vec![dummy_knowledge_base()],
            articles: dummy_articles(),
            ..Self::default()
        }
    }

    /// Serves a single knowledge base with no articles.
    pub(crate) fn with_knowledge_base(knowledge_base: KnowledgeBase) -> Self {
        Self {
            knowledge_bases: vec![knowledge_base],
            ..Self::default()
        }
    }

    /// Makes the request with `key` fail.
    pub(crate) fn failing(mut self, key: &str) -> Self {
        self.failing.insert(key.to_string());
        self
    }

    /// Makes the request with `key` wait until the returned gate is
    /// notified.
    pub(crate) fn gate(&mut self, key: &str) -> Arc<Notify> {
        Arc::clone(self.gates.entry(key.to_string()).or_default())
    }

    /// Returns the keys of all requests received so far.
    pub(crate) fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    async fn enter(&self, key: String, resource: &'static str) -> Result<()> {
        self.calls.lock().unwrap().push(key.clone());
        if let Some(gate) = self.gates.get(&key) {
            gate.notified().await;
        }
        if self.failing.contains(&key) {
            return Err(Error::load(resource, "HTTP 500"));
        }
        Ok(())
    }
}

#[async_trait]
impl WidgetApi for MockApi {
    async fn fetch_knowledge_base(&self, id: &str) -> Result<KnowledgeBase> {
        self.enter(format!("kb:{id}"), "knowledge base").await?;
        self.knowledge_bases
            .iter()
            .find(|kb| kb.id == id)
            .cloned()
            .ok_or_else(|| Error::load("knowledge base", "HTTP 404"))
    }

    async fn fetch_categories(&self, knowledge_base_id: &str) -> Result<Vec<Category>> {
        self.enter(format!("categories:{knowledge_base_id}"), "categories")
            .await?;
        self.knowledge_bases
            .iter()
            .find(|kb| kb.id == knowledge_base_id)
            .map(|kb| kb.categories.clone())
            .ok_or_else(|| Error::load("categories", "HTTP 404"))
    }

    async fn fetch_articles(&self, category_id: &str) -> Result<Vec<Article>> {
        self.enter(format!("articles:{category_id}"), "articles")
            .await?;
        Ok(self
            .articles
            .iter()
            .filter(|a| a.category_id == category_id)
            .cloned()
            .collect())
    }

    async fn fetch_article(&self, id: &str) -> Result<Article> {
        self.enter(format!("article:{id}"), "article").await?;
        self.articles
            .iter()
            .find(|a| a.id == id)
            .cloned()
            .ok_or_else(|| Error::load("article", "HTTP 404"))
    }
}

/// Asset loader that fails for the listed assets and records every load.
#[derive(Debug, Default)]
pub(crate) struct MockAssets {
    failing: HashSet<Asset>,
    loaded: Mutex<Vec<String>>,
}

impl MockAssets {
    pub(crate) fn failing(asset: Asset) -> Self {
        Self {
            failing: HashSet::from([asset]),
            ..Self::default()
        }
    }

    pub(crate) fn loaded(&self) -> Vec<String> {
        self.loaded.lock().unwrap().clone()
    }
}

#[async_trait]
impl AssetLoader for MockAssets {
    async fn load_asset(&self, url: &Url, asset: Asset) -> Result<()> {
        self.loaded.lock().unwrap().push(url.to_string());
        if self.failing.contains(&asset) {
            return Err(Error::load(asset.resource_name(), "HTTP 404"));
        }
        Ok(())
    }
}
