//! In-memory content store behind the read API.
//!
//! Content is loaded once from a JSON file with one table per entity:
//!
//! ```json
//! {
//!   "knowledge_bases": [{ "id": "kb-1", "name": "Docs" }],
//!   "categories": [
//!     { "id": "cat-1", "knowledge_base_id": "kb-1", "title": "Setup", "order_index": 1 }
//!   ],
//!   "articles": [
//!     {
//!       "id": "art-1",
//!       "category_id": "cat-1",
//!       "title": "Install",
//!       "content": "<p>Run the installer.</p>",
//!       "created_at": "2024-03-01T09:00:00Z"
//!     }
//!   ]
//! }
//! ```
//!
//! Loading rejects duplicate ids and dangling references, so every lookup
//! afterwards is consistent.

use std::collections::BTreeMap;
use std::path::Path;

use chrono::{DateTime, Utc};
use kbw_protocol::dummy::{dummy_articles, dummy_knowledge_base};
use kbw_protocol::{Article, Category, KnowledgeBase};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{Result, StoreError};

/// An article as stored, with its creation time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleRecord {
    #[serde(flatten)]
    pub article: Article,
    pub created_at: DateTime<Utc>,
}

/// The on-disk layout of a content file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentFile {
    #[serde(default)]
    pub knowledge_bases: Vec<KnowledgeBase>,
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub articles: Vec<ArticleRecord>,
}

/// Validated, read-only content.
#[derive(Debug, Clone, Default)]
pub struct ContentStore {
    knowledge_bases: BTreeMap<String, KnowledgeBase>,
    categories: BTreeMap<String, Category>,
    articles: BTreeMap<String, ArticleRecord>,
}

impl ContentStore {
    /// Validates and indexes the tables of a content file.
    ///
    /// Categories nested inside a knowledge base record are ignored; the
    /// `categories` table is authoritative.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::DuplicateId`] if two records of one table
    /// share an id, and [`StoreError::UnknownKnowledgeBase`] or
    /// [`StoreError::UnknownCategory`] for a dangling reference.
    pub fn from_content(content: ContentFile) -> Result<Self> {
        let mut store = Self::default();

        for mut knowledge_base in content.knowledge_bases {
            knowledge_base.categories.clear();
            let id = knowledge_base.id.clone();
            if store.knowledge_bases.insert(id.clone(), knowledge_base).is_some() {
                return Err(StoreError::DuplicateId {
                    kind: "knowledge base",
                    id,
                });
            }
        }

        for category in content.categories {
            if !store
                .knowledge_bases
                .contains_key(&category.knowledge_base_id)
            {
                return Err(StoreError::UnknownKnowledgeBase {
                    category: category.id,
                    knowledge_base: category.knowledge_base_id,
                });
            }
            let id = category.id.clone();
            if store.categories.insert(id.clone(), category).is_some() {
                return Err(StoreError::DuplicateId {
                    kind: "category",
                    id,
                });
            }
        }

        for record in content.articles {
            if !store.categories.contains_key(&record.article.category_id) {
                return Err(StoreError::UnknownCategory {
                    article: record.article.id,
                    category: record.article.category_id,
                });
            }
            let id = record.article.id.clone();
            if store.articles.insert(id.clone(), record).is_some() {
                return Err(StoreError::DuplicateId { kind: "article", id });
            }
        }

        Ok(store)
    }

    /// Parses and validates a JSON content document.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Parse`] for malformed JSON, otherwise see
    /// [`ContentStore::from_content`].
    pub fn from_json(json: &str) -> Result<Self> {
        Self::from_content(serde_json::from_str(json)?)
    }

    /// Loads a content file.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::ReadFile`] if the file cannot be read, otherwise
    /// see [`ContentStore::from_json`].
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path).map_err(|source| StoreError::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;
        let store = Self::from_json(&json)?;
        info!(
            path = %path.display(),
            knowledge_bases = store.knowledge_bases.len(),
            categories = store.categories.len(),
            articles = store.articles.len(),
            "content loaded"
        );
        Ok(store)
    }

    /// Builds a store from the demo content.
    ///
    /// Demo articles are dated one day apart in listing order, the first
    /// one oldest.
    #[must_use]
    pub fn demo() -> Self {
        let mut knowledge_base = dummy_knowledge_base();
        let categories = std::mem::take(&mut knowledge_base.categories);

        Self {
            categories: categories
                .into_iter()
                .map(|category| (category.id.clone(), category))
                .collect(),
            articles: dummy_articles()
                .into_iter()
                .zip(0_i64..)
                .map(|(article, day)| {
                    let created_at = DateTime::from_timestamp(1_704_067_200 + day * 86_400, 0)
                        .unwrap_or_default();
                    (article.id.clone(), ArticleRecord { article, created_at })
                })
                .collect(),
            knowledge_bases: BTreeMap::from([(knowledge_base.id.clone(), knowledge_base)]),
        }
    }

    /// Returns a knowledge base with its categories in display order.
    #[must_use]
    pub fn knowledge_base(&self, id: &str) -> Option<KnowledgeBase> {
        let mut knowledge_base = self.knowledge_bases.get(id)?.clone();
        knowledge_base.categories = self.categories_of(id);
        Some(knowledge_base)
    }

    /// Returns the categories of a knowledge base in display order, or
    /// `None` if the knowledge base does not exist.
    #[must_use]
    pub fn categories(&self, knowledge_base_id: &str) -> Option<Vec<Category>> {
        self.knowledge_bases
            .contains_key(knowledge_base_id)
            .then(|| self.categories_of(knowledge_base_id))
    }

    /// Returns the articles of a category, newest first, or `None` if the
    /// category does not exist.
    #[must_use]
    pub fn articles(&self, category_id: &str) -> Option<Vec<Article>> {
        if !self.categories.contains_key(category_id) {
            return None;
        }
        let mut records: Vec<&ArticleRecord> = self
            .articles
            .values()
            .filter(|record| record.article.category_id == category_id)
            .collect();
        records.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Some(records.into_iter().map(|r| r.article.clone()).collect())
    }

    #[must_use]
    pub fn article(&self, id: &str) -> Option<Article> {
        self.articles.get(id).map(|record| record.article.clone())
    }

    fn categories_of(&self, knowledge_base_id: &str) -> Vec<Category> {
        let mut categories: Vec<Category> = self
            .categories
            .values()
            .filter(|c| c.knowledge_base_id == knowledge_base_id)
            .cloned()
            .collect();
        categories.sort_by_key(|c| c.order_index);
        categories
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const CONTENT: &str = r#"{
        "knowledge_bases": [{ "id": "kb-1", "name": "Docs" }],
        "categories": [
            { "id": "cat-b", "knowledge_base_id": "kb-1", "title": "Usage", "order_index": 2 },
            { "id": "cat-a", "knowledge_base_id": "kb-1", "title": "Setup", "order_index": 1 }
        ],
        "articles": [
            { "id": "art-old", "category_id": "cat-a", "title": "Old", "created_at": "2024-01-01T00:00:00Z" },
            { "id": "art-new", "category_id": "cat-a", "title": "New", "created_at": "2024-06-01T00:00:00Z" },
            { "id": "art-mid", "category_id": "cat-a", "title": "Mid", "created_at": "2024-03-01T00:00:00Z" }
        ]
    }"#;

    #[test]
    fn knowledge_base_lists_categories_by_order() {
        let store = ContentStore::from_json(CONTENT).unwrap();
        let kb = store.knowledge_base("kb-1").unwrap();
        let ids: Vec<&str> = kb.categories.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, ["cat-a", "cat-b"]);
    }

    #[test]
    fn articles_are_newest_first() {
        let store = ContentStore::from_json(CONTENT).unwrap();
        let articles = store.articles("cat-a").unwrap();
        let ids: Vec<&str> = articles.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, ["art-new", "art-mid", "art-old"]);
    }

    #[test]
    fn empty_category_has_no_articles() {
        let store = ContentStore::from_json(CONTENT).unwrap();
        assert_eq!(store.articles("cat-b"), Some(Vec::new()));
    }

    #[test]
    fn unknown_ids_return_none() {
        let store = ContentStore::from_json(CONTENT).unwrap();
        assert!(store.knowledge_base("nope").is_none());
        assert!(store.categories("nope").is_none());
        assert!(store.articles("nope").is_none());
        assert!(store.article("nope").is_none());
    }

    #[test]
    fn dangling_category_reference_is_rejected() {
        let json = r#"{
            "categories": [{ "id": "cat-1", "knowledge_base_id": "kb-x", "title": "T" }]
        }"#;
        let err = ContentStore::from_json(json).unwrap_err();
        assert!(matches!(
            err,
            StoreError::UnknownKnowledgeBase { ref knowledge_base, .. } if knowledge_base == "kb-x"
        ));
    }

    #[test]
    fn dangling_article_reference_is_rejected() {
        let json = r#"{
            "knowledge_bases": [{ "id": "kb-1", "name": "Docs" }],
            "articles": [{ "id": "a", "category_id": "cat-x", "title": "A", "created_at": "2024-01-01T00:00:00Z" }]
        }"#;
        let err = ContentStore::from_json(json).unwrap_err();
        assert!(matches!(err, StoreError::UnknownCategory { .. }));
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let json = r#"{
            "knowledge_bases": [{ "id": "kb-1", "name": "A" }, { "id": "kb-1", "name": "B" }]
        }"#;
        let err = ContentStore::from_json(json).unwrap_err();
        assert_eq!(err.to_string(), "duplicate knowledge base id `kb-1`");
    }

    #[test]
    fn missing_created_at_is_a_parse_error() {
        let json = r#"{
            "knowledge_bases": [{ "id": "kb-1", "name": "Docs" }],
            "categories": [{ "id": "cat-1", "knowledge_base_id": "kb-1", "title": "T" }],
            "articles": [{ "id": "a", "category_id": "cat-1", "title": "A" }]
        }"#;
        assert!(matches!(
            ContentStore::from_json(json),
            Err(StoreError::Parse(_))
        ));
    }

    #[test]
    fn load_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(CONTENT.as_bytes()).unwrap();

        let store = ContentStore::load(file.path()).unwrap();
        assert_eq!(store.article("art-mid").unwrap().title, "Mid");
    }

    #[test]
    fn load_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let err = ContentStore::load(&dir.path().join("content.json")).unwrap_err();
        assert!(matches!(err, StoreError::ReadFile { .. }));
    }

    #[test]
    fn demo_store_serves_dummy_content() {
        let store = ContentStore::demo();
        let kb = store.knowledge_base("kb-demo").unwrap();
        assert_eq!(kb.categories[0].id, "cat-start");
        assert_eq!(store.articles("cat-empty"), Some(Vec::new()));

        let articles = store.articles("cat-start").unwrap();
        assert_eq!(articles.len(), 2);
        assert_eq!(articles[0].id, "art-invite");
    }
}
