//! Knowledge base entities served by the read API.
//!
//! The widget is a read-only consumer of these types. Referential integrity
//! (article to category, category to knowledge base) is enforced by whoever
//! serves them; a dangling reference shows up on the widget side as a failed
//! fetch, never as a local consistency error.

use serde::{Deserialize, Serialize};

/// A knowledge base with its category summaries.
///
/// # Examples
///
/// ```
/// use kbw_protocol::{Category, KnowledgeBase};
///
/// let mut kb = KnowledgeBase::new("kb-1", "Help Center");
/// kb.categories.push(Category::new("cat-2", "Billing").with_order(2));
/// kb.categories.push(Category::new("cat-1", "Getting started").with_order(1));
///
/// let titles: Vec<_> = kb.ordered_categories().iter().map(|c| c.title.as_str()).collect();
/// assert_eq!(titles, ["Getting started", "Billing"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnowledgeBase {
    /// Unique identifier.
    pub id: String,
    /// Display name, used as the widget title.
    pub name: String,
    /// Optional free-text description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Category summaries belonging to this knowledge base.
    #[serde(default)]
    pub categories: Vec<Category>,
}

impl KnowledgeBase {
    /// Creates a knowledge base with no description and no categories.
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: None,
            categories: Vec::new(),
        }
    }

    /// Returns the categories sorted by display order.
    ///
    /// The sort is stable, so categories sharing an `order_index` keep the
    /// order in which they were served.
    #[must_use]
    pub fn ordered_categories(&self) -> Vec<&Category> {
        let mut categories: Vec<&Category> = self.categories.iter().collect();
        categories.sort_by_key(|c| c.order_index);
        categories
    }
}

/// A category of articles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Unique identifier.
    pub id: String,
    /// Display title.
    pub title: String,
    /// Optional description; may contain HTML.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// The knowledge base this category belongs to.
    #[serde(default)]
    pub knowledge_base_id: String,
    /// Display order within the knowledge base (ascending).
    #[serde(default)]
    pub order_index: i64,
}

impl Category {
    /// Creates a category with default order and no description.
    #[must_use]
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: None,
            knowledge_base_id: String::new(),
            order_index: 0,
        }
    }

    /// Sets the display order.
    #[must_use]
    pub fn with_order(mut self, order_index: i64) -> Self {
        self.order_index = order_index;
        self
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// An article. `content` is an HTML body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    /// Unique identifier.
    pub id: String,
    /// Display title.
    pub title: String,
    /// Optional summary; may contain HTML.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// HTML body. List endpoints may omit it.
    #[serde(default)]
    pub content: String,
    /// The category this article belongs to.
    #[serde(default)]
    pub category_id: String,
}

impl Article {
    /// Creates an article with the given content and no description.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: None,
            content: content.into(),
            category_id: String::new(),
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the owning category.
    #[must_use]
    pub fn in_category(mut self, category_id: impl Into<String>) -> Self {
        self.category_id = category_id.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn knowledge_base_deserializes_without_optional_fields() {
        let kb: KnowledgeBase = serde_json::from_str(r#"{"id":"kb-1","name":"Docs"}"#).unwrap();
        assert_eq!(kb.id, "kb-1");
        assert!(kb.description.is_none());
        assert!(kb.categories.is_empty());
    }

    #[test]
    fn knowledge_base_deserializes_nested_categories() {
        let json = r#"{
            "id": "kb-1",
            "name": "Docs",
            "description": "All the docs",
            "categories": [
                {"id": "cat-1", "title": "Setup", "order_index": 2},
                {"id": "cat-2", "title": "Usage", "description": "<b>How</b>", "order_index": 1}
            ]
        }"#;
        let kb: KnowledgeBase = serde_json::from_str(json).unwrap();
        assert_eq!(kb.categories.len(), 2);
        assert_eq!(kb.categories[1].description.as_deref(), Some("<b>How</b>"));
        assert_eq!(kb.ordered_categories()[0].id, "cat-2");
    }

    #[test]
    fn ordered_categories_is_stable_for_equal_order() {
        let mut kb = KnowledgeBase::new("kb", "KB");
        kb.categories.push(Category::new("a", "A"));
        kb.categories.push(Category::new("b", "B"));
        kb.categories.push(Category::new("c", "C").with_order(-1));

        let ids: Vec<_> = kb.ordered_categories().iter().map(|c| c.id.clone()).collect();
        assert_eq!(ids, ["c", "a", "b"]);
    }

    #[test]
    fn article_list_entries_may_omit_content() {
        let article: Article =
            serde_json::from_str(r#"{"id":"a-1","title":"Reset password"}"#).unwrap();
        assert!(article.content.is_empty());
        assert!(article.category_id.is_empty());
    }

    #[test]
    fn description_is_skipped_when_none() {
        let json = serde_json::to_string(&Article::new("a", "T", "<p>x</p>")).unwrap();
        assert!(!json.contains("description"));
    }
}
