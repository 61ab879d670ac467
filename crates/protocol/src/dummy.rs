//! Dummy data generation for testing and demonstration.
//!
//! This module provides a small sample knowledge base with categories and
//! articles, used by the server's demo mode and by tests across the
//! workspace.
//!
//! # Examples
//!
//! ```
//! use kbw_protocol::dummy::{dummy_articles, dummy_knowledge_base};
//!
//! let kb = dummy_knowledge_base();
//! assert_eq!(kb.categories.len(), 3);
//!
//! let articles = dummy_articles();
//! assert!(articles.iter().all(|a| kb.categories.iter().any(|c| c.id == a.category_id)));
//! ```

use crate::knowledge::{Article, Category, KnowledgeBase};

/// Identifier of the demo knowledge base.
pub const DUMMY_KNOWLEDGE_BASE_ID: &str = "kb-demo";

/// A builder for creating articles tied to a category.
///
/// This is an internal helper to reduce boilerplate when creating
/// several articles for the same category.
struct ArticleBuilder {
    category_id: &'static str,
}

impl ArticleBuilder {
    fn new(category_id: &'static str) -> Self {
        Self { category_id }
    }

    fn article(&self, id: &str, title: &str, description: &str, content: &str) -> Article {
        Article::new(id, title, content)
            .with_description(description)
            .in_category(self.category_id)
    }
}

/// Generates the sample knowledge base.
///
/// Categories are deliberately listed out of display order so that callers
/// exercise [`KnowledgeBase::ordered_categories`].
#[must_use]
pub fn dummy_knowledge_base() -> KnowledgeBase {
    let mut kb = KnowledgeBase::new(DUMMY_KNOWLEDGE_BASE_ID, "Acme Help Center");
    kb.description = Some("Answers to common questions about Acme.".to_string());

    let categories = [
        Category::new("cat-billing", "Billing")
            .with_order(2)
            .with_description("Invoices, payment methods and refunds."),
        Category::new("cat-start", "Getting started")
            .with_order(1)
            .with_description("Set up your account in <strong>five minutes</strong>."),
        Category::new("cat-empty", "Release notes").with_order(3),
    ];
    for mut category in categories {
        category.knowledge_base_id = DUMMY_KNOWLEDGE_BASE_ID.to_string();
        kb.categories.push(category);
    }

    kb
}

/// Generates the sample articles.
///
/// The "Release notes" category intentionally has no articles. One article
/// body carries an inline script to demonstrate sanitization.
#[must_use]
pub fn dummy_articles() -> Vec<Article> {
    let start = ArticleBuilder::new("cat-start");
    let billing = ArticleBuilder::new("cat-billing");

    vec![
        start.article(
            "art-signup",
            "Creating an account",
            "Sign up with email or SSO.",
            "<p>Open the <b>Sign up</b> page and pick a method.</p>\
             <ol><li>Email and password</li><li>Single sign-on</li></ol>",
        ),
        start.article(
            "art-invite",
            "Inviting teammates",
            "Share your workspace.",
            "<p>Go to <em>Settings &rarr; Members</em> and send invites.</p>",
        ),
        billing.article(
            "art-refunds",
            "Requesting a refund",
            "Refunds are processed within 5 days.",
            "<p>Contact support with your invoice number.</p>\
             <script>alert('not executed')</script>\
             <p>We reply within one business day.</p>",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dummy_knowledge_base_has_ordered_categories() {
        let kb = dummy_knowledge_base();
        let titles: Vec<_> = kb
            .ordered_categories()
            .iter()
            .map(|c| c.title.clone())
            .collect();
        assert_eq!(titles, ["Getting started", "Billing", "Release notes"]);
    }

    #[test]
    fn dummy_categories_reference_the_knowledge_base() {
        let kb = dummy_knowledge_base();
        assert!(
            kb.categories
                .iter()
                .all(|c| c.knowledge_base_id == DUMMY_KNOWLEDGE_BASE_ID)
        );
    }

    #[test]
    fn dummy_articles_reference_known_categories() {
        let kb = dummy_knowledge_base();
        for article in dummy_articles() {
            assert!(
                kb.categories.iter().any(|c| c.id == article.category_id),
                "dangling category for {}",
                article.id
            );
        }
    }

    #[test]
    fn release_notes_category_is_empty() {
        assert!(
            dummy_articles()
                .iter()
                .all(|a| a.category_id != "cat-empty")
        );
    }
}
