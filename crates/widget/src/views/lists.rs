//! Category and article list rendering.

use kbw_protocol::{Article, Category};

use crate::classes;
use crate::dom::Element;
use crate::sanitize::sanitize_fragment;

/// Message shown for a knowledge base without categories.
pub const NO_CATEGORIES: &str = "No categories available";

/// Message shown for a category without articles.
pub const NO_ARTICLES: &str = "No articles available";

/// Renders the category list, in the order given.
///
/// Each item carries `data-category-id` so a click can be mapped back to
/// the category.
#[must_use]
pub fn render_categories(categories: &[&Category]) -> Element {
    if categories.is_empty() {
        return render_empty(NO_CATEGORIES);
    }

    Element::new("div")
        .class(classes::CATEGORIES)
        .children(categories.iter().map(|category| {
            list_item(
                classes::CATEGORY,
                (classes::CATEGORY_ID_ATTR, category.id.as_str()),
                (classes::CATEGORY_TITLE, category.title.as_str()),
                (classes::CATEGORY_DESCRIPTION, category.description.as_deref()),
            )
        }))
}

/// Renders the article list of a category.
#[must_use]
pub fn render_articles(articles: &[Article]) -> Element {
    if articles.is_empty() {
        return render_empty(NO_ARTICLES);
    }

    Element::new("div")
        .class(classes::ARTICLES)
        .children(articles.iter().map(|article| {
            list_item(
                classes::ARTICLE,
                (classes::ARTICLE_ID_ATTR, article.id.as_str()),
                (classes::ARTICLE_TITLE, article.title.as_str()),
                (classes::ARTICLE_DESCRIPTION, article.description.as_deref()),
            )
        }))
}

fn list_item(
    class: &str,
    (id_attr, id): (&str, &str),
    (title_class, title): (&str, &str),
    (description_class, description): (&str, Option<&str>),
) -> Element {
    let mut item = Element::new("div")
        .class(class)
        .attr(id_attr, id)
        .child(Element::new("h3").class(title_class).text(title));

    if let Some(description) = description.filter(|d| !d.trim().is_empty()) {
        item.push(
            Element::new("p")
                .class(description_class)
                .children(sanitize_fragment(description)),
        );
    }
    item
}

fn render_empty(message: &str) -> Element {
    Element::new("div").class(classes::EMPTY).text(message)
}
