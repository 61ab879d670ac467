//! Single article rendering.

use kbw_protocol::{Article, WidgetConfig};

use super::icons;
use super::placeholder::render_error;
use crate::classes;
use crate::dom::Element;
use crate::sanitize::sanitize_fragment;

/// Message shown when the article view has no article.
pub const ARTICLE_NOT_FOUND: &str = "Article not found";

/// Renders an article: title, link to the public article page, optional
/// description and sanitized body.
#[must_use]
pub fn render_article(config: &WidgetConfig, article: Option<&Article>) -> Element {
    let Some(article) = article else {
        return render_error(ARTICLE_NOT_FOUND);
    };

    let link = Element::new("a")
        .class(classes::EXTERNAL_LINK)
        .attr("href", config.article_url(&article.id))
        .attr("target", "_blank")
        .attr("rel", "noopener noreferrer")
        .attr("title", "Open in new tab")
        .child(icons::external_link());

    let header = Element::new("div")
        .class(classes::ARTICLE_HEADER)
        .child(
            Element::new("h1")
                .class(classes::ARTICLE_TITLE)
                .text(&article.title),
        )
        .child(Element::new("div").class(classes::ARTICLE_ACTIONS).child(link));

    let mut content = Element::new("div")
        .class(classes::ARTICLE_CONTENT)
        .child(header);

    if let Some(description) = article.description.as_deref().filter(|d| !d.trim().is_empty()) {
        content.push(
            Element::new("p")
                .class(classes::ARTICLE_DESCRIPTION)
                .children(sanitize_fragment(description)),
        );
    }

    content.child(
        Element::new("div")
            .class(classes::ARTICLE_BODY)
            .class("prose")
            .children(sanitize_fragment(&article.content)),
    )
}
