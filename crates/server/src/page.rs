//! Public article pages.
//!
//! The widget's "open in new tab" link points here. Article bodies go
//! through the same sanitizer as in the widget.

use kbw_protocol::Article;
use kbw_widget::dom::Element;
use kbw_widget::sanitize::sanitize_fragment;

/// Path of the stylesheet linked from every page.
pub const STYLESHEET_PATH: &str = "/widget.css";

/// Renders the standalone page of an article.
#[must_use]
pub fn render_article_page(article: &Article) -> String {
    let mut main = Element::new("main")
        .class("kb-widget-article-page")
        .child(Element::new("h1").text(article.title.as_str()));

    if let Some(description) = article.description.as_deref().filter(|d| !d.trim().is_empty()) {
        main.push(
            Element::new("p")
                .class("kb-widget-article-description")
                .children(sanitize_fragment(description)),
        );
    }

    main.push(
        Element::new("div")
            .class("kb-widget-article-body")
            .class("prose")
            .children(sanitize_fragment(&article.content)),
    );

    document(&article.title, main)
}

/// Renders the page shown for an unknown article id.
#[must_use]
pub fn render_not_found_page() -> String {
    document(
        "Article not found",
        Element::new("main")
            .class("kb-widget-article-page")
            .child(Element::new("h1").text("Article not found")),
    )
}

fn document(title: &str, main: Element) -> String {
    let head = Element::new("head")
        .child(Element::new("meta").attr("charset", "utf-8"))
        .child(
            Element::new("meta")
                .attr("name", "viewport")
                .attr("content", "width=device-width, initial-scale=1"),
        )
        .child(Element::new("title").text(title))
        .child(
            Element::new("link")
                .attr("rel", "stylesheet")
                .attr("href", STYLESHEET_PATH),
        );
    let html = Element::new("html")
        .attr("lang", "en")
        .child(head)
        .child(Element::new("body").child(main));

    format!("<!doctype html>\n{html}")
}
