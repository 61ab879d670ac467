//! Rendering tests for widget views.
//!
//! Small, stable fragments are pinned with inline insta snapshots; whole
//! views are checked for the properties the widget relies on.

use kbw_protocol::dummy::{dummy_articles, dummy_knowledge_base};
use kbw_protocol::{Article, Category, KnowledgeBase, Theme, WidgetConfig};
use proptest::prelude::*;

use super::{
    render_article, render_articles, render_categories, render_error, render_header,
    render_load_failure, render_loading, render_widget,
};
use crate::state::{View, WidgetState};

fn config() -> WidgetConfig {
    WidgetConfig::new("kb-demo", "https://kb.example.com")
}

fn state_with_kb() -> WidgetState {
    let mut state = WidgetState::new();
    state.set_knowledge_base(dummy_knowledge_base());
    state
}

fn articles_in(category_id: &str) -> Vec<Article> {
    dummy_articles()
        .into_iter()
        .filter(|a| a.category_id == category_id)
        .collect()
}

#[test]
fn snapshot_loading() {
    insta::assert_snapshot!(
        render_loading().to_html(),
        @r#"<div class="kb-widget-loading"><div class="kb-widget-loading-spinner"></div>Loading...</div>"#
    );
}

#[test]
fn snapshot_error() {
    insta::assert_snapshot!(
        render_error("Failed to load articles").to_html(),
        @r#"<div class="kb-widget-error">Failed to load articles</div>"#
    );
}

#[test]
fn snapshot_empty_lists() {
    insta::assert_snapshot!(
        render_categories(&[]).to_html(),
        @r#"<div class="kb-widget-empty">No categories available</div>"#
    );
    insta::assert_snapshot!(
        render_articles(&[]).to_html(),
        @r#"<div class="kb-widget-empty">No articles available</div>"#
    );
}

#[test]
fn snapshot_header_before_load() {
    insta::assert_snapshot!(
        render_header(None, View::Categories, false).to_html(),
        @r#"<div class="kb-widget-header"><h2 class="kb-widget-title">Knowledge Base</h2><button class="kb-widget-toggle" type="button" aria-expanded="false" title="Expand"><svg width="16" height="16" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" aria-hidden="true"><path d="M18 15l-6-6-6 6"></path></svg></button></div>"#
    );
}

#[test]
fn load_failure_box_is_self_styled() {
    let html = render_load_failure("Failed to load widget resources").to_html();
    assert!(html.starts_with(r#"<div role="alert" style="padding: 1rem; color: #991b1b;"#));
    assert!(html.ends_with(">Failed to load widget resources</div>"));
}

#[test]
fn categories_view_lists_every_category_in_order() {
    let html = render_widget(&config(), &state_with_kb()).to_html();

    assert_eq!(html.matches("data-category-id=").count(), 3);
    let start = html.find("Getting started").unwrap();
    let billing = html.find("Billing").unwrap();
    let notes = html.find("Release notes").unwrap();
    assert!(start < billing && billing < notes);
}

#[test]
fn categories_view_has_title_and_no_back_button() {
    let html = render_widget(&config(), &state_with_kb()).to_html();

    assert!(html.contains(r#"<h2 class="kb-widget-title">Acme Help Center</h2>"#));
    assert!(!html.contains("kb-widget-back"));
}

#[test]
fn category_description_keeps_structure() {
    let html = render_widget(&config(), &state_with_kb()).to_html();
    assert!(html.contains(
        r#"<p class="kb-widget-category-description">Set up your account in <strong>five minutes</strong>.</p>"#
    ));
}

#[test]
fn articles_view_lists_articles_with_back_button() {
    let mut state = state_with_kb();
    state.show_articles("cat-start".to_string(), articles_in("cat-start"));

    let html = render_widget(&config(), &state).to_html();

    assert!(html.contains("kb-widget-back"));
    assert!(html.contains(r#"data-article-id="art-signup""#));
    assert!(html.contains("Creating an account"));
    assert!(html.contains("Inviting teammates"));
    assert!(!html.contains("data-category-id"));
}

#[test]
fn article_view_renders_sanitized_body() {
    let mut state = state_with_kb();
    let refunds = articles_in("cat-billing");
    state.show_articles("cat-billing".to_string(), refunds.clone());
    state.show_article(refunds[0].clone());

    let html = render_widget(&config(), &state).to_html();

    assert!(html.contains("kb-widget-back"));
    assert!(html.contains(r#"<h1 class="kb-widget-article-title">Requesting a refund</h1>"#));
    assert!(html.contains(r#"href="https://kb.example.com/article/art-refunds""#));
    assert!(html.contains("<p>Contact support with your invoice number.</p>"));
    assert!(html.contains("<p>We reply within one business day.</p>"));
    assert!(!html.contains("<script"));
    assert!(!html.contains("not executed"));
}

#[test]
fn article_view_without_article() {
    let html = render_article(&config(), None).to_html();
    assert_eq!(html, r#"<div class="kb-widget-error">Article not found</div>"#);
}

#[test]
fn root_carries_theme_and_open_state() {
    let config = config().with_theme(Theme::Dark);
    let mut state = WidgetState::new();

    let closed = render_widget(&config, &state).to_html();
    assert!(closed.starts_with(r#"<div class="kb-widget dark kb-widget-closed">"#));

    state.toggle_open();
    let open = render_widget(&config, &state).to_html();
    assert!(open.starts_with(r#"<div class="kb-widget dark kb-widget-open">"#));
}

#[test]
fn titles_are_escaped() {
    let mut kb = KnowledgeBase::new("kb", "<b>Docs</b>");
    kb.categories
        .push(Category::new("c", "<img src=x onerror=alert(1)>"));
    let mut state = WidgetState::new();
    state.set_knowledge_base(kb);

    let html = render_widget(&config(), &state).to_html();
    assert!(html.contains("&lt;b&gt;Docs&lt;/b&gt;"));
    assert!(html.contains("&lt;img src=x onerror=alert(1)&gt;"));
    assert!(!html.contains("<img"));
}

#[test]
fn ids_are_escaped_in_attributes() {
    let articles = vec![Article::new(r#"a"onclick="x"#, "Title", "")];
    let html = render_articles(&articles).to_html();
    assert!(html.contains(r#"data-article-id="a&quot;onclick=&quot;x""#));
}

proptest! {
    #[test]
    fn article_list_contains_every_title(titles in prop::collection::vec("[A-Za-z0-9 ]{1,24}", 1..8)) {
        let articles: Vec<Article> = titles
            .iter()
            .enumerate()
            .map(|(i, title)| Article::new(format!("a-{i}"), title.clone(), ""))
            .collect();

        let html = render_articles(&articles).to_html();

        prop_assert_eq!(html.matches("data-article-id=").count(), titles.len());
        for title in &titles {
            prop_assert!(html.contains(title.as_str()));
        }
    }

    #[test]
    fn category_list_is_never_empty_markup(count in 0usize..6) {
        let categories: Vec<Category> = (0..count)
            .map(|i| Category::new(format!("c-{i}"), format!("Category {i}")))
            .collect();
        let refs: Vec<&Category> = categories.iter().collect();

        let html = render_categories(&refs).to_html();

        prop_assert!(!html.is_empty());
        if count == 0 {
            prop_assert!(html.contains("No categories available"));
        } else {
            prop_assert_eq!(html.matches("data-category-id=").count(), count);
        }
    }
}
