//! Class names shared by the renderer, the event layer and the stylesheet.
//!
//! The stylesheet in `assets/widget.css` targets these names, and host
//! events are matched against them, so they are defined once here.

/// Root element of a rendered widget.
pub const ROOT: &str = "kb-widget";

/// Root modifier while the panel is expanded.
pub const OPEN: &str = "kb-widget-open";

/// Root modifier while the panel is collapsed.
pub const CLOSED: &str = "kb-widget-closed";

/// Header bar; pointer-down here starts a drag.
pub const HEADER: &str = "kb-widget-header";

/// Knowledge base name in the header.
pub const TITLE: &str = "kb-widget-title";

/// Button expanding or collapsing the panel.
pub const TOGGLE: &str = "kb-widget-toggle";

/// Button returning to the previous view.
pub const BACK: &str = "kb-widget-back";

/// Container of the current view.
pub const BODY: &str = "kb-widget-body";

/// Placeholder for an empty list.
pub const EMPTY: &str = "kb-widget-empty";

pub const CATEGORIES: &str = "kb-widget-categories";
pub const CATEGORY: &str = "kb-widget-category";
pub const CATEGORY_TITLE: &str = "kb-widget-category-title";
pub const CATEGORY_DESCRIPTION: &str = "kb-widget-category-description";

pub const ARTICLES: &str = "kb-widget-articles";
pub const ARTICLE: &str = "kb-widget-article";
pub const ARTICLE_TITLE: &str = "kb-widget-article-title";
pub const ARTICLE_DESCRIPTION: &str = "kb-widget-article-description";

pub const ARTICLE_CONTENT: &str = "kb-widget-article-content";
pub const ARTICLE_HEADER: &str = "kb-widget-article-header";
pub const ARTICLE_ACTIONS: &str = "kb-widget-article-actions";
pub const ARTICLE_BODY: &str = "kb-widget-article-body";
pub const EXTERNAL_LINK: &str = "kb-widget-external-link";

/// Loading placeholder and its spinner.
pub const LOADING: &str = "kb-widget-loading";
pub const LOADING_SPINNER: &str = "kb-widget-loading-spinner";

/// Error placeholder.
pub const ERROR: &str = "kb-widget-error";

/// Selector attribute carrying a category id on list items.
pub const CATEGORY_ID_ATTR: &str = "data-category-id";

/// Selector attribute carrying an article id on list items.
pub const ARTICLE_ID_ATTR: &str = "data-article-id";
