//! View rendering for the widget.
//!
//! Every view is a pure function from data to an element tree. Nothing here
//! touches a container; the controller serializes the tree and hands the
//! markup over.
//!
//! # Modules
//!
//! - [`header`]: Title, back button and toggle
//! - [`lists`]: Category and article lists
//! - [`article`]: Single article view
//! - [`placeholder`]: Loading and error placeholders
//! - [`icons`]: Inline SVG icons
//!
//! # Example
//!
//! ```
//! use kbw_protocol::WidgetConfig;
//! use kbw_protocol::dummy::dummy_knowledge_base;
//! use kbw_widget::state::WidgetState;
//! use kbw_widget::views;
//!
//! let config = WidgetConfig::new("kb-demo", "https://kb.example.com");
//! let mut state = WidgetState::new();
//! state.set_knowledge_base(dummy_knowledge_base());
//!
//! let html = views::render_widget(&config, &state).to_html();
//! assert!(html.contains("Acme Help Center"));
//! ```

pub mod article;
pub mod header;
pub mod icons;
pub mod lists;
pub mod placeholder;

pub use article::render_article;
pub use header::render_header;
pub use lists::{render_articles, render_categories};
pub use placeholder::{render_error, render_load_failure, render_loading};

use kbw_protocol::WidgetConfig;

use crate::classes;
use crate::dom::Element;
use crate::state::{View, WidgetState};

/// Renders the complete widget for the current state.
///
/// The root carries the theme class and an open/closed modifier; the body
/// holds exactly one view.
#[must_use]
pub fn render_widget(config: &WidgetConfig, state: &WidgetState) -> Element {
    let knowledge_base = state.knowledge_base.as_ref();

    let body = match state.view {
        View::Categories => {
            let categories = knowledge_base
                .map(|kb| kb.ordered_categories())
                .unwrap_or_default();
            render_categories(&categories)
        }
        View::Articles => render_articles(&state.articles),
        View::Article => render_article(config, state.current_article.as_ref()),
    };

    Element::new("div")
        .class(classes::ROOT)
        .class(config.theme.class_name())
        .class(if state.is_open {
            classes::OPEN
        } else {
            classes::CLOSED
        })
        .child(render_header(knowledge_base, state.view, state.is_open))
        .child(Element::new("div").class(classes::BODY).child(body))
}

#[cfg(test)]
mod tests;
