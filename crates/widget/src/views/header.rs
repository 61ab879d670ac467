//! Header bar rendering.
//!
//! The header carries the knowledge base name, the back button for nested
//! views and the open/close toggle. It doubles as the drag handle.

use kbw_protocol::KnowledgeBase;

use super::icons;
use crate::classes;
use crate::dom::Element;
use crate::state::View;

/// Title shown before the knowledge base has loaded.
pub const DEFAULT_TITLE: &str = "Knowledge Base";

/// Renders the header bar.
///
/// The back button is present whenever `view` is not
/// [`View::Categories`].
#[must_use]
pub fn render_header(knowledge_base: Option<&KnowledgeBase>, view: View, is_open: bool) -> Element {
    let title = knowledge_base.map_or(DEFAULT_TITLE, |kb| kb.name.as_str());

    let mut header = Element::new("div")
        .class(classes::HEADER)
        .child(Element::new("h2").class(classes::TITLE).text(title));

    if view != View::Categories {
        header.push(render_back_button());
    }
    header.push(render_toggle_button(is_open));
    header
}

fn render_back_button() -> Element {
    Element::new("button")
        .class(classes::BACK)
        .attr("type", "button")
        .child(icons::back_arrow())
        .text("Back")
}

fn render_toggle_button(is_open: bool) -> Element {
    let label = if is_open { "Collapse" } else { "Expand" };
    Element::new("button")
        .class(classes::TOGGLE)
        .attr("type", "button")
        .attr("aria-expanded", is_open.to_string())
        .attr("title", label)
        .child(icons::chevron(is_open))
}
