//! Loading and error placeholders.
//!
//! These replace the whole container content while a fetch is pending or
//! after it failed, and while the loader cannot mount a widget at all.

use crate::classes;
use crate::dom::Element;

/// Inline style of the loader's error box.
///
/// The loader reports failures before the stylesheet is guaranteed to be
/// present, so this box cannot rely on it.
const LOAD_FAILURE_STYLE: &str = "padding: 1rem; color: #991b1b; background: #fee2e2; \
     border-radius: 0.375rem; text-align: center; \
     font-family: system-ui, -apple-system, sans-serif;";

/// Renders the loading placeholder.
#[must_use]
pub fn render_loading() -> Element {
    Element::new("div")
        .class(classes::LOADING)
        .child(Element::new("div").class(classes::LOADING_SPINNER))
        .text("Loading...")
}

/// Renders an error placeholder with `message`.
#[must_use]
pub fn render_error(message: &str) -> Element {
    Element::new("div").class(classes::ERROR).text(message)
}

/// Renders the self-styled error box the loader puts in a placeholder it
/// could not mount.
#[must_use]
pub fn render_load_failure(message: &str) -> Element {
    Element::new("div")
        .attr("role", "alert")
        .attr("style", LOAD_FAILURE_STYLE)
        .text(message)
}
