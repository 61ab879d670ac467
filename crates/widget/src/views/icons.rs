//! Inline SVG icons.

use crate::dom::Element;

fn icon() -> Element {
    Element::new("svg")
        .attr("width", "16")
        .attr("height", "16")
        .attr("viewBox", "0 0 24 24")
        .attr("fill", "none")
        .attr("stroke", "currentColor")
        .attr("stroke-width", "2")
        .attr("aria-hidden", "true")
}

/// Left arrow shown in the back button.
#[must_use]
pub fn back_arrow() -> Element {
    icon().child(Element::new("path").attr("d", "M19 12H5M12 19l-7-7 7-7"))
}

/// Chevron of the toggle button, pointing up when the panel can expand.
#[must_use]
pub fn chevron(is_open: bool) -> Element {
    let d = if is_open { "M6 9l6 6 6-6" } else { "M18 15l-6-6-6 6" };
    icon().child(Element::new("path").attr("d", d))
}

/// Box-with-arrow shown on the external article link.
#[must_use]
pub fn external_link() -> Element {
    icon()
        .child(Element::new("path").attr(
            "d",
            "M18 13v6a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2h6",
        ))
        .child(Element::new("polyline").attr("points", "15 3 21 3 21 9"))
        .child(
            Element::new("line")
                .attr("x1", "10")
                .attr("y1", "14")
                .attr("x2", "21")
                .attr("y2", "3"),
        )
}
