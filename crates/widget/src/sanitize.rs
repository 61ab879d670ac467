//! Sanitization of backend-supplied HTML.
//!
//! Knowledge base descriptions and article bodies are authored as rich text
//! and may contain arbitrary markup. They are parsed into a detached
//! fragment with an HTML5 parser and converted into element-tree nodes.
//! Only structure survives the conversion:
//!
//! - Active elements (`script`, `style`, `iframe`, `object`, `embed`, ...)
//!   and SVG animation elements are removed together with their subtree.
//! - Comments, doctypes and processing instructions are removed.
//! - Event handler attributes (`on*`) and `srcdoc` are removed.
//! - URL attributes using `javascript:`, `vbscript:` or a non-image `data:`
//!   URL are removed.
//!
//! Everything else (paragraphs, emphasis, lists, links, images, tables) is
//! kept as is.

use scraper::{ElementRef, Html, node::Node as ParsedNode};

use crate::dom::{Element, Node};

/// Elements removed together with their content.
///
/// SVG animation elements are included: they can rewrite any attribute of
/// their parent, including a link target, after sanitization.
const DROPPED_ELEMENTS: &[&str] = &[
    "animate",
    "animatemotion",
    "animatetransform",
    "applet",
    "base",
    "embed",
    "frame",
    "frameset",
    "iframe",
    "link",
    "meta",
    "noscript",
    "object",
    "script",
    "set",
    "style",
    "template",
    "use",
];

/// Attributes holding a URL.
const URL_ATTRIBUTES: &[&str] = &[
    "action",
    "background",
    "cite",
    "data",
    "formaction",
    "href",
    "poster",
    "src",
    "xlink:href",
];

/// Parses `html` and returns the sanitized nodes.
///
/// # Examples
///
/// ```
/// use kbw_widget::dom::Element;
/// use kbw_widget::sanitize::sanitize_fragment;
///
/// let nodes = sanitize_fragment("<p>Hi</p><script>alert(1)</script>");
/// let html = Element::new("div").children(nodes).to_html();
/// assert_eq!(html, "<div><p>Hi</p></div>");
/// ```
#[must_use]
pub fn sanitize_fragment(html: &str) -> Vec<Node> {
    let fragment = Html::parse_fragment(html);
    convert_children(fragment.root_element())
}

/// Parses `html` and returns the sanitized markup.
#[must_use]
pub fn sanitize_html(html: &str) -> String {
    let mut out = String::new();
    for node in sanitize_fragment(html) {
        node.write_html(&mut out);
    }
    out
}

fn convert_children(parent: ElementRef<'_>) -> Vec<Node> {
    let mut nodes = Vec::new();
    for child in parent.children() {
        match child.value() {
            ParsedNode::Text(text) => {
                let text: &str = &text.text;
                nodes.push(Node::text(text));
            }
            ParsedNode::Element(_) => {
                if let Some(element) = ElementRef::wrap(child) {
                    nodes.extend(convert_element(element));
                }
            }
            _ => {}
        }
    }
    nodes
}

/// Converts one parsed element.
///
/// Malformed tag names (the tokenizer accepts `<a<b>` as a single tag) are
/// unwrapped: the element goes, its sanitized children stay.
fn convert_element(element: ElementRef<'_>) -> Vec<Node> {
    let name = element.value().name().to_ascii_lowercase();
    if DROPPED_ELEMENTS.contains(&name.as_str()) {
        return Vec::new();
    }
    if !is_valid_name(&name) {
        return convert_children(element);
    }

    let mut attributes: Vec<(&str, &str)> = element
        .value()
        .attrs()
        .filter(|(attribute, value)| is_allowed_attribute(attribute, value))
        .collect();
    attributes.sort_unstable();

    let mut converted = Element::new(name);
    for (attribute, value) in attributes {
        converted.set_attribute(attribute, value);
    }
    for child in convert_children(element) {
        converted.push(child);
    }
    vec![Node::Element(converted)]
}

fn is_valid_name(name: &str) -> bool {
    name.starts_with(|c: char| c.is_ascii_alphabetic())
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | ':' | '.'))
}

fn is_allowed_attribute(name: &str, value: &str) -> bool {
    let name = name.to_ascii_lowercase();
    if !is_valid_name(&name) || name.starts_with("on") || name == "srcdoc" {
        return false;
    }
    if URL_ATTRIBUTES.contains(&name.as_str()) {
        return is_safe_url(value);
    }
    true
}

/// Returns `false` for URLs that execute code when followed or loaded.
///
/// Browsers ignore ASCII whitespace and control characters inside the
/// scheme, so those are stripped before the scheme is compared.
#[must_use]
pub fn is_safe_url(url: &str) -> bool {
    let normalized: String = url
        .chars()
        .filter(|c| !c.is_ascii_whitespace() && !c.is_ascii_control())
        .collect::<String>()
        .to_ascii_lowercase();

    if normalized.starts_with("javascript:") || normalized.starts_with("vbscript:") {
        return false;
    }
    if let Some(data) = normalized.strip_prefix("data:") {
        return data.starts_with("image/") && !data.starts_with("image/svg");
    }
    true
}
