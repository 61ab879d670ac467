//! The host element a widget is mounted in.
//!
//! A widget only needs three things from its placeholder: read attributes,
//! replace the content and set inline style properties. [`Container`]
//! captures exactly that, and [`HtmlContainer`] implements it in memory for
//! server-side previews and tests.

use std::collections::BTreeMap;
use std::fmt::Write;

use crate::dom::Element;

/// A placeholder element owned by one widget.
pub trait Container {
    /// Returns the value of an attribute, if present.
    fn attribute(&self, name: &str) -> Option<String>;

    /// Replaces the element content with `html`.
    fn set_inner_html(&mut self, html: String);

    /// Sets an inline style property, or removes it when `value` is `None`.
    fn set_style(&mut self, property: &str, value: Option<String>);
}

/// An in-memory placeholder element.
///
/// # Examples
///
/// ```
/// use kbw_widget::container::{Container, HtmlContainer};
///
/// let mut container = HtmlContainer::new("div").with_attribute("data-kb-widget", "");
/// container.set_inner_html("<p>Hello</p>".to_string());
/// container.set_style("transform", Some("translate(20px, 20px)".to_string()));
///
/// assert_eq!(
///     container.outer_html(),
///     r#"<div data-kb-widget="" style="transform: translate(20px, 20px)"><p>Hello</p></div>"#
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HtmlContainer {
    tag: String,
    attributes: BTreeMap<String, String>,
    styles: BTreeMap<String, String>,
    inner_html: String,
}

impl HtmlContainer {
    /// Creates an empty element.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Self::default()
        }
    }

    /// Sets an attribute.
    #[must_use]
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// Returns the tag name.
    #[must_use]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Returns the current content.
    #[must_use]
    pub fn inner_html(&self) -> &str {
        &self.inner_html
    }

    /// Returns an inline style property.
    #[must_use]
    pub fn style(&self, property: &str) -> Option<&str> {
        self.styles.get(property).map(String::as_str)
    }

    /// Serializes the element with its attributes, inline style and content.
    ///
    /// A void element such as `img` is serialized as its open tag alone.
    #[must_use]
    pub fn outer_html(&self) -> String {
        let mut element = Element::new(self.tag.as_str());
        for (name, value) in &self.attributes {
            if name != "style" {
                element.set_attribute(name.as_str(), value.as_str());
            }
        }
        if !self.styles.is_empty() {
            let mut style = String::new();
            for (property, value) in &self.styles {
                if !style.is_empty() {
                    style.push_str("; ");
                }
                let _ = write!(style, "{property}: {value}");
            }
            element.set_attribute("style", style);
        }

        // Void elements cannot hold content.
        let open = element.to_html();
        if element.is_void() {
            return open;
        }

        // Content is trusted markup produced by the renderer, so it is
        // spliced in rather than escaped.
        let close = format!("</{}>", self.tag);
        let open = open.strip_suffix(&close).unwrap_or(&open);
        format!("{open}{}{close}", self.inner_html)
    }
}

impl Container for HtmlContainer {
    fn attribute(&self, name: &str) -> Option<String> {
        self.attributes.get(name).cloned()
    }

    fn set_inner_html(&mut self, html: String) {
        self.inner_html = html;
    }

    fn set_style(&mut self, property: &str, value: Option<String>) {
        match value {
            Some(value) => {
                self.styles.insert(property.to_string(), value);
            }
            None => {
                self.styles.remove(property);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attributes_are_readable() {
        let container = HtmlContainer::new("div").with_attribute("data-knowledge-base", "kb-1");
        assert_eq!(
            container.attribute("data-knowledge-base").as_deref(),
            Some("kb-1")
        );
        assert!(container.attribute("data-theme").is_none());
    }

    #[test]
    fn set_style_none_removes_property() {
        let mut container = HtmlContainer::new("div");
        container.set_style("cursor", Some("grabbing".to_string()));
        assert_eq!(container.style("cursor"), Some("grabbing"));
        container.set_style("cursor", None);
        assert!(container.style("cursor").is_none());
    }

    #[test]
    fn outer_html_without_content() {
        let container = HtmlContainer::new("section").with_attribute("id", "help");
        assert_eq!(container.outer_html(), r#"<section id="help"></section>"#);
    }

    #[test]
    fn void_element_has_no_content_or_closing_tag() {
        let mut container = HtmlContainer::new("img").with_attribute("alt", "logo");
        container.set_inner_html("<p>ignored</p>".to_string());
        container.set_style("width", Some("10px".to_string()));
        assert_eq!(
            container.outer_html(),
            r#"<img alt="logo" style="width: 10px">"#
        );
    }

    #[test]
    fn set_inner_html_replaces_content() {
        let mut container = HtmlContainer::new("div");
        container.set_inner_html("one".to_string());
        container.set_inner_html("two".to_string());
        assert_eq!(container.inner_html(), "two");
    }
}
