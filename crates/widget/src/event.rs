//! Host events and their mapping to widget messages.
//!
//! The host page reports clicks and pointer gestures as [`HostEvent`]s. A
//! click or pointer-down carries the [`TargetPath`]: the event target and
//! its ancestors up to the container, innermost first. This is all the
//! widget needs to resolve delegated clicks the way `Element.closest` does.

use std::collections::BTreeMap;

use kbw_protocol::Message;
use scraper::{ElementRef, Html, Selector};

use crate::classes;

/// One element on the path from an event target to the container.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TargetNode {
    pub classes: Vec<String>,
    pub attributes: BTreeMap<String, String>,
}

impl TargetNode {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a class.
    #[must_use]
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    /// Sets an attribute.
    #[must_use]
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }
}

/// Event target and ancestors, innermost first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TargetPath(Vec<TargetNode>);

impl TargetPath {
    /// Creates a path from nodes ordered innermost first.
    #[must_use]
    pub fn new(nodes: Vec<TargetNode>) -> Self {
        Self(nodes)
    }

    /// Returns the innermost node matching `predicate`.
    pub fn closest<P>(&self, predicate: P) -> Option<&TargetNode>
    where
        P: Fn(&TargetNode) -> bool,
    {
        self.0.iter().find(|node| predicate(node))
    }

    /// Returns `true` if any node carries `class`.
    #[must_use]
    pub fn within_class(&self, class: &str) -> bool {
        self.closest(|node| node.has_class(class)).is_some()
    }

    /// Returns the value of the innermost `name` attribute on the path.
    #[must_use]
    pub fn closest_attribute(&self, name: &str) -> Option<&str> {
        self.closest(|node| node.attributes.contains_key(name))
            .and_then(|node| node.attribute(name))
    }

    /// Builds the path of the first element matching `selector` in
    /// rendered widget markup.
    ///
    /// This resolves what a user would click on in the markup a widget
    /// produced. Returns `None` if the selector is invalid or matches
    /// nothing.
    ///
    /// # Examples
    ///
    /// ```
    /// use kbw_widget::event::TargetPath;
    ///
    /// let html = r#"<div class="kb-widget-header"><h2 class="kb-widget-title">Docs</h2></div>"#;
    /// let path = TargetPath::locate(html, ".kb-widget-title").unwrap();
    /// assert!(path.within_class("kb-widget-header"));
    /// ```
    #[must_use]
    pub fn locate(html: &str, selector: &str) -> Option<Self> {
        let selector = Selector::parse(selector).ok()?;
        let fragment = Html::parse_fragment(html);
        let target = fragment.select(&selector).next()?;

        let nodes = std::iter::once(target)
            .chain(target.ancestors().filter_map(ElementRef::wrap))
            .filter(|element| element.value().name() != "html")
            .map(|element| {
                let value = element.value();
                TargetNode {
                    classes: value.classes().map(str::to_string).collect(),
                    attributes: value
                        .attrs()
                        .filter(|(name, _)| *name != "class")
                        .map(|(name, v)| (name.to_string(), v.to_string()))
                        .collect(),
                }
            })
            .collect();
        Some(Self(nodes))
    }
}

/// An input event delivered by the host page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostEvent {
    /// A click inside the container.
    Click { target: TargetPath },
    /// Pointer pressed inside the container.
    PointerDown { x: i32, y: i32, target: TargetPath },
    /// Pointer moved anywhere in the document.
    PointerMove { x: i32, y: i32 },
    /// Pointer released anywhere in the document.
    PointerUp,
}

/// Converts a host event to a widget message.
///
/// Returns `None` for events the widget does not react to, such as a click
/// outside any control or a pointer-down outside the header.
///
/// # Click Targets
///
/// | Closest match | Message |
/// |---------------|---------|
/// | `.kb-widget-toggle` | `Toggle` |
/// | `.kb-widget-back` | `Back` |
/// | `[data-article-id]` | `SelectArticle` |
/// | `[data-category-id]` | `SelectCategory` |
#[must_use]
pub fn event_to_message(event: &HostEvent) -> Option<Message> {
    match event {
        HostEvent::Click { target } => click_to_message(target),
        HostEvent::PointerDown { x, y, target } => target
            .within_class(classes::HEADER)
            .then_some(Message::DragStart { x: *x, y: *y }),
        HostEvent::PointerMove { x, y } => Some(Message::DragMove { x: *x, y: *y }),
        HostEvent::PointerUp => Some(Message::DragEnd),
    }
}

fn click_to_message(target: &TargetPath) -> Option<Message> {
    if target.within_class(classes::TOGGLE) {
        return Some(Message::Toggle);
    }
    if target.within_class(classes::BACK) {
        return Some(Message::Back);
    }
    if let Some(id) = target.closest_attribute(classes::ARTICLE_ID_ATTR) {
        return Some(Message::SelectArticle { id: id.to_string() });
    }
    target
        .closest_attribute(classes::CATEGORY_ID_ATTR)
        .map(|id| Message::SelectCategory { id: id.to_string() })
}
