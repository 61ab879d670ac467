//! Widget message types.
//!
//! Host events (clicks, pointer gestures) are mapped to these messages by the
//! widget's event layer and consumed by the widget controller.

use serde::{Deserialize, Serialize};

/// Messages that represent user actions on a widget.
///
/// # Examples
///
/// ```
/// use kbw_protocol::Message;
///
/// let msg = Message::SelectCategory { id: "cat-1".into() };
/// assert!(msg.is_navigation());
/// assert!(msg.triggers_fetch());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Message {
    /// Expand or collapse the floating panel.
    Toggle,
    /// Go up one level (article to articles, articles to categories).
    Back,
    /// Drill into a category's articles.
    SelectCategory {
        /// Category identifier.
        id: String,
    },
    /// Open a single article.
    SelectArticle {
        /// Article identifier.
        id: String,
    },
    /// Pointer pressed on the panel header.
    DragStart {
        /// Pointer x coordinate (client space).
        x: i32,
        /// Pointer y coordinate (client space).
        y: i32,
    },
    /// Pointer moved anywhere in the document.
    DragMove {
        /// Pointer x coordinate (client space).
        x: i32,
        /// Pointer y coordinate (client space).
        y: i32,
    },
    /// Pointer released.
    DragEnd,
}

impl Message {
    /// Returns `true` if this message moves between views.
    ///
    /// # Examples
    ///
    /// ```
    /// use kbw_protocol::Message;
    ///
    /// assert!(Message::Back.is_navigation());
    /// assert!(!Message::Toggle.is_navigation());
    /// ```
    #[must_use]
    pub fn is_navigation(&self) -> bool {
        matches!(
            self,
            Self::Back | Self::SelectCategory { .. } | Self::SelectArticle { .. }
        )
    }

    /// Returns `true` if handling this message issues a network fetch.
    #[must_use]
    pub fn triggers_fetch(&self) -> bool {
        matches!(
            self,
            Self::SelectCategory { .. } | Self::SelectArticle { .. }
        )
    }

    /// Returns `true` if this message is part of a drag gesture.
    ///
    /// # Examples
    ///
    /// ```
    /// use kbw_protocol::Message;
    ///
    /// assert!(Message::DragEnd.is_drag());
    /// assert!(!Message::Back.is_drag());
    /// ```
    #[must_use]
    pub fn is_drag(&self) -> bool {
        matches!(
            self,
            Self::DragStart { .. } | Self::DragMove { .. } | Self::DragEnd
        )
    }
}
