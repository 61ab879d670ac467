//! Widget configuration read from a host placeholder element.
//!
//! A host page embeds the widget with a placeholder such as:
//!
//! ```html
//! <div data-kb-widget data-knowledge-base="kb-1" data-theme="dark"></div>
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ProtocolError, Result};

/// Placeholder attribute names.
pub mod attr {
    /// Marker attribute identifying a widget placeholder.
    pub const MARKER: &str = "data-kb-widget";
    /// Required knowledge base identifier.
    pub const KNOWLEDGE_BASE: &str = "data-knowledge-base";
    /// Optional theme (`light` or `dark`).
    pub const THEME: &str = "data-theme";
}

/// Visual theme of the widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    /// Light theme.
    #[default]
    Light,
    /// Dark theme.
    Dark,
}

impl Theme {
    /// Parses a theme attribute value.
    ///
    /// Unknown values fall back to [`Theme::Light`] rather than failing, so
    /// a typo in a host page never prevents the widget from mounting.
    ///
    /// # Examples
    ///
    /// ```
    /// use kbw_protocol::Theme;
    ///
    /// assert_eq!(Theme::from_attribute("dark"), Theme::Dark);
    /// assert_eq!(Theme::from_attribute(" DARK "), Theme::Dark);
    /// assert_eq!(Theme::from_attribute("purple"), Theme::Light);
    /// ```
    #[must_use]
    pub fn from_attribute(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("dark") {
            Self::Dark
        } else {
            Self::Light
        }
    }

    /// Returns the CSS class name for this theme.
    #[must_use]
    pub const fn class_name(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.class_name())
    }
}

/// Per-instance widget configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WidgetConfig {
    /// Knowledge base to browse.
    pub knowledge_base_id: String,
    /// Visual theme.
    #[serde(default)]
    pub theme: Theme,
    /// Origin the widget resources and read API are served from, without a
    /// trailing slash.
    pub origin: String,
}

impl WidgetConfig {
    /// Creates a configuration with the default theme.
    #[must_use]
    pub fn new(knowledge_base_id: impl Into<String>, origin: impl Into<String>) -> Self {
        Self {
            knowledge_base_id: knowledge_base_id.into(),
            theme: Theme::default(),
            origin: trim_origin(origin.into()),
        }
    }

    /// Builds a configuration from placeholder attributes.
    ///
    /// `lookup` returns the value of the named attribute, if present.
    ///
    /// # Errors
    ///
    /// Returns [`ProtocolError::MissingAttribute`] if the knowledge base
    /// attribute is absent or blank.
    pub fn from_attributes<F>(origin: impl Into<String>, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let knowledge_base_id = lookup(attr::KNOWLEDGE_BASE)
            .map(|id| id.trim().to_string())
            .filter(|id| !id.is_empty())
            .ok_or(ProtocolError::MissingAttribute {
                name: attr::KNOWLEDGE_BASE,
            })?;
        let theme = lookup(attr::THEME)
            .map(|value| Theme::from_attribute(&value))
            .unwrap_or_default();

        Ok(Self {
            knowledge_base_id,
            theme,
            origin: trim_origin(origin.into()),
        })
    }

    /// Sets the theme.
    #[must_use]
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Returns the public URL of an article page.
    ///
    /// # Examples
    ///
    /// ```
    /// use kbw_protocol::WidgetConfig;
    ///
    /// let config = WidgetConfig::new("kb-1", "https://kb.example.com/");
    /// assert_eq!(config.article_url("a-1"), "https://kb.example.com/article/a-1");
    /// ```
    #[must_use]
    pub fn article_url(&self, article_id: &str) -> String {
        format!("{}/article/{}", self.origin, crate::endpoint::encode_segment(article_id))
    }
}

fn trim_origin(origin: String) -> String {
    origin.trim_end_matches('/').to_string()
}
