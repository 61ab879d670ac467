//! The widget stylesheet.
//!
//! Class names in the stylesheet match the constants in
//! [`crate::classes`].

/// Stylesheet served next to the widget bundle.
pub const STYLESHEET: &str = include_str!("../assets/widget.css");

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classes;

    #[test]
    fn every_view_class_is_styled() {
        for class in [
            classes::ROOT,
            classes::CLOSED,
            classes::HEADER,
            classes::TOGGLE,
            classes::BACK,
            classes::BODY,
            classes::CATEGORY,
            classes::ARTICLE,
            classes::ARTICLE_CONTENT,
            classes::LOADING_SPINNER,
            classes::ERROR,
            classes::EMPTY,
        ] {
            assert!(
                STYLESHEET.contains(&format!(".{class}")),
                "missing rule for .{class}"
            );
        }
    }

    #[test]
    fn both_themes_are_styled() {
        assert!(STYLESHEET.contains(".kb-widget.light"));
        assert!(STYLESHEET.contains(".kb-widget.dark"));
    }
}
