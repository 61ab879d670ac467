//! Widget state management.
//!
//! This module defines the per-widget state: the current view, the data
//! fetched for it, the open/closed flag and the panel position. Every
//! widget owns its own [`WidgetState`]; nothing here is shared.

use kbw_protocol::{Article, KnowledgeBase};

/// The view the widget body shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    /// The categories of the knowledge base.
    #[default]
    Categories,
    /// The articles of the selected category.
    Articles,
    /// A single article.
    Article,
}

/// On-screen offset of the panel, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    /// Offset applied before any drag.
    pub const INITIAL: Self = Self { x: 20, y: 20 };

    /// Returns the CSS transform placing the panel at this offset.
    ///
    /// # Examples
    ///
    /// ```
    /// use kbw_widget::state::Position;
    ///
    /// assert_eq!(Position::INITIAL.transform(), "translate(20px, 20px)");
    /// ```
    #[must_use]
    pub fn transform(self) -> String {
        format!("translate({}px, {}px)", self.x, self.y)
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::INITIAL
    }
}

/// Pointer offset from the panel origin, captured when a drag starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragAnchor {
    pub offset_x: i32,
    pub offset_y: i32,
}

/// The state of one widget.
#[derive(Debug, Clone, Default)]
pub struct WidgetState {
    /// Current view.
    pub view: View,
    /// Knowledge base, once loaded.
    pub knowledge_base: Option<KnowledgeBase>,
    /// Articles of the current category.
    pub articles: Vec<Article>,
    /// Article shown in the article view.
    pub current_article: Option<Article>,
    /// Category whose articles are listed.
    pub current_category_id: Option<String>,
    /// Whether the panel is expanded.
    pub is_open: bool,
    /// Panel offset.
    pub position: Position,
    /// Active drag, if any.
    pub drag: Option<DragAnchor>,
    generation: u64,
}

impl WidgetState {
    /// Creates the initial state: categories view, closed, at the initial
    /// position.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the navigation generation.
    ///
    /// The generation changes whenever a fetch is issued or the view moves
    /// back, so a fetch result carrying an older generation is stale.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Advances the generation and returns the new value.
    pub fn next_generation(&mut self) -> u64 {
        self.generation = self.generation.wrapping_add(1);
        self.generation
    }

    /// Returns `true` while a drag is active.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    pub fn toggle_open(&mut self) {
        self.is_open = !self.is_open;
    }

    /// Goes up one level.
    ///
    /// From the article view, clears the article and returns to the list
    /// already loaded. From the articles view, clears the list and the
    /// category. Returns `false` at the categories view, where back has no
    /// meaning.
    pub fn back(&mut self) -> bool {
        match self.view {
            View::Categories => return false,
            View::Article => {
                self.view = View::Articles;
                self.current_article = None;
            }
            View::Articles => {
                self.view = View::Categories;
                self.articles.clear();
                self.current_category_id = None;
            }
        }
        self.next_generation();
        true
    }

    pub fn set_knowledge_base(&mut self, knowledge_base: KnowledgeBase) {
        self.knowledge_base = Some(knowledge_base);
    }

    /// Enters the articles view with the fetched list.
    pub fn show_articles(&mut self, category_id: String, articles: Vec<Article>) {
        self.articles = articles;
        self.current_category_id = Some(category_id);
        self.view = View::Articles;
    }

    /// Enters the article view with the fetched article.
    pub fn show_article(&mut self, article: Article) {
        self.current_article = Some(article);
        self.view = View::Article;
    }

    /// Starts a drag with the pointer at `(x, y)`.
    ///
    /// Offsets saturate at the `i32` range for out-of-range pointer
    /// coordinates.
    pub fn begin_drag(&mut self, x: i32, y: i32) {
        self.drag = Some(DragAnchor {
            offset_x: x.saturating_sub(self.position.x),
            offset_y: y.saturating_sub(self.position.y),
        });
    }

    /// Moves the panel so the drag anchor follows the pointer.
    ///
    /// Returns `false`, leaving the position untouched, when no drag is
    /// active.
    pub fn drag_to(&mut self, x: i32, y: i32) -> bool {
        let Some(anchor) = self.drag else {
            return false;
        };
        self.position = Position {
            x: x.saturating_sub(anchor.offset_x),
            y: y.saturating_sub(anchor.offset_y),
        };
        true
    }

    /// Ends the drag. Returns `false` if none was active.
    pub fn end_drag(&mut self) -> bool {
        self.drag.take().is_some()
    }
}
