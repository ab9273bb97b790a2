//! Controller state, page references and viewport geometry.

use crate::ui::Button;

/// Whether more pages can be loaded while results are displayed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pagination {
    HasMore,
    AtEnd,
}

/// Controller state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppState {
    #[default]
    Idle,
    /// First page of a new query in flight
    Searching,
    /// Next page in flight
    LoadingMore,
    Displaying(Pagination),
}

impl AppState {
    pub fn is_busy(&self) -> bool {
        matches!(self, AppState::Searching | AppState::LoadingMore)
    }
}

/// The form controls the controller drives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRefs {
    /// Current text of the search input
    pub input: String,
    pub search_button: Button,
    pub load_button: Button,
}

impl Default for PageRefs {
    /// Empty input, disabled submit, hidden load-more
    fn default() -> Self {
        Self {
            input: String::new(),
            search_button: Button::new(false, true),
            load_button: Button::new(true, false),
        }
    }
}

/// Scroll geometry of the document, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Viewport {
    pub inner_height: u32,
    pub page_y_offset: u32,
    pub body_height: u32,
}

impl Viewport {
    pub fn new(inner_height: u32, page_y_offset: u32, body_height: u32) -> Self {
        Self {
            inner_height,
            page_y_offset,
            body_height,
        }
    }

    /// Viewport bottom has reached the document bottom
    pub fn at_bottom(&self) -> bool {
        u64::from(self.inner_height) + u64::from(self.page_y_offset) >= u64::from(self.body_height)
    }

    pub fn scroll_to_top(&mut self) {
        self.page_y_offset = 0;
    }

    /// Scroll so the viewport bottom meets the document bottom
    pub fn scroll_to_bottom(&mut self) {
        self.page_y_offset = self.body_height.saturating_sub(self.inner_height);
    }
}
