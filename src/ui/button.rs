//! Button state and the load-more visibility rules.

use crate::models::SearchState;

/// Marker class that hides an element
pub const HIDDEN_CLASS: &str = "is-hidden";

/// A page button: hidden marker plus disabled flag.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Button {
    pub hidden: bool,
    pub disabled: bool,
}

impl Button {
    pub fn new(hidden: bool, disabled: bool) -> Self {
        Self { hidden, disabled }
    }

    /// Whether a click would reach its handler
    pub fn is_actionable(&self) -> bool {
        !self.hidden && !self.disabled
    }

    /// Class attribute value as rendered
    pub fn class_list(&self) -> &'static str {
        if self.hidden {
            HIDDEN_CLASS
        } else {
            ""
        }
    }
}

/// Add the hidden marker. Idempotent.
pub fn hide_button(button: &mut Button) {
    if !button.hidden {
        button.hidden = true;
    }
}

/// Remove the hidden marker, unless there is no active query.
///
/// With an empty query the button is hidden instead, whatever its prior state.
pub fn show_button(button: &mut Button, state: &SearchState) {
    if !state.has_query() {
        hide_button(button);
        return;
    }

    if button.hidden {
        button.hidden = false;
    }
}
