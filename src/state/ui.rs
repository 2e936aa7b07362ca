//! Page chrome state shared through Leptos context.
//!
//! DESIGN
//! ======
//! Components read the visual mode from here instead of the DOM, so the
//! toggle button and anything styled by theme render from one signal.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use crate::state::theme::Theme;

/// UI state provided as `RwSignal<UiState>`.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub theme: Theme,
}

impl UiState {
    #[must_use]
    pub fn dark_mode(&self) -> bool {
        self.theme.is_dark()
    }
}
