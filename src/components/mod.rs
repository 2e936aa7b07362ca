//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the theme toggle and sortable result tables from state
//! signals. They read `RwSignal<UiState>` and `PageConfig` from Leptos
//! context when provided and fall back to defaults otherwise.

pub mod sortable_table;
pub mod theme_toggle;
