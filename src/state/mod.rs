//! Client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by behavior (`theme`, `table_sort`, `ui`) so the markup
//! bindings and the Leptos components drive the same small models.

pub mod table_sort;
pub mod theme;
pub mod ui;
