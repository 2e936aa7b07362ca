//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns and pure ordering
//! logic from page bindings and component rendering.

pub mod dark_mode;
pub mod sort_order;
pub mod storage;
