//! Bindings for server-rendered markup.
//!
//! SYSTEM CONTEXT
//! ==============
//! Result pages are rendered by the server as plain HTML. On hydrate these
//! bindings locate the theme toggle and every sortable table and attach click
//! listeners that drive `state::theme` and `state::table_sort`. Elements that
//! are absent from the page are skipped.

pub mod tables;
pub mod theme;

use std::rc::Rc;

use crate::config::{CONFIG_ELEMENT_ID, PageConfig};

/// Bind the theme toggle and all sortable tables in the current document.
pub fn enhance_document() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        log::debug!("no document; page bindings skipped");
        return;
    };
    let config = Rc::new(page_config(&document));
    theme::bind_theme_toggle(&document, &config);
    tables::bind_sortable_tables(&document, &config);
}

/// Read embedded page configuration, falling back to defaults when the
/// element is missing or malformed.
fn page_config(document: &web_sys::Document) -> PageConfig {
    let Some(raw) = document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|el| el.text_content())
    else {
        return PageConfig::default();
    };
    PageConfig::from_json(&raw).unwrap_or_else(|e| {
        leptos::logging::warn!("{e}; using default page config");
        PageConfig::default()
    })
}
