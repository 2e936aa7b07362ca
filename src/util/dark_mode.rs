//! Dark mode presentation and preference loading.
//!
//! Applies a [`Theme`] to the page: the dark class on the `<html>` element and
//! the hidden class on the sun/moon icons. Requires a browser environment;
//! non-hydrate builds no-op so server rendering stays deterministic.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

use crate::config::PageConfig;
use crate::state::theme::{Theme, ThemeController};

/// Preference store for the current build target.
#[cfg(feature = "hydrate")]
pub type BrowserStore = crate::util::storage::WebStorage;
/// Preference store for the current build target.
#[cfg(not(feature = "hydrate"))]
pub type BrowserStore = crate::util::storage::MemoryStore;

/// Load the theme controller backed by the page's preference store.
pub fn load_controller(config: &PageConfig) -> ThemeController<BrowserStore> {
    ThemeController::load(BrowserStore::default(), config.storage_key.as_str())
}

/// Apply `theme` to the root element and the indicator icons.
///
/// Missing icon elements are skipped.
pub fn apply(theme: Theme, config: &PageConfig) {
    apply_root(theme, config);
    #[cfg(feature = "hydrate")]
    {
        let Some(doc) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        let icons = theme.icons();
        for (id, visible) in [(&config.sun_id, icons.sun_visible), (&config.moon_id, icons.moon_visible)] {
            if let Some(icon) = doc.get_element_by_id(id) {
                let _ = icon.class_list().toggle_with_force(&config.hidden_class, !visible);
            }
        }
    }
}

/// Add or remove the dark class on the `<html>` element.
pub fn apply_root(theme: Theme, config: &PageConfig) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(root) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.document_element())
        {
            let _ = root
                .class_list()
                .toggle_with_force(&config.dark_class, theme.is_dark());
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (theme, config);
    }
}
