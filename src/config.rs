//! Page configuration for the markup bindings.
//!
//! SYSTEM CONTEXT
//! ==============
//! Server templates may embed a `<script type="application/json"
//! id="page-config">` block to rename ids, classes, or the storage key. Every
//! field is optional; omitted fields keep the stock results-portal markup.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::util::sort_order::{ColumnPolicy, SortDirection};

/// Id of the element holding embedded JSON configuration.
pub const CONFIG_ELEMENT_ID: &str = "page-config";

/// Failure to parse embedded page configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid page config: {0}")]
    Json(#[from] serde_json::Error),
}

/// Ids, classes, and keys the page bindings look for.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// `localStorage` key for the theme preference.
    pub storage_key: String,
    /// Class toggled on the root element while dark mode is active.
    pub dark_class: String,
    /// Class hiding an icon element.
    pub hidden_class: String,
    pub toggle_id: String,
    pub sun_id: String,
    pub moon_id: String,
    /// Header attribute holding the sort key.
    pub sort_attribute: String,
    pub asc_class: String,
    pub desc_class: String,
    pub columns: ColumnPolicy,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            storage_key: "theme".to_owned(),
            dark_class: "dark".to_owned(),
            hidden_class: "hidden".to_owned(),
            toggle_id: "theme-toggle".to_owned(),
            sun_id: "sun".to_owned(),
            moon_id: "moon".to_owned(),
            sort_attribute: "data-sort".to_owned(),
            asc_class: "sort-asc".to_owned(),
            desc_class: "sort-desc".to_owned(),
            columns: ColumnPolicy::default(),
        }
    }
}

impl PageConfig {
    /// Parse configuration JSON, filling omitted fields with defaults.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// CSS selector matching sortable header cells.
    #[must_use]
    pub fn header_selector(&self) -> String {
        format!("th[{}]", self.sort_attribute)
    }

    /// Header class marking `direction`.
    #[must_use]
    pub fn direction_class(&self, direction: SortDirection) -> &str {
        match direction {
            SortDirection::Ascending => &self.asc_class,
            SortDirection::Descending => &self.desc_class,
        }
    }
}
