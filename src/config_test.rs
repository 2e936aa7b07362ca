use super::*;
use crate::util::sort_order::{SortDirection, SortKind};

#[test]
fn default_config_matches_stock_markup() {
    let config = PageConfig::default();
    assert_eq!(config.storage_key, "theme");
    assert_eq!(config.dark_class, "dark");
    assert_eq!(config.hidden_class, "hidden");
    assert_eq!(config.toggle_id, "theme-toggle");
    assert_eq!(config.sun_id, "sun");
    assert_eq!(config.moon_id, "moon");
    assert_eq!(config.header_selector(), "th[data-sort]");
    assert_eq!(config.asc_class, "sort-asc");
    assert_eq!(config.desc_class, "sort-desc");
}

#[test]
fn partial_json_keeps_defaults() {
    let config = PageConfig::from_json(r#"{ "storage_key": "portal-theme" }"#).unwrap();
    assert_eq!(config.storage_key, "portal-theme");
    assert_eq!(config.toggle_id, "theme-toggle");
    assert_eq!(config.columns, ColumnPolicy::default());
}

#[test]
fn column_policy_can_be_replaced() {
    let config = PageConfig::from_json(r#"{ "columns": { "numeric_keys": ["score"] } }"#).unwrap();
    assert_eq!(config.columns.kind_for("score"), SortKind::Numeric);
    assert_eq!(config.columns.kind_for("total"), SortKind::Text);
    assert_eq!(config.columns.kind_for("percentage"), SortKind::Percentage);
}

#[test]
fn malformed_json_is_an_error() {
    let err = PageConfig::from_json("{ storage_key").unwrap_err();
    assert!(err.to_string().starts_with("invalid page config:"));
}

#[test]
fn direction_class_follows_configured_names() {
    let config = PageConfig::from_json(r#"{ "asc_class": "up" }"#).unwrap();
    assert_eq!(config.direction_class(SortDirection::Ascending), "up");
    assert_eq!(config.direction_class(SortDirection::Descending), "sort-desc");
}
