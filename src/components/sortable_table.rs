//! Result table with click-to-sort headers.
//!
//! Rows are rendered in the order held by an `order` signal. A header click
//! records the click in [`TableSortState`] and re-sorts the current display
//! order, so rows that tie keep the order they were shown in.

#[cfg(test)]
#[path = "sortable_table_test.rs"]
mod sortable_table_test;

use leptos::prelude::*;

use crate::config::PageConfig;
use crate::state::table_sort::TableSortState;
use crate::util::sort_order::{SortDirection, SortKind, order_rows};

/// A table column. Columns without a `sort_key` are not clickable.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColumnSpec {
    pub label: String,
    pub sort_key: Option<String>,
}

impl ColumnSpec {
    pub fn sortable(label: impl Into<String>, sort_key: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            sort_key: Some(sort_key.into()),
        }
    }

    pub fn plain(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            sort_key: None,
        }
    }
}

/// Reorder `current` (a display order over `rows`) by `column`.
///
/// Rows missing the column read as empty text.
pub fn resort(
    rows: &[Vec<String>],
    current: &[usize],
    column: usize,
    kind: SortKind,
    direction: SortDirection,
) -> Vec<usize> {
    let cells: Vec<&str> = current
        .iter()
        .map(|&row| rows[row].get(column).map_or("", String::as_str))
        .collect();
    order_rows(kind, &cells, direction)
        .into_iter()
        .map(|position| current[position])
        .collect()
}

/// Sortable table over string cells.
///
/// Sort keys are classified with the [`PageConfig`] column policy from
/// context, or the stock results columns when none is provided.
#[component]
pub fn SortableTable(
    columns: Vec<ColumnSpec>,
    rows: Vec<Vec<String>>,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    let policy = use_context::<PageConfig>().unwrap_or_default().columns;
    let sort = RwSignal::new(TableSortState::default());
    let order = RwSignal::new((0..rows.len()).collect::<Vec<usize>>());
    let rows = StoredValue::new(rows);

    let on_header = move |column: usize, kind: SortKind| {
        let mut direction = SortDirection::Ascending;
        sort.update(|s| direction = s.click(column));
        let current = order.get_untracked();
        let next = rows.with_value(|rows| resort(rows, &current, column, kind, direction));
        order.set(next);
    };

    let header_cells = columns
        .into_iter()
        .enumerate()
        .map(|(column, col)| match col.sort_key {
            Some(key) => {
                let kind = policy.kind_for(&key);
                view! {
                    <th
                        data-sort=key
                        class=move || sort.get().header_class(column)
                        on:click=move |_| on_header(column, kind)
                    >
                        {col.label}
                    </th>
                }
                .into_any()
            }
            None => view! { <th>{col.label}</th> }.into_any(),
        })
        .collect_view();

    let body_rows = move || {
        let current = order.get();
        rows.with_value(|rows| {
            current
                .iter()
                .map(|&row| {
                    let cells = rows[row]
                        .iter()
                        .map(|cell| view! { <td>{cell.clone()}</td> })
                        .collect_view();
                    view! { <tr>{cells}</tr> }
                })
                .collect_view()
        })
    };

    view! {
        <table class=class>
            <thead>
                <tr>{header_cells}</tr>
            </thead>
            <tbody>{body_rows}</tbody>
        </table>
    }
}
