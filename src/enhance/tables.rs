//! Sortable table bindings.
//!
//! Each table gets its own [`TableSortState`]. A header click updates that
//! state, re-derives the direction classes on every sortable header of the
//! table, and re-appends the body rows in the order computed by
//! [`order_rows`].

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::{JsCast, JsValue, closure::Closure};
use web_sys::{Document, Element, Event, NodeList};

use crate::config::PageConfig;
use crate::state::table_sort::TableSortState;
use crate::util::sort_order::{SortDirection, SortKind, order_rows};

/// Sortable header cell and its column position.
struct SortableHeader {
    element: Element,
    column: usize,
}

/// Bind every table in `document` that has sortable headers.
pub fn bind_sortable_tables(document: &Document, config: &Rc<PageConfig>) {
    for table in element_list(document.query_selector_all("table")) {
        bind_table(&table, config);
    }
}

fn bind_table(table: &Element, config: &Rc<PageConfig>) {
    let headers: Vec<SortableHeader> = element_list(table.query_selector_all(&config.header_selector()))
        .into_iter()
        .map(|element| {
            let column = column_index(&element);
            SortableHeader { element, column }
        })
        .collect();
    if headers.is_empty() {
        return;
    }
    log::debug!("binding {} sortable headers", headers.len());

    let headers = Rc::new(headers);
    let state = Rc::new(RefCell::new(TableSortState::default()));

    for header in headers.iter() {
        let key = header.element.get_attribute(&config.sort_attribute).unwrap_or_default();
        let kind = config.columns.kind_for(&key);
        let column = header.column;

        let table = table.clone();
        let headers_cb = Rc::clone(&headers);
        let state_cb = Rc::clone(&state);
        let config_cb = Rc::clone(config);
        let on_click = Closure::wrap(Box::new(move |_: Event| {
            let direction = state_cb.borrow_mut().click(column);
            sync_header_classes(&headers_cb, &state_cb.borrow(), &config_cb);
            sort_body(&table, column, kind, direction);
        }) as Box<dyn FnMut(Event)>);

        if header
            .element
            .add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())
            .is_ok()
        {
            on_click.forget();
        }
    }
}

/// Position of `cell` among its parent's element children.
fn column_index(cell: &Element) -> usize {
    let Some(parent) = cell.parent_element() else {
        return 0;
    };
    let siblings = parent.children();
    (0..siblings.length())
        .find(|&i| siblings.item(i).as_ref() == Some(cell))
        .map_or(0, |i| i as usize)
}

fn sync_header_classes(headers: &[SortableHeader], state: &TableSortState, config: &PageConfig) {
    for header in headers {
        let classes = header.element.class_list();
        let _ = classes.remove_2(&config.asc_class, &config.desc_class);
        if let Some(direction) = state.direction_for(header.column) {
            let _ = classes.add_1(config.direction_class(direction));
        }
    }
}

/// Re-append the rows of the table's body in sorted order.
fn sort_body(table: &Element, column: usize, kind: SortKind, direction: SortDirection) {
    let Ok(Some(tbody)) = table.query_selector("tbody") else {
        return;
    };
    let rows = element_list(tbody.query_selector_all("tr"));
    let cells: Vec<String> = rows.iter().map(|row| cell_text(row, column)).collect();
    let order = order_rows(kind, &cells, direction);

    tbody.set_inner_html("");
    for index in order {
        let _ = tbody.append_child(&rows[index]);
    }
    log::debug!("sorted {} rows by column {column} ({direction:?})", rows.len());
}

/// Text of the cell at `column`; rows too short to have one read as empty.
fn cell_text(row: &Element, column: usize) -> String {
    u32::try_from(column)
        .ok()
        .and_then(|i| row.children().item(i))
        .and_then(|cell| cell.text_content())
        .unwrap_or_default()
}

fn element_list(nodes: Result<NodeList, JsValue>) -> Vec<Element> {
    let Ok(nodes) = nodes else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}
