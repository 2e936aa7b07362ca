//! Per-table sort state.
//!
//! DESIGN
//! ======
//! The active column and direction are held here; header classes are derived
//! from this record rather than read back from the DOM. At most one column is
//! active, so at most one header carries a direction class.

#[cfg(test)]
#[path = "table_sort_test.rs"]
mod table_sort_test;

use crate::util::sort_order::SortDirection;

/// The column currently driving row order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ActiveSort {
    /// Position of the header among its sibling header cells.
    pub column: usize,
    pub direction: SortDirection,
}

/// Sort state for one table. `active` is `None` until a header is clicked.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TableSortState {
    pub active: Option<ActiveSort>,
}

impl TableSortState {
    /// Record a click on the header at `column` and return the direction to
    /// sort by.
    ///
    /// A header that is currently sorted ascending flips to descending; any
    /// other click (an unsorted header, or one sorted descending) sorts
    /// ascending.
    pub fn click(&mut self, column: usize) -> SortDirection {
        let direction = match self.active {
            Some(ActiveSort {
                column: active,
                direction: SortDirection::Ascending,
            }) if active == column => SortDirection::Descending,
            _ => SortDirection::Ascending,
        };
        self.active = Some(ActiveSort { column, direction });
        direction
    }

    /// Direction marker for the header at `column`, if it is the active one.
    #[must_use]
    pub fn direction_for(&self, column: usize) -> Option<SortDirection> {
        self.active
            .filter(|active| active.column == column)
            .map(|active| active.direction)
    }

    /// Stock header class for `column`, or `""` when it is not active.
    #[must_use]
    pub fn header_class(&self, column: usize) -> &'static str {
        self.direction_for(column).map_or("", SortDirection::css_class)
    }
}
