//! Pure ordering logic for sortable result tables.
//!
//! Given a column's sort key and the raw text of each body cell, compute the
//! row permutation to display. Nothing here touches the DOM; `enhance::tables`
//! and `components::sortable_table` apply the permutation.
//!
//! Numeric parsing follows the browser's `parseFloat`: leading whitespace is
//! skipped and the longest decimal prefix is used, so `"12 pts"` reads as 12.
//! Unparseable text reads as zero.

#[cfg(test)]
#[path = "sort_order_test.rs"]
mod sort_order_test;

use std::cmp::Ordering;

use serde::Deserialize;

/// How a column's cell text is interpreted for comparison.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortKind {
    Numeric,
    /// Numeric after removing a `%` sign.
    Percentage,
    /// Raw text, compared without case folding or trimming.
    Text,
}

/// Direction of an active sort.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    /// Stock header class for this direction.
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Ascending => "sort-asc",
            Self::Descending => "sort-desc",
        }
    }

    #[must_use]
    pub fn reversed(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

/// Maps sort keys to their [`SortKind`]. Keys in neither list sort as text.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ColumnPolicy {
    pub numeric_keys: Vec<String>,
    pub percentage_keys: Vec<String>,
}

impl Default for ColumnPolicy {
    fn default() -> Self {
        Self {
            numeric_keys: ["student_id", "section_a", "section_b", "total"]
                .into_iter()
                .map(str::to_owned)
                .collect(),
            percentage_keys: vec!["percentage".to_owned()],
        }
    }
}

impl ColumnPolicy {
    #[must_use]
    pub fn kind_for(&self, key: &str) -> SortKind {
        if self.numeric_keys.iter().any(|k| k == key) {
            SortKind::Numeric
        } else if self.percentage_keys.iter().any(|k| k == key) {
            SortKind::Percentage
        } else {
            SortKind::Text
        }
    }
}

/// A cell value ready for comparison.
#[derive(Clone, Debug, PartialEq)]
pub enum SortValue {
    Number(f64),
    Text(String),
}

/// Interpret raw cell text according to `kind`.
pub fn parse_cell(kind: SortKind, raw: &str) -> SortValue {
    match kind {
        SortKind::Numeric => SortValue::Number(numeric_value(raw)),
        SortKind::Percentage => SortValue::Number(numeric_value(&raw.replacen('%', "", 1))),
        SortKind::Text => SortValue::Text(raw.to_owned()),
    }
}

/// Leading-prefix float parse with failures, `NaN`, and `-0` mapped to zero.
pub fn numeric_value(raw: &str) -> f64 {
    match parse_leading_float(raw) {
        Some(v) if !v.is_nan() && v != 0.0 => v,
        _ => 0.0,
    }
}

/// Parse the longest decimal literal at the start of `raw`, after leading
/// whitespace. Returns `None` when no digits are present.
pub fn parse_leading_float(raw: &str) -> Option<f64> {
    let s = raw.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;
    let negative = bytes.first() == Some(&b'-');
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }
    if s[end..].starts_with("Infinity") {
        return Some(if negative { f64::NEG_INFINITY } else { f64::INFINITY });
    }

    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;
    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        if int_digits + frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }
    if int_digits + frac_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(&bytes[exp_end..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    s[..end].parse().ok()
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

/// Total order over parsed cell values. Equal values compare `Equal`.
pub fn compare_values(a: &SortValue, b: &SortValue) -> Ordering {
    match (a, b) {
        (SortValue::Number(x), SortValue::Number(y)) => x.total_cmp(y),
        (SortValue::Text(x), SortValue::Text(y)) => x.cmp(y),
        // A column never mixes kinds; keep the order total anyway.
        (SortValue::Number(_), SortValue::Text(_)) => Ordering::Less,
        (SortValue::Text(_), SortValue::Number(_)) => Ordering::Greater,
    }
}

/// Compute the display order of rows whose cells at the sorted column hold
/// `cells`. Returns indices into `cells`.
///
/// The sort is stable in both directions: tied rows keep their current
/// relative order.
pub fn order_rows<S: AsRef<str>>(kind: SortKind, cells: &[S], direction: SortDirection) -> Vec<usize> {
    let values: Vec<SortValue> = cells.iter().map(|c| parse_cell(kind, c.as_ref())).collect();
    let mut order: Vec<usize> = (0..values.len()).collect();
    order.sort_by(|&a, &b| {
        let ord = compare_values(&values[a], &values[b]);
        match direction {
            SortDirection::Ascending => ord,
            SortDirection::Descending => ord.reverse(),
        }
    });
    order
}
