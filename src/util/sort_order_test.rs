use super::*;

fn ordered<'a>(cells: &[&'a str], order: &[usize]) -> Vec<&'a str> {
    order.iter().map(|&i| cells[i]).collect()
}

// =============================================================
// ColumnPolicy
// =============================================================

#[test]
fn default_policy_knows_results_columns() {
    let policy = ColumnPolicy::default();
    for key in ["student_id", "section_a", "section_b", "total"] {
        assert_eq!(policy.kind_for(key), SortKind::Numeric, "{key}");
    }
    assert_eq!(policy.kind_for("percentage"), SortKind::Percentage);
    assert_eq!(policy.kind_for("name"), SortKind::Text);
    assert_eq!(policy.kind_for("Total"), SortKind::Text);
}

// =============================================================
// Parsing
// =============================================================

#[test]
fn parse_leading_float_reads_decimal_prefix() {
    assert_eq!(parse_leading_float("10"), Some(10.0));
    assert_eq!(parse_leading_float("  2.5"), Some(2.5));
    assert_eq!(parse_leading_float("12abc"), Some(12.0));
    assert_eq!(parse_leading_float("-3"), Some(-3.0));
    assert_eq!(parse_leading_float(".5"), Some(0.5));
    assert_eq!(parse_leading_float("5."), Some(5.0));
    assert_eq!(parse_leading_float("1e3"), Some(1000.0));
    assert_eq!(parse_leading_float("1e"), Some(1.0));
    assert_eq!(parse_leading_float("Infinity"), Some(f64::INFINITY));
    assert_eq!(parse_leading_float("-Infinity"), Some(f64::NEG_INFINITY));
}

#[test]
fn parse_leading_float_rejects_non_numeric_text() {
    assert_eq!(parse_leading_float(""), None);
    assert_eq!(parse_leading_float("abc"), None);
    assert_eq!(parse_leading_float("."), None);
    assert_eq!(parse_leading_float("-"), None);
    assert_eq!(parse_leading_float("N/A"), None);
}

#[test]
fn numeric_value_defaults_garbage_to_zero() {
    assert_eq!(numeric_value("absent"), 0.0);
    assert_eq!(numeric_value(""), 0.0);
    assert!(numeric_value("-0").is_sign_positive());
}

#[test]
fn parse_cell_strips_percent_for_percentage_columns() {
    assert_eq!(parse_cell(SortKind::Percentage, "50%"), SortValue::Number(50.0));
    assert_eq!(parse_cell(SortKind::Percentage, "%7"), SortValue::Number(7.0));
    assert_eq!(parse_cell(SortKind::Numeric, "%7"), SortValue::Number(0.0));
}

#[test]
fn parse_cell_keeps_text_verbatim() {
    assert_eq!(parse_cell(SortKind::Text, " Bob "), SortValue::Text(" Bob ".to_owned()));
}

// =============================================================
// Ordering
// =============================================================

#[test]
fn numeric_column_sorts_by_value_not_lexically() {
    let cells = ["10", "2", "30"];
    let asc = order_rows(SortKind::Numeric, &cells, SortDirection::Ascending);
    assert_eq!(ordered(&cells, &asc), vec!["2", "10", "30"]);
    let desc = order_rows(SortKind::Numeric, &cells, SortDirection::Descending);
    assert_eq!(ordered(&cells, &desc), vec!["30", "10", "2"]);
}

#[test]
fn percentage_column_sorts_numerically() {
    let cells = ["5%", "50%", "12%"];
    let asc = order_rows(SortKind::Percentage, &cells, SortDirection::Ascending);
    assert_eq!(ordered(&cells, &asc), vec!["5%", "12%", "50%"]);
}

#[test]
fn text_column_uses_raw_byte_order() {
    let cells = ["alice", "Bob"];
    let asc = order_rows(SortKind::Text, &cells, SortDirection::Ascending);
    assert_eq!(ordered(&cells, &asc), vec!["Bob", "alice"]);
}

#[test]
fn garbage_in_numeric_column_sorts_as_zero() {
    let cells = ["3", "n/a", "-1"];
    let asc = order_rows(SortKind::Numeric, &cells, SortDirection::Ascending);
    assert_eq!(ordered(&cells, &asc), vec!["-1", "n/a", "3"]);
}

#[test]
fn ties_keep_prior_order_in_both_directions() {
    // "0", "", and "x" all read as zero.
    let cells = ["0", "5", "", "x"];
    let asc = order_rows(SortKind::Numeric, &cells, SortDirection::Ascending);
    assert_eq!(asc, vec![0, 2, 3, 1]);
    let desc = order_rows(SortKind::Numeric, &cells, SortDirection::Descending);
    assert_eq!(desc, vec![1, 0, 2, 3]);
}

#[test]
fn empty_table_orders_to_empty_permutation() {
    let cells: [&str; 0] = [];
    assert!(order_rows(SortKind::Text, &cells, SortDirection::Ascending).is_empty());
}

#[test]
fn compare_values_reports_equality() {
    assert_eq!(
        compare_values(&SortValue::Number(1.0), &SortValue::Number(1.0)),
        Ordering::Equal
    );
    assert_eq!(
        compare_values(&SortValue::Text("a".into()), &SortValue::Text("a".into())),
        Ordering::Equal
    );
}

#[test]
fn sort_direction_classes_and_reversal() {
    assert_eq!(SortDirection::default(), SortDirection::Ascending);
    assert_eq!(SortDirection::Ascending.css_class(), "sort-asc");
    assert_eq!(SortDirection::Descending.css_class(), "sort-desc");
    assert_eq!(SortDirection::Ascending.reversed(), SortDirection::Descending);
}
