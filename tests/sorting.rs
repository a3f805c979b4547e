use gridiron_terminal::sort::{SortDirection, SortState, sort_rows};
use gridiron_terminal::store::{Row, cell};

fn row(pairs: &[(&str, &str)]) -> Row {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn yards(rows: &[Row]) -> Vec<String> {
    rows.iter().map(|r| cell(r, "YDS").to_string()).collect()
}

#[test]
fn numeric_columns_sort_numerically() {
    let rows = vec![
        row(&[("Player", "a"), ("YDS", "1000")]),
        row(&[("Player", "b"), ("YDS", "9")]),
        row(&[("Player", "c"), ("YDS", "85.5")]),
    ];
    let sorted = sort_rows(&rows, "YDS", SortDirection::Ascending);
    assert_eq!(yards(&sorted), vec!["9", "85.5", "1000"]);
}

#[test]
fn non_numeric_columns_sort_ordinally() {
    let rows = vec![
        row(&[("Player", "b")]),
        row(&[("Player", "Z")]),
        row(&[("Player", "a")]),
    ];
    let sorted = sort_rows(&rows, "Player", SortDirection::Ascending);
    let names: Vec<&str> = sorted.iter().map(|r| cell(r, "Player")).collect();
    // Ordinal, case-sensitive: uppercase sorts before lowercase.
    assert_eq!(names, vec!["Z", "a", "b"]);
}

#[test]
fn mixed_cells_fall_back_to_string_comparison() {
    let rows = vec![row(&[("YDS", "DNP")]), row(&[("YDS", "3")])];
    let sorted = sort_rows(&rows, "YDS", SortDirection::Ascending);
    // Only one side parses, so the pair compares ordinally: "3" < "DNP".
    assert_eq!(yards(&sorted), vec!["3", "DNP"]);
}

#[test]
fn missing_cells_read_as_empty_and_sort_first() {
    let rows = vec![row(&[("YDS", "7")]), row(&[("Player", "no yds")])];
    let sorted = sort_rows(&rows, "YDS", SortDirection::Ascending);
    assert_eq!(cell(&sorted[0], "YDS"), "");
    assert_eq!(cell(&sorted[1], "YDS"), "7");
}

#[test]
fn descending_reverses_ascending_without_ties() {
    let rows = vec![
        row(&[("YDS", "5")]),
        row(&[("YDS", "1")]),
        row(&[("YDS", "12")]),
        row(&[("YDS", "7")]),
    ];
    let ascending = sort_rows(&rows, "YDS", SortDirection::Ascending);
    let descending = sort_rows(&ascending, "YDS", SortDirection::Descending);
    let mut reversed = ascending.clone();
    reversed.reverse();
    assert_eq!(descending, reversed);
}

#[test]
fn ties_keep_relative_input_order() {
    let rows = vec![
        row(&[("Player", "first"), ("YDS", "10")]),
        row(&[("Player", "second"), ("YDS", "10")]),
        row(&[("Player", "third"), ("YDS", "2")]),
        row(&[("Player", "fourth"), ("YDS", "10")]),
    ];
    let ascending = sort_rows(&rows, "YDS", SortDirection::Ascending);
    let names: Vec<&str> = ascending.iter().map(|r| cell(r, "Player")).collect();
    assert_eq!(names, vec!["third", "first", "second", "fourth"]);

    // Stability holds in descending order too: ties never swap.
    let descending = sort_rows(&rows, "YDS", SortDirection::Descending);
    let names: Vec<&str> = descending.iter().map(|r| cell(r, "Player")).collect();
    assert_eq!(names, vec!["first", "second", "fourth", "third"]);
}

#[test]
fn reselecting_the_active_column_flips_direction() {
    let mut sort = SortState::default();
    sort.toggle("YDS");
    assert_eq!(sort.column.as_deref(), Some("YDS"));
    assert_eq!(sort.direction, SortDirection::Ascending);

    sort.toggle("YDS");
    assert_eq!(sort.direction, SortDirection::Descending);

    // A different column resets to ascending.
    sort.toggle("TD");
    assert_eq!(sort.column.as_deref(), Some("TD"));
    assert_eq!(sort.direction, SortDirection::Ascending);
}
