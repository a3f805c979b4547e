use std::fs;
use std::path::PathBuf;

use gridiron_terminal::store::RowStore;

fn read_fixture(name: &str) -> String {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests");
    path.push("fixtures");
    path.push(name);
    fs::read_to_string(path).expect("fixture file should be readable")
}

#[test]
fn reports_header_fields_in_order() {
    let store = RowStore::from_csv(&read_fixture("official_qb_stats.csv"), true)
        .expect("fixture should parse");
    assert_eq!(
        store.fields,
        vec!["Player", "Team", "POS", "COMP", "ATT", "YDS", "TD", "INT"]
    );
}

#[test]
fn drops_fully_blank_trailing_rows() {
    let store = RowStore::from_csv(&read_fixture("official_qb_stats.csv"), true)
        .expect("fixture should parse");
    // Fixture carries five data rows plus two blank trailers.
    assert_eq!(store.len(), 5);
    for row in &store.rows {
        assert!(
            store
                .fields
                .iter()
                .any(|f| row.get(f).is_some_and(|v| !v.is_empty())),
            "no loaded row may be fully blank"
        );
    }
}

#[test]
fn keeps_partially_blank_rows() {
    let text = "Player,Team,YDS\nAlice,KC,\n,,\n";
    let store = RowStore::from_csv(text, true).expect("should parse");
    assert_eq!(store.len(), 1);
    assert_eq!(store.rows[0]["Player"], "Alice");
    assert_eq!(store.rows[0]["YDS"], "");
}

#[test]
fn headerless_source_reports_no_fields() {
    let store = RowStore::from_csv("a,b,c\nd,e,f\n", false).expect("should parse");
    assert!(store.fields.is_empty());
    // With no declared fields every record is blank by definition.
    assert!(store.is_empty());
}

#[test]
fn short_records_read_as_empty_cells() {
    let text = "Player,Team,YDS\nAlice,KC\n";
    let store = RowStore::from_csv(text, true).expect("should parse");
    assert_eq!(store.len(), 1);
    assert_eq!(store.rows[0].get("YDS"), None);
}
