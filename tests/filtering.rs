use std::fs;
use std::path::PathBuf;

use gridiron_terminal::facets::{distinct_values, extract_facets};
use gridiron_terminal::filter::{FacetSelection, apply_filters};
use gridiron_terminal::resources::Category;
use gridiron_terminal::state::{AppState, Delta, Slot, apply_delta};
use gridiron_terminal::store::{RowStore, cell};

fn read_fixture(name: &str) -> String {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests");
    path.push("fixtures");
    path.push(name);
    fs::read_to_string(path).expect("fixture file should be readable")
}

fn roster() -> RowStore {
    RowStore::from_csv(&read_fixture("nfl_official_team_roster.csv"), true)
        .expect("fixture should parse")
}

fn qb_stats() -> RowStore {
    RowStore::from_csv(&read_fixture("official_qb_stats.csv"), true)
        .expect("fixture should parse")
}

#[test]
fn facet_values_keep_first_seen_order() {
    let store = roster();
    assert_eq!(distinct_values(&store, "Conference"), vec!["AFC", "NFC"]);
    assert_eq!(
        distinct_values(&store, "Division"),
        vec!["East", "North", "South", "West"]
    );
}

#[test]
fn facets_compose_with_and() {
    let store = roster();
    let mut selection = FacetSelection::new();
    selection.set("Conference", Some("AFC".to_string()));
    selection.set("Division", Some("East".to_string()));
    let view = apply_filters(&store, &selection, "");
    let teams: Vec<&str> = view.rows.iter().map(|r| cell(r, "Team")).collect();
    assert_eq!(teams, vec!["Buffalo Bills", "Miami Dolphins"]);
}

#[test]
fn facet_match_is_case_sensitive() {
    let store = roster();
    let mut selection = FacetSelection::new();
    selection.set("Conference", Some("afc".to_string()));
    assert!(apply_filters(&store, &selection, "").is_empty());
}

#[test]
fn facet_on_missing_column_is_a_no_op() {
    let store = qb_stats();
    let mut selection = FacetSelection::new();
    selection.set("Conference", Some("AFC".to_string()));
    let view = apply_filters(&store, &selection, "");
    assert_eq!(view.len(), store.len());
}

#[test]
fn search_is_case_insensitive_substring() {
    let store = qb_stats();
    let view = apply_filters(&store, &FacetSelection::new(), "mahomes");
    assert_eq!(view.len(), 1);
    assert_eq!(cell(&view.rows[0], "Player"), "Patrick Mahomes");
}

#[test]
fn search_skipped_for_resources_without_player_column() {
    let store = roster();
    let view = apply_filters(&store, &FacetSelection::new(), "mahomes");
    assert_eq!(view.len(), store.len());
}

#[test]
fn filtering_is_stable_and_idempotent() {
    let store = roster();
    let mut selection = FacetSelection::new();
    selection.set("Conference", Some("NFC".to_string()));
    let once = apply_filters(&store, &selection, "");
    let twice = apply_filters(&once, &selection, "");
    assert_eq!(once, twice);
    let teams: Vec<&str> = once.rows.iter().map(|r| cell(r, "Team")).collect();
    assert_eq!(
        teams,
        vec![
            "Philadelphia Eagles",
            "Detroit Lions",
            "Tampa Bay Buccaneers",
            "Los Angeles Rams",
            "Green Bay Packers"
        ]
    );
}

#[test]
fn clearing_search_preserves_facet_filters() {
    let store = qb_stats();
    let mut selection = FacetSelection::new();
    selection.set("Team", Some("BUF".to_string()));

    let with_search = apply_filters(&store, &selection, "allen");
    assert_eq!(with_search.len(), 1);

    // Search cleared: the facet-filtered set must survive, not reset to the
    // whole store.
    let cleared = apply_filters(&store, &selection, "");
    assert_eq!(cleared.len(), 1);
    assert_eq!(cell(&cleared.rows[0], "Player"), "Josh Allen");
}

#[test]
fn facet_options_stay_stable_while_other_facets_engage() {
    let mut state = AppState::new();
    let commands = state.set_category(Category::Roster);
    assert_eq!(commands.len(), 1);

    apply_delta(
        &mut state,
        Delta::Loaded {
            slot: Slot::League,
            resource: Category::Roster.path().to_string(),
            store: roster(),
        },
    );

    let options = extract_facets(&state.league, state.facet_columns());
    assert_eq!(options["Conference"], vec!["AFC", "NFC"]);

    state.selection.set("Conference", Some("AFC".to_string()));
    let visible = state.league_rows();
    assert!(visible.iter().all(|r| cell(r, "Conference") == "AFC"));
    assert_eq!(visible.len(), 5);

    // Option lists derive from the unfiltered load and must not shrink.
    assert_eq!(
        state.facet_options["Division"],
        vec!["East", "North", "South", "West"]
    );
}
