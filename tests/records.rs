use gridiron_terminal::record::{compute_record, parse_game, season_year};
use gridiron_terminal::resources::file_token;
use gridiron_terminal::store::Row;

fn game_row(result: &str, game_type: &str) -> Row {
    [
        ("WK", "1"),
        ("Game Date", "9/8/2024"),
        ("OPP", "Cardinals"),
        ("RESULT", result),
        ("Game Type", game_type),
    ]
    .iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect()
}

#[test]
fn record_counts_regular_season_results() {
    let rows = vec![
        game_row("W 24-17", "Regular Season"),
        game_row("L 10-20", "Regular Season"),
        game_row("W 30-10", "Regular Season"),
        game_row("T 20-20", "Regular Season"),
    ];
    assert_eq!(compute_record(&rows), "2-1-1");
}

#[test]
fn ties_omitted_when_zero() {
    let rows = vec![
        game_row("W 24-17", "Regular Season"),
        game_row("L 10-20", "Regular Season"),
    ];
    assert_eq!(compute_record(&rows), "1-1");
}

#[test]
fn only_regular_season_games_count() {
    let rows = vec![
        game_row("W 31-9", "Playoffs"),
        game_row("W 24-17", "Regular Season"),
        game_row("L 7-21", "Preseason"),
    ];
    assert_eq!(compute_record(&rows), "1-0");
}

#[test]
fn unrecognized_results_are_skipped() {
    let rows = vec![
        game_row("W 24-17", "Regular Season"),
        game_row("", "Regular Season"),
        game_row("BYE", "Regular Season"),
    ];
    assert_eq!(compute_record(&rows), "1-0");
}

#[test]
fn january_games_belong_to_previous_season() {
    assert_eq!(season_year("1/15/2025"), Some(2024));
    assert_eq!(season_year("2/9/2025"), Some(2024));
    assert_eq!(season_year("11/3/2024"), Some(2024));
    assert_eq!(season_year("9/8/2024"), Some(2024));
    assert_eq!(season_year("not a date"), None);
}

#[test]
fn file_tokens_normalize_names() {
    assert_eq!(file_token("Patrick Mahomes"), "Patrick_Mahomes");
    assert_eq!(file_token("Ja'Marr Chase"), "Ja-Marr_Chase");
    assert_eq!(file_token("Amon-Ra  St. Brown"), "Amon-Ra_St._Brown");
}

#[test]
fn parse_game_reads_home_and_away_sides() {
    let mut row = game_row("W 24-17", "Playoffs");
    row.insert("OPP".to_string(), "@Chiefs".to_string());
    row.insert("Game Date".to_string(), "1/15/2025".to_string());

    let game = parse_game(&row).expect("row should parse as a game");
    assert_eq!(game.opponent, "Chiefs");
    assert!(game.opponent_home);
    assert_eq!(game.result_letter, Some('W'));
    // Player score first, opponent second; opponent is the home side here.
    assert_eq!(game.player_score, "24");
    assert_eq!(game.opponent_score, "17");
    assert_eq!(game.home_score(), "17");
    assert_eq!(game.away_score(), "24");
}

#[test]
fn parse_game_without_opponent_is_none() {
    let mut row = game_row("W 24-17", "Regular Season");
    row.insert("OPP".to_string(), String::new());
    assert!(parse_game(&row).is_none());
}

#[test]
fn parse_game_tolerates_missing_result() {
    let row = game_row("", "Regular Season");
    let game = parse_game(&row).expect("date and opponent are enough");
    assert_eq!(game.result_letter, None);
    assert_eq!(game.player_score, "");
    assert_eq!(game.opponent_score, "");
}
