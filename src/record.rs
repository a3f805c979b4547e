use chrono::{Datelike, NaiveDate};

use crate::store::{Row, cell};

pub const GAME_TYPE_COLUMN: &str = "Game Type";
pub const RESULT_COLUMN: &str = "RESULT";
pub const OPPONENT_COLUMN: &str = "OPP";
pub const WEEK_COLUMN: &str = "WK";
pub const DATE_COLUMN: &str = "Game Date";
pub const REGULAR_SEASON: &str = "Regular Season";

/// Win/loss/tie record over a player's weekly rows. Only regular-season
/// games count; the leading letter of RESULT classifies the game and
/// anything unrecognized is skipped outright. Ties only appear in the
/// output when nonzero.
pub fn compute_record(rows: &[Row]) -> String {
    let mut wins = 0u32;
    let mut losses = 0u32;
    let mut ties = 0u32;

    for row in rows {
        if cell(row, GAME_TYPE_COLUMN) != REGULAR_SEASON {
            continue;
        }
        match cell(row, RESULT_COLUMN).chars().next() {
            Some('W') => wins += 1,
            Some('L') => losses += 1,
            Some('T') => ties += 1,
            _ => {}
        }
    }

    if ties > 0 {
        format!("{wins}-{losses}-{ties}")
    } else {
        format!("{wins}-{losses}")
    }
}

/// NFL seasons span two calendar years; January and February games belong
/// to the previous year's season.
pub fn season_year(date: &str) -> Option<i32> {
    let parsed = NaiveDate::parse_from_str(date.trim(), "%m/%d/%Y").ok()?;
    let year = parsed.year();
    if parsed.month() <= 2 {
        Some(year - 1)
    } else {
        Some(year)
    }
}

/// A single game as derived from one weekly-stat row. Scores follow the
/// source convention: the first number in RESULT is the player's team, the
/// second the opponent's; an `@` prefix on OPP marks the opponent as the
/// home side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameRecord {
    pub week: String,
    pub date: String,
    pub opponent: String,
    pub opponent_home: bool,
    pub result_letter: Option<char>,
    pub player_score: String,
    pub opponent_score: String,
}

impl GameRecord {
    pub fn home_score(&self) -> &str {
        if self.opponent_home {
            &self.opponent_score
        } else {
            &self.player_score
        }
    }

    pub fn away_score(&self) -> &str {
        if self.opponent_home {
            &self.player_score
        } else {
            &self.opponent_score
        }
    }
}

/// Parse one weekly row into a game. Rows without an opponent or a date are
/// not games (season-total and blank-ish rows fall out here).
pub fn parse_game(row: &Row) -> Option<GameRecord> {
    let opp_raw = cell(row, OPPONENT_COLUMN);
    let date = cell(row, DATE_COLUMN);
    if opp_raw.is_empty() || date.is_empty() {
        return None;
    }

    let opponent_home = opp_raw.starts_with('@');
    let opponent = opp_raw.trim_start_matches('@').to_string();

    let result = cell(row, RESULT_COLUMN);
    let result_letter = result
        .chars()
        .next()
        .filter(|c| matches!(c, 'W' | 'L' | 'T'));
    let (player_score, opponent_score) = split_score(result);

    Some(GameRecord {
        week: cell(row, WEEK_COLUMN).to_string(),
        date: date.to_string(),
        opponent,
        opponent_home,
        result_letter,
        player_score,
        opponent_score,
    })
}

/// "W 24-17" -> ("24", "17"). Tolerates a missing letter and stray spaces;
/// anything that does not split on a hyphen yields empty scores.
fn split_score(result: &str) -> (String, String) {
    let body = result
        .trim_start_matches(['W', 'L', 'T'])
        .trim();
    match body.split_once('-') {
        Some((first, second)) => (first.trim().to_string(), second.trim().to_string()),
        None => (String::new(), String::new()),
    }
}
