use std::collections::HashMap;

use crate::facets;
use crate::filter::{FacetSelection, apply_filters};
use crate::record::{self, GameRecord};
use crate::remap::{AliasTable, remap};
use crate::resources::{Category, Position, Resource, StatType, file_token, stat_types_for};
use crate::sort::{SortState, apply_sort};
use crate::store::{Row, RowStore, cell};
use crate::teams;

/// Season shown when a player is first opened.
pub const DEFAULT_SEASON: u16 = 2024;
/// Newest selectable season; experience counts back from here.
pub const LATEST_SEASON: u16 = 2025;
/// Sentinel for profile fields a lookup could not resolve.
pub const UNKNOWN: &str = "Unknown";

const LOG_CAPACITY: usize = 200;

/// Display order for the weekly view's game-type sections.
pub const GAME_TYPE_ORDER: [&str; 3] = ["Playoffs", "Regular Season", "Preseason"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    League,
    PlayerWeekly,
    PlayerCareer,
    GameDetail,
}

/// Which store a load targets. Resource identity is tracked per slot so a
/// slow response for a superseded selection can be recognized and dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    League,
    Weekly,
    Career(StatType),
    Profile,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerSelection {
    pub display_name: String,
    pub position: Position,
    pub token: String,
    pub team_slug: String,
    pub team_abbr: String,
    /// Seasons played; bounds the selectable weekly years. Stays 1 until
    /// the roster profile arrives.
    pub experience: u16,
    pub number: String,
}

/// Everything the single-game screen needs, derived once on row click.
#[derive(Debug, Clone, PartialEq)]
pub struct GameDetail {
    pub game: GameRecord,
    pub season: i32,
    pub home_team: String,
    pub away_team: String,
    pub home_record: String,
    pub away_record: String,
    pub row: Row,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ProviderCommand {
    Load { slot: Slot, resource: Resource },
}

#[derive(Debug, Clone, PartialEq)]
pub enum Delta {
    Loaded {
        slot: Slot,
        resource: String,
        store: RowStore,
    },
    LoadFailed {
        slot: Slot,
        resource: String,
        error: String,
    },
    Log(String),
}

pub struct AppState {
    pub screen: Screen,
    pub category: Category,
    /// Full unfiltered store for the current league resource. Filtered and
    /// sorted views are derived from it on demand, never stored back.
    pub league: RowStore,
    pub facet_options: HashMap<String, Vec<String>>,
    pub selection: FacetSelection,
    pub active_facet: usize,
    pub search: String,
    pub search_input: bool,
    pub sort: SortState,
    pub selected: usize,
    pub column_cursor: usize,
    pub player: Option<PlayerSelection>,
    pub season: u16,
    pub weekly: RowStore,
    pub careers: Vec<(StatType, RowStore)>,
    pub career_tab: usize,
    pub game: Option<GameDetail>,
    pub alias_table: AliasTable,
    pub help_overlay: bool,
    pub log: Vec<String>,
    pending: HashMap<Slot, String>,
    errors: HashMap<Slot, String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self {
            screen: Screen::League,
            category: Category::Qb,
            league: RowStore::default(),
            facet_options: HashMap::new(),
            selection: FacetSelection::new(),
            active_facet: 0,
            search: String::new(),
            search_input: false,
            sort: SortState::default(),
            selected: 0,
            column_cursor: 0,
            player: None,
            season: DEFAULT_SEASON,
            weekly: RowStore::default(),
            careers: Vec::new(),
            career_tab: 0,
            game: None,
            alias_table: AliasTable::default(),
            help_overlay: false,
            log: Vec::new(),
            pending: HashMap::new(),
            errors: HashMap::new(),
        }
    }

    pub fn push_log(&mut self, line: impl Into<String>) {
        self.log.push(line.into());
        if self.log.len() > LOG_CAPACITY {
            let drain = self.log.len() - LOG_CAPACITY;
            self.log.drain(..drain);
        }
    }

    pub fn load_error(&self, slot: Slot) -> Option<&str> {
        self.errors.get(&slot).map(String::as_str)
    }

    /// Register the expected resource for a slot and produce the matching
    /// provider command. All loads go through here so stale-delta detection
    /// always has the current expectation.
    fn issue(&mut self, slot: Slot, resource: Resource) -> ProviderCommand {
        self.pending.insert(slot, resource.path());
        ProviderCommand::Load { slot, resource }
    }

    pub fn initial_commands(&mut self) -> Vec<ProviderCommand> {
        vec![self.issue(Slot::League, Resource::Category(self.category))]
    }

    /// Switch the league tab: drops filters, search and sort, and reloads.
    pub fn set_category(&mut self, category: Category) -> Vec<ProviderCommand> {
        self.category = category;
        self.selection.clear();
        self.facet_options.clear();
        self.active_facet = 0;
        self.search.clear();
        self.search_input = false;
        self.sort.clear();
        self.selected = 0;
        self.column_cursor = 0;
        vec![self.issue(Slot::League, Resource::Category(category))]
    }

    pub fn cycle_category(&mut self) -> Vec<ProviderCommand> {
        self.set_category(self.category.next())
    }

    /// The league table as displayed: facet filters and search applied over
    /// the full load, then the active sort.
    pub fn league_rows(&self) -> Vec<Row> {
        let filtered = apply_filters(&self.league, &self.selection, &self.search);
        apply_sort(&filtered.rows, &self.sort)
    }

    pub fn facet_columns(&self) -> &'static [&'static str] {
        self.category.facet_columns()
    }

    pub fn next_facet(&mut self) {
        let count = self.facet_columns().len();
        if count > 0 {
            self.active_facet = (self.active_facet + 1) % count;
        }
    }

    /// Advance the focused facet through its option list, wrapping through
    /// "no filter". Option lists come from the unfiltered load, so they do
    /// not shrink as other facets engage.
    pub fn cycle_facet_value(&mut self) {
        let Some(facet) = self.facet_columns().get(self.active_facet).copied() else {
            return;
        };
        let options = self.facet_options.get(facet).cloned().unwrap_or_default();
        if options.is_empty() {
            return;
        }
        let next = match self.selection.get(facet) {
            None => options.first().cloned(),
            Some(current) => options
                .iter()
                .position(|v| v == current)
                .and_then(|i| options.get(i + 1))
                .cloned(),
        };
        self.selection.set(facet, next);
        self.selected = 0;
    }

    pub fn clear_facet_value(&mut self) {
        if let Some(facet) = self.facet_columns().get(self.active_facet).copied() {
            self.selection.set(facet, None);
            self.selected = 0;
        }
    }

    pub fn select_next(&mut self, row_count: usize) {
        if row_count > 0 && self.selected + 1 < row_count {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn column_next(&mut self, column_count: usize) {
        if column_count > 0 && self.column_cursor + 1 < column_count {
            self.column_cursor += 1;
        }
    }

    pub fn column_prev(&mut self) {
        self.column_cursor = self.column_cursor.saturating_sub(1);
    }

    /// Toggle the sort on the column under the cursor for whichever table
    /// the current screen shows.
    pub fn sort_by_cursor(&mut self) {
        let fields = self.visible_fields();
        if let Some(column) = fields.get(self.column_cursor) {
            let column = column.clone();
            self.sort.toggle(&column);
        }
    }

    /// Header list for the table the current screen displays.
    pub fn visible_fields(&self) -> Vec<String> {
        match self.screen {
            Screen::League => self.league.fields.clone(),
            Screen::PlayerWeekly | Screen::GameDetail => self.weekly_fields(),
            Screen::PlayerCareer => self
                .careers
                .get(self.career_tab)
                .map(|(_, store)| store.fields.clone())
                .unwrap_or_default(),
        }
    }

    fn player_position(&self) -> Option<Position> {
        self.player.as_ref().map(|p| p.position)
    }

    pub fn weekly_fields(&self) -> Vec<String> {
        match self.player_position() {
            Some(position) => remap(&self.weekly.fields, &[], position, &self.alias_table).0,
            None => self.weekly.fields.clone(),
        }
    }

    /// Weekly rows after the position-conditioned remap and the active sort.
    pub fn weekly_rows(&self) -> Vec<Row> {
        let rows = match self.player_position() {
            Some(position) => {
                remap(&self.weekly.fields, &self.weekly.rows, position, &self.alias_table).1
            }
            None => self.weekly.rows.clone(),
        };
        apply_sort(&rows, &self.sort)
    }

    /// Weekly rows grouped by game type in fixed display order. Rows with a
    /// game type outside the known three are appended under their own label.
    pub fn weekly_groups(&self) -> Vec<(String, Vec<Row>)> {
        let rows = self.weekly_rows();
        let mut groups: Vec<(String, Vec<Row>)> = GAME_TYPE_ORDER
            .iter()
            .map(|gt| (gt.to_string(), Vec::new()))
            .collect();
        for row in rows {
            let game_type = cell(&row, record::GAME_TYPE_COLUMN).to_string();
            match groups.iter_mut().find(|(gt, _)| *gt == game_type) {
                Some((_, bucket)) => bucket.push(row),
                None => groups.push((game_type, vec![row])),
            }
        }
        groups.retain(|(_, bucket)| !bucket.is_empty());
        groups
    }

    /// Flattened display order of the weekly screen, matching
    /// `weekly_groups`; the row cursor indexes into this.
    pub fn weekly_display_rows(&self) -> Vec<Row> {
        self.weekly_groups()
            .into_iter()
            .flat_map(|(_, rows)| rows)
            .collect()
    }

    pub fn career_rows(&self) -> Vec<Row> {
        self.careers
            .get(self.career_tab)
            .map(|(_, store)| apply_sort(&store.rows, &self.sort))
            .unwrap_or_default()
    }

    /// Regular-season record over the resident weekly rows. Recomputed on
    /// every call; never cached apart from its source rows.
    pub fn player_record(&self) -> String {
        record::compute_record(&self.weekly.rows)
    }

    /// Drill down from a league row into the player's weekly view. Issues
    /// the weekly load, every career load for the position, and the roster
    /// profile lookup; weekly and career settle independently.
    pub fn select_player(&mut self) -> Vec<ProviderCommand> {
        if self.screen != Screen::League {
            return Vec::new();
        }
        let Some(position) = self.category.position() else {
            return Vec::new();
        };
        let rows = self.league_rows();
        let Some(row) = rows.get(self.selected) else {
            return Vec::new();
        };
        let display_name = cell(row, crate::filter::PLAYER_COLUMN).to_string();
        if display_name.is_empty() {
            return Vec::new();
        }

        let token = file_token(&display_name);
        let team_value = cell(row, "Team").to_string();
        let (team_slug, team_abbr) = match teams::from_row(row) {
            Some(team) => (team.slug.to_string(), team.abbr.to_string()),
            None => (team_value.to_lowercase(), team_value.clone()),
        };

        let selection = PlayerSelection {
            display_name,
            position,
            token: token.clone(),
            team_slug: team_slug.clone(),
            team_abbr,
            experience: 1,
            number: String::new(),
        };

        self.season = DEFAULT_SEASON;
        self.weekly = RowStore::default();
        self.careers = stat_types_for(position)
            .iter()
            .map(|st| (*st, RowStore::default()))
            .collect();
        self.career_tab = 0;
        self.sort.clear();
        self.selected = 0;
        self.column_cursor = 0;
        self.game = None;
        self.screen = Screen::PlayerWeekly;

        let mut commands = vec![
            self.issue(
                Slot::Weekly,
                Resource::Weekly {
                    team_slug,
                    token: token.clone(),
                    year: self.season,
                },
            ),
            self.issue(Slot::Profile, Resource::SkillRoster),
        ];
        for stat_type in stat_types_for(position) {
            commands.push(self.issue(
                Slot::Career(*stat_type),
                Resource::Career {
                    position,
                    stat_type: *stat_type,
                    token: token.clone(),
                },
            ));
        }
        self.player = Some(selection);
        commands
    }

    /// Weekly <-> career tab toggle; both datasets were loaded on entry, so
    /// no new fetch is issued.
    pub fn toggle_player_tab(&mut self) {
        self.screen = match self.screen {
            Screen::PlayerWeekly => Screen::PlayerCareer,
            Screen::PlayerCareer => Screen::PlayerWeekly,
            other => other,
        };
        self.sort.clear();
        self.selected = 0;
        self.column_cursor = 0;
    }

    pub fn cycle_career_tab(&mut self) {
        if !self.careers.is_empty() {
            self.career_tab = (self.career_tab + 1) % self.careers.len();
            self.sort.clear();
            self.selected = 0;
            self.column_cursor = 0;
        }
    }

    /// Step to the previous season (wrapping back to the latest), bounded by
    /// the player's experience, and re-fetch that year's weekly file.
    pub fn cycle_season(&mut self) -> Vec<ProviderCommand> {
        let Some(player) = self.player.clone() else {
            return Vec::new();
        };
        let span = player.experience.clamp(1, LATEST_SEASON - 2000);
        let oldest = LATEST_SEASON - (span - 1);
        self.season = if self.season <= oldest {
            LATEST_SEASON
        } else {
            self.season - 1
        };
        self.selected = 0;
        vec![self.issue(
            Slot::Weekly,
            Resource::Weekly {
                team_slug: player.team_slug.clone(),
                token: player.token.clone(),
                year: self.season,
            },
        )]
    }

    /// Drill down from a weekly row into the single-game screen. All team
    /// and record lookups degrade to sentinels; nothing here fetches.
    pub fn open_game(&mut self) {
        if self.screen != Screen::PlayerWeekly {
            return;
        }
        let Some(player) = self.player.clone() else {
            return;
        };
        let rows = self.weekly_display_rows();
        let Some(row) = rows.get(self.selected) else {
            return;
        };
        let Some(game) = record::parse_game(row) else {
            self.push_log("[INFO] Selected row is not a game");
            return;
        };

        let season = record::season_year(&game.date).unwrap_or(i32::from(self.season));
        let own_abbr = self
            .own_team_for_season(&player, season)
            .unwrap_or(player.team_abbr.clone());
        let opponent = teams::by_nickname(&game.opponent);
        let opponent_abbr = opponent
            .map(|t| t.abbr.to_string())
            .unwrap_or_else(|| game.opponent.clone());
        let opponent_record = opponent
            .and_then(|t| t.record_for(season))
            .unwrap_or(teams::UNKNOWN_RECORD)
            .to_string();
        let player_record = self.player_record();

        let (home_team, away_team, home_record, away_record) = if game.opponent_home {
            (opponent_abbr, own_abbr, opponent_record, player_record)
        } else {
            (own_abbr, opponent_abbr, player_record, opponent_record)
        };

        self.game = Some(GameDetail {
            game,
            season,
            home_team,
            away_team,
            home_record,
            away_record,
            row: row.clone(),
        });
        self.screen = Screen::GameDetail;
    }

    /// The player's own team for a season, resolved from the resident
    /// career rows (YEAR column -> TEAM full name -> abbreviation).
    fn own_team_for_season(&self, player: &PlayerSelection, season: i32) -> Option<String> {
        let lookup_type = if player.position == Position::K {
            StatType::Kicking
        } else {
            StatType::Rushing
        };
        let store = self
            .careers
            .iter()
            .find(|(st, _)| *st == lookup_type)
            .map(|(_, store)| store)?;
        let entry = store.rows.iter().find(|row| {
            cell(row, "YEAR")
                .trim()
                .parse::<i32>()
                .is_ok_and(|y| y == season)
        })?;
        teams::by_full_name(cell(entry, "TEAM")).map(|t| t.abbr.to_string())
    }

    /// Back one level: game detail returns to the still-resident weekly
    /// view without re-fetching; the player screens return to the league.
    pub fn back(&mut self) -> Vec<ProviderCommand> {
        match self.screen {
            Screen::GameDetail => {
                self.game = None;
                self.screen = Screen::PlayerWeekly;
                Vec::new()
            }
            Screen::PlayerWeekly | Screen::PlayerCareer => self.back_to_league(),
            Screen::League => Vec::new(),
        }
    }

    /// Back to the top: clears all player and game state plus the search
    /// text, and re-issues the league category load.
    pub fn back_to_league(&mut self) -> Vec<ProviderCommand> {
        self.player = None;
        self.game = None;
        self.weekly = RowStore::default();
        self.careers.clear();
        self.career_tab = 0;
        self.search.clear();
        self.search_input = false;
        self.sort.clear();
        self.selected = 0;
        self.column_cursor = 0;
        self.screen = Screen::League;
        vec![self.issue(Slot::League, Resource::Category(self.category))]
    }
}

/// Fold one provider message into the state. Loads are last-write-wins on
/// resource identity: a delta whose resource no longer matches what its slot
/// is waiting for came from a superseded fetch and is dropped, whatever its
/// arrival order. A failed load clears the slot's store to empty rather than
/// keeping the previous dataset.
pub fn apply_delta(state: &mut AppState, delta: Delta) {
    match delta {
        Delta::Loaded {
            slot,
            resource,
            store,
        } => {
            if !expected(state, slot, &resource) {
                state.push_log(format!("[INFO] Dropped stale load: {resource}"));
                return;
            }
            state.errors.remove(&slot);
            match slot {
                Slot::League => {
                    state.facet_options =
                        facets::extract_facets(&store, state.category.facet_columns());
                    state.league = store;
                    let rows = state.league_rows().len();
                    state.selected = state.selected.min(rows.saturating_sub(1));
                }
                Slot::Weekly => {
                    state.weekly = store;
                    state.selected = 0;
                }
                Slot::Career(stat_type) => {
                    if let Some(entry) = state.careers.iter_mut().find(|(st, _)| *st == stat_type)
                    {
                        entry.1 = store;
                    }
                }
                Slot::Profile => apply_profile(state, &store),
            }
        }
        Delta::LoadFailed {
            slot,
            resource,
            error,
        } => {
            if !expected(state, slot, &resource) {
                return;
            }
            match slot {
                Slot::League => {
                    state.league = RowStore::default();
                    state.facet_options.clear();
                    state.selected = 0;
                }
                Slot::Weekly => {
                    state.weekly = RowStore::default();
                    state.selected = 0;
                }
                Slot::Career(stat_type) => {
                    if let Some(entry) = state.careers.iter_mut().find(|(st, _)| *st == stat_type)
                    {
                        entry.1 = RowStore::default();
                    }
                }
                Slot::Profile => {
                    if let Some(player) = state.player.as_mut() {
                        player.number = UNKNOWN.to_string();
                    }
                }
            }
            state.errors.insert(slot, error.clone());
            state.push_log(format!("[WARN] Load failed for {resource}: {error}"));
        }
        Delta::Log(line) => state.push_log(line),
    }
}

fn expected(state: &AppState, slot: Slot, resource: &str) -> bool {
    state.pending.get(&slot).is_some_and(|want| want == resource)
}

/// Fill experience and jersey number from the full skill roster. The file's
/// header names drift between exports, so the lookup is positional: name in
/// the first column, number in the second, experience in the seventh. A
/// miss leaves the defaults and logs; it never errors.
fn apply_profile(state: &mut AppState, store: &RowStore) {
    let Some(player) = state.player.as_mut() else {
        return;
    };
    let (Some(name_col), Some(number_col), Some(experience_col)) = (
        store.fields.first().cloned(),
        store.fields.get(1).cloned(),
        store.fields.get(6).cloned(),
    ) else {
        return;
    };

    let wanted = normalized(&player.display_name);
    let found = store
        .rows
        .iter()
        .find(|row| normalized(cell(row, &name_col)) == wanted);
    match found {
        Some(row) => {
            if let Ok(years) = cell(row, &experience_col).trim().parse::<u16>() {
                player.experience = years.max(1);
            }
            player.number = cell(row, &number_col).trim().to_string();
        }
        None => {
            let name = player.display_name.clone();
            player.number = UNKNOWN.to_string();
            state.push_log(format!("[INFO] No roster profile for {name}"));
        }
    }
}

fn normalized(name: &str) -> String {
    name.chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_lowercase()
}
