use std::fmt;

/// Player positions that carry dedicated stat files. Defense rows appear in
/// the league table but have no per-player drill-down resources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Position {
    Qb,
    Rb,
    Wr,
    Te,
    K,
    Dst,
}

impl Position {
    pub fn as_str(self) -> &'static str {
        match self {
            Position::Qb => "QB",
            Position::Rb => "RB",
            Position::Wr => "WR",
            Position::Te => "TE",
            Position::K => "K",
            Position::Dst => "DST",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "QB" => Some(Position::Qb),
            "RB" => Some(Position::Rb),
            "WR" => Some(Position::Wr),
            "TE" => Some(Position::Te),
            "K" => Some(Position::K),
            "DST" => Some(Position::Dst),
            _ => None,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatType {
    Passing,
    Rushing,
    Receiving,
    Kicking,
}

impl StatType {
    pub fn as_str(self) -> &'static str {
        match self {
            StatType::Passing => "passing",
            StatType::Rushing => "rushing",
            StatType::Receiving => "receiving",
            StatType::Kicking => "kicking",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            StatType::Passing => "Passing",
            StatType::Rushing => "Rushing",
            StatType::Receiving => "Receiving",
            StatType::Kicking => "Kicking",
        }
    }
}

/// Career stat files carried per position, primary type first.
pub fn stat_types_for(position: Position) -> &'static [StatType] {
    match position {
        Position::Qb => &[StatType::Passing, StatType::Rushing],
        Position::Rb => &[StatType::Rushing, StatType::Receiving],
        Position::Wr | Position::Te => &[StatType::Receiving, StatType::Rushing],
        Position::K => &[StatType::Kicking],
        Position::Dst => &[],
    }
}

/// Top-level league resources: one tab per stat category plus the schedule
/// and the roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Qb,
    Rb,
    Wr,
    Te,
    Kicker,
    Defense,
    Schedule,
    Roster,
}

impl Category {
    pub const ALL: [Category; 8] = [
        Category::Qb,
        Category::Rb,
        Category::Wr,
        Category::Te,
        Category::Kicker,
        Category::Defense,
        Category::Schedule,
        Category::Roster,
    ];

    pub fn path(self) -> &'static str {
        match self {
            Category::Qb => "official_qb_stats.csv",
            Category::Rb => "official_rb_stats.csv",
            Category::Wr => "official_wr_stats.csv",
            Category::Te => "official_te_stats.csv",
            Category::Kicker => "official_kicker_stats.csv",
            Category::Defense => "official_defense_stats.csv",
            Category::Schedule => "schedule.csv",
            Category::Roster => "nfl_official_team_roster.csv",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::Qb => "Quarterback Stats",
            Category::Rb => "Running Back Stats",
            Category::Wr => "Wide Receiver Stats",
            Category::Te => "Tight End Stats",
            Category::Kicker => "Kicker Stats",
            Category::Defense => "Defense Stats",
            Category::Schedule => "Schedule",
            Category::Roster => "NFL Roster",
        }
    }

    /// Facet columns this resource is known to carry.
    pub fn facet_columns(self) -> &'static [&'static str] {
        match self {
            Category::Schedule => &["Match Number"],
            Category::Roster => &["Conference", "Division", "Team"],
            _ => &[],
        }
    }

    /// Whether rows name individual players (enables the text search).
    pub fn has_players(self) -> bool {
        !matches!(self, Category::Schedule | Category::Roster)
    }

    /// The position whose drill-down resources back this category.
    pub fn position(self) -> Option<Position> {
        match self {
            Category::Qb => Some(Position::Qb),
            Category::Rb => Some(Position::Rb),
            Category::Wr => Some(Position::Wr),
            Category::Te => Some(Position::Te),
            Category::Kicker => Some(Position::K),
            _ => None,
        }
    }

    pub fn next(self) -> Category {
        let idx = Category::ALL.iter().position(|c| *c == self).unwrap_or(0);
        Category::ALL[(idx + 1) % Category::ALL.len()]
    }
}

/// Full-roster file used for experience and jersey-number lookups.
pub const SKILL_ROSTER_PATH: &str = "fullNFLSkillRoster.csv";

/// Normalize a display name into the token used by every dependent file
/// path: whitespace runs collapse to a single underscore, apostrophes become
/// hyphens. Weekly, career and roster lookups must all agree on this.
pub fn file_token(name: &str) -> String {
    let mut token = String::with_capacity(name.len());
    let mut in_space = false;
    for ch in name.chars() {
        if ch.is_whitespace() {
            in_space = true;
            continue;
        }
        if in_space && !token.is_empty() {
            token.push('_');
        }
        in_space = false;
        token.push(if ch == '\'' { '-' } else { ch });
    }
    token
}

/// Identity of one fetchable CSV dataset. The rendered path doubles as the
/// resource id used for stale-load detection.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Resource {
    Category(Category),
    Weekly {
        team_slug: String,
        token: String,
        year: u16,
    },
    Career {
        position: Position,
        stat_type: StatType,
        token: String,
    },
    SkillRoster,
}

impl Resource {
    pub fn path(&self) -> String {
        match self {
            Resource::Category(category) => category.path().to_string(),
            Resource::Weekly {
                team_slug,
                token,
                year,
            } => format!("skillPlayersStats/{team_slug}/{token}-{year}.csv"),
            Resource::Career {
                position,
                stat_type,
                token,
            } => format!(
                "skillPlayerCareerStats/{}/{}/{}_{}.csv",
                position.as_str(),
                stat_type.as_str(),
                token,
                stat_type.as_str()
            ),
            Resource::SkillRoster => SKILL_ROSTER_PATH.to_string(),
        }
    }
}
