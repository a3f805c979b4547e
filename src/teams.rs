use crate::store::{Row, cell};

/// Sentinel shown when a record or team lookup misses; lookups degrade,
/// they never error.
pub const UNKNOWN_RECORD: &str = "-";

/// Static franchise reference data: abbreviation, nickname, full name, the
/// slug used in file paths, and final regular-season records by season.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TeamRef {
    pub abbr: &'static str,
    pub nickname: &'static str,
    pub full_name: &'static str,
    pub slug: &'static str,
    pub records: &'static [(u16, &'static str)],
}

impl TeamRef {
    pub fn record_for(&self, year: i32) -> Option<&'static str> {
        self.records
            .iter()
            .find(|(y, _)| i32::from(*y) == year)
            .map(|(_, record)| *record)
    }
}

pub fn by_abbr(abbr: &str) -> Option<&'static TeamRef> {
    TEAMS.iter().find(|t| t.abbr == abbr)
}

pub fn by_nickname(nickname: &str) -> Option<&'static TeamRef> {
    TEAMS.iter().find(|t| t.nickname == nickname)
}

pub fn by_full_name(full_name: &str) -> Option<&'static TeamRef> {
    TEAMS.iter().find(|t| t.full_name == full_name)
}

/// Resolve the team a league row names, trying the abbreviation first (stat
/// files) and the full name second (roster file).
pub fn from_row(row: &Row) -> Option<&'static TeamRef> {
    let value = cell(row, "Team");
    if value.is_empty() {
        return None;
    }
    by_abbr(value).or_else(|| by_full_name(value))
}

pub static TEAMS: [TeamRef; 32] = [
    TeamRef {
        abbr: "ARI",
        nickname: "Cardinals",
        full_name: "Arizona Cardinals",
        slug: "arizona-cardinals",
        records: &[(2015, "13-3"), (2016, "7-8-1"), (2017, "8-8"), (2018, "3-13"), (2019, "5-10-1"), (2020, "8-8"), (2021, "11-6"), (2022, "4-13"), (2023, "4-13"), (2024, "8-9"), (2025, "0-0")],
    },
    TeamRef {
        abbr: "ATL",
        nickname: "Falcons",
        full_name: "Atlanta Falcons",
        slug: "atlanta-falcons",
        records: &[(2015, "8-8"), (2016, "11-5"), (2017, "10-6"), (2018, "7-9"), (2019, "7-9"), (2020, "4-12"), (2021, "7-10"), (2022, "7-10"), (2023, "7-10"), (2024, "8-9"), (2025, "0-0")],
    },
    TeamRef {
        abbr: "BAL",
        nickname: "Ravens",
        full_name: "Baltimore Ravens",
        slug: "baltimore-ravens",
        records: &[(2015, "5-11"), (2016, "8-8"), (2017, "9-7"), (2018, "10-6"), (2019, "14-2"), (2020, "11-5"), (2021, "8-9"), (2022, "10-7"), (2023, "13-4"), (2024, "12-5"), (2025, "0-0")],
    },
    TeamRef {
        abbr: "BUF",
        nickname: "Bills",
        full_name: "Buffalo Bills",
        slug: "buffalo-bills",
        records: &[(2015, "8-8"), (2016, "7-9"), (2017, "9-7"), (2018, "6-10"), (2019, "10-6"), (2020, "13-3"), (2021, "11-6"), (2022, "13-3"), (2023, "11-6"), (2024, "13-4"), (2025, "0-0")],
    },
    TeamRef {
        abbr: "CAR",
        nickname: "Panthers",
        full_name: "Carolina Panthers",
        slug: "carolina-panthers",
        records: &[(2015, "15-1"), (2016, "6-10"), (2017, "11-5"), (2018, "7-9"), (2019, "5-11"), (2020, "5-11"), (2021, "5-12"), (2022, "7-10"), (2023, "2-15"), (2024, "5-12"), (2025, "0-0")],
    },
    TeamRef {
        abbr: "CHI",
        nickname: "Bears",
        full_name: "Chicago Bears",
        slug: "chicago-bears",
        records: &[(2015, "6-10"), (2016, "3-13"), (2017, "5-11"), (2018, "12-4"), (2019, "8-8"), (2020, "8-8"), (2021, "6-11"), (2022, "3-14"), (2023, "7-10"), (2024, "5-12"), (2025, "0-0")],
    },
    TeamRef {
        abbr: "CIN",
        nickname: "Bengals",
        full_name: "Cincinnati Bengals",
        slug: "cincinnati-bengals",
        records: &[(2015, "12-4"), (2016, "6-9-1"), (2017, "7-9"), (2018, "6-10"), (2019, "2-14"), (2020, "4-11-1"), (2021, "10-7"), (2022, "12-4"), (2023, "9-8"), (2024, "9-8"), (2025, "0-0")],
    },
    TeamRef {
        abbr: "CLE",
        nickname: "Browns",
        full_name: "Cleveland Browns",
        slug: "cleveland-browns",
        records: &[(2015, "3-13"), (2016, "1-15"), (2017, "0-16"), (2018, "7-8-1"), (2019, "6-10"), (2020, "11-5"), (2021, "8-9"), (2022, "7-10"), (2023, "11-6"), (2024, "3-14"), (2025, "0-0")],
    },
    TeamRef {
        abbr: "DAL",
        nickname: "Cowboys",
        full_name: "Dallas Cowboys",
        slug: "dallas-cowboys",
        records: &[(2015, "4-12"), (2016, "13-3"), (2017, "9-7"), (2018, "10-6"), (2019, "8-8"), (2020, "6-10"), (2021, "12-5"), (2022, "12-5"), (2023, "12-5"), (2024, "7-10"), (2025, "0-0")],
    },
    TeamRef {
        abbr: "DEN",
        nickname: "Broncos",
        full_name: "Denver Broncos",
        slug: "denver-broncos",
        records: &[(2015, "12-4"), (2016, "9-7"), (2017, "5-11"), (2018, "6-10"), (2019, "7-9"), (2020, "5-11"), (2021, "7-10"), (2022, "5-12"), (2023, "8-9"), (2024, "10-7"), (2025, "0-0")],
    },
    TeamRef {
        abbr: "DET",
        nickname: "Lions",
        full_name: "Detroit Lions",
        slug: "detroit-lions",
        records: &[(2015, "7-9"), (2016, "9-7"), (2017, "9-7"), (2018, "6-10"), (2019, "3-12-1"), (2020, "5-11"), (2021, "3-13-1"), (2022, "9-8"), (2023, "12-5"), (2024, "15-2"), (2025, "0-0")],
    },
    TeamRef {
        abbr: "GB",
        nickname: "Packers",
        full_name: "Green Bay Packers",
        slug: "green-bay-packers",
        records: &[(2015, "10-6"), (2016, "10-6"), (2017, "7-9"), (2018, "6-9-1"), (2019, "13-3"), (2020, "13-3"), (2021, "13-4"), (2022, "8-9"), (2023, "9-8"), (2024, "11-6"), (2025, "0-0")],
    },
    TeamRef {
        abbr: "HOU",
        nickname: "Texans",
        full_name: "Houston Texans",
        slug: "houston-texans",
        records: &[(2015, "9-7"), (2016, "9-7"), (2017, "4-12"), (2018, "11-5"), (2019, "10-6"), (2020, "4-12"), (2021, "4-13"), (2022, "3-13-1"), (2023, "10-7"), (2024, "10-7"), (2025, "0-0")],
    },
    TeamRef {
        abbr: "IND",
        nickname: "Colts",
        full_name: "Indianapolis Colts",
        slug: "indianapolis-colts",
        records: &[(2015, "8-8"), (2016, "8-8"), (2017, "4-12"), (2018, "10-6"), (2019, "7-9"), (2020, "11-5"), (2021, "9-8"), (2022, "4-12-1"), (2023, "9-8"), (2024, "8-9"), (2025, "0-0")],
    },
    TeamRef {
        abbr: "JAX",
        nickname: "Jaguars",
        full_name: "Jacksonville Jaguars",
        slug: "jacksonville-jaguars",
        records: &[(2015, "5-11"), (2016, "3-13"), (2017, "10-6"), (2018, "5-11"), (2019, "6-10"), (2020, "1-15"), (2021, "3-14"), (2022, "9-8"), (2023, "9-8"), (2024, "4-13"), (2025, "0-0")],
    },
    TeamRef {
        abbr: "KC",
        nickname: "Chiefs",
        full_name: "Kansas City Chiefs",
        slug: "kansas-city-chiefs",
        records: &[(2015, "11-5"), (2016, "12-4"), (2017, "10-6"), (2018, "12-4"), (2019, "12-4"), (2020, "14-2"), (2021, "12-5"), (2022, "14-3"), (2023, "11-6"), (2024, "15-2"), (2025, "0-0")],
    },
    TeamRef {
        abbr: "LAC",
        nickname: "Chargers",
        full_name: "Los Angeles Chargers",
        slug: "los-angeles-chargers",
        records: &[(2015, "4-12"), (2016, "5-11"), (2017, "9-7"), (2018, "12-4"), (2019, "5-11"), (2020, "7-9"), (2021, "9-8"), (2022, "10-7"), (2023, "5-12"), (2024, "11-6"), (2025, "0-0")],
    },
    TeamRef {
        abbr: "LAR",
        nickname: "Rams",
        full_name: "Los Angeles Rams",
        slug: "los-angeles-rams",
        records: &[(2015, "7-9"), (2016, "4-12"), (2017, "11-5"), (2018, "13-3"), (2019, "9-7"), (2020, "10-6"), (2021, "12-5"), (2022, "5-12"), (2023, "10-7"), (2024, "10-7"), (2025, "0-0")],
    },
    TeamRef {
        abbr: "LV",
        nickname: "Raiders",
        full_name: "Las Vegas Raiders",
        slug: "las-vegas-raiders",
        records: &[(2015, "7-9"), (2016, "12-4"), (2017, "6-10"), (2018, "4-12"), (2019, "7-9"), (2020, "8-8"), (2021, "10-7"), (2022, "6-11"), (2023, "8-9"), (2024, "4-13"), (2025, "0-0")],
    },
    TeamRef {
        abbr: "MIA",
        nickname: "Dolphins",
        full_name: "Miami Dolphins",
        slug: "miami-dolphins",
        records: &[(2015, "6-10"), (2016, "10-6"), (2017, "6-10"), (2018, "7-9"), (2019, "5-11"), (2020, "10-6"), (2021, "9-8"), (2022, "9-8"), (2023, "11-6"), (2024, "8-9"), (2025, "0-0")],
    },
    TeamRef {
        abbr: "MIN",
        nickname: "Vikings",
        full_name: "Minnesota Vikings",
        slug: "minnesota-vikings",
        records: &[(2015, "11-5"), (2016, "8-8"), (2017, "13-3"), (2018, "8-7-1"), (2019, "10-6"), (2020, "7-9"), (2021, "8-9"), (2022, "13-4"), (2023, "7-10"), (2024, "14-3"), (2025, "0-0")],
    },
    TeamRef {
        abbr: "NE",
        nickname: "Patriots",
        full_name: "New England Patriots",
        slug: "new-england-patriots",
        records: &[(2015, "12-4"), (2016, "14-2"), (2017, "13-3"), (2018, "11-5"), (2019, "12-4"), (2020, "7-9"), (2021, "10-7"), (2022, "8-9"), (2023, "4-13"), (2024, "4-13"), (2025, "0-0")],
    },
    TeamRef {
        abbr: "NO",
        nickname: "Saints",
        full_name: "New Orleans Saints",
        slug: "new-orleans-saints",
        records: &[(2015, "7-9"), (2016, "7-9"), (2017, "11-5"), (2018, "13-3"), (2019, "13-3"), (2020, "12-4"), (2021, "9-8"), (2022, "7-10"), (2023, "9-8"), (2024, "5-12"), (2025, "0-0")],
    },
    TeamRef {
        abbr: "NYG",
        nickname: "Giants",
        full_name: "New York Giants",
        slug: "new-york-giants",
        records: &[(2015, "10-6"), (2016, "11-5"), (2017, "13-3"), (2018, "5-11"), (2019, "4-12"), (2020, "6-10"), (2021, "4-13"), (2022, "9-7-1"), (2023, "6-11"), (2024, "3-14"), (2025, "0-0")],
    },
    TeamRef {
        abbr: "NYJ",
        nickname: "Jets",
        full_name: "New York Jets",
        slug: "new-york-jets",
        records: &[(2015, "10-6"), (2016, "5-11"), (2017, "5-11"), (2018, "4-12"), (2019, "7-9"), (2020, "2-14"), (2021, "4-13"), (2022, "7-10"), (2023, "7-10"), (2024, "5-12"), (2025, "0-0")],
    },
    TeamRef {
        abbr: "PHI",
        nickname: "Eagles",
        full_name: "Philadelphia Eagles",
        slug: "philadelphia-eagles",
        records: &[(2015, "7-9"), (2016, "7-9"), (2017, "13-3"), (2018, "9-7"), (2019, "9-7"), (2020, "4-11-1"), (2021, "9-8"), (2022, "14-3"), (2023, "11-6"), (2024, "14-3"), (2025, "0-0")],
    },
    TeamRef {
        abbr: "PIT",
        nickname: "Steelers",
        full_name: "Pittsburgh Steelers",
        slug: "pittsburgh-steelers",
        records: &[(2015, "10-6"), (2016, "11-5"), (2017, "13-3"), (2018, "9-6-1"), (2019, "8-8"), (2020, "12-4"), (2021, "9-7-1"), (2022, "9-8"), (2023, "10-7"), (2024, "10-7"), (2025, "0-0")],
    },
    TeamRef {
        abbr: "SEA",
        nickname: "Seahawks",
        full_name: "Seattle Seahawks",
        slug: "seattle-seahawks",
        records: &[(2015, "10-6"), (2016, "10-5-1"), (2017, "9-7"), (2018, "10-6"), (2019, "11-5"), (2020, "12-4"), (2021, "7-10"), (2022, "9-8"), (2023, "9-8"), (2024, "10-7"), (2025, "0-0")],
    },
    TeamRef {
        abbr: "SF",
        nickname: "49ers",
        full_name: "San Francisco 49ers",
        slug: "san-francisco-49ers",
        records: &[(2015, "5-11"), (2016, "2-14"), (2017, "6-10"), (2018, "4-12"), (2019, "13-3"), (2020, "6-10"), (2021, "10-7"), (2022, "13-4"), (2023, "12-5"), (2024, "6-11"), (2025, "0-0")],
    },
    TeamRef {
        abbr: "TB",
        nickname: "Buccaneers",
        full_name: "Tampa Bay Buccaneers",
        slug: "tampa-bay-buccaneers",
        records: &[(2015, "6-10"), (2016, "9-7"), (2017, "5-11"), (2018, "5-11"), (2019, "7-9"), (2020, "11-5"), (2021, "13-4"), (2022, "8-9"), (2023, "9-8"), (2024, "10-7"), (2025, "0-0")],
    },
    TeamRef {
        abbr: "TEN",
        nickname: "Titans",
        full_name: "Tennessee Titans",
        slug: "tennessee-titans",
        records: &[(2015, "3-13"), (2016, "9-7"), (2017, "9-7"), (2018, "9-7"), (2019, "9-7"), (2020, "11-5"), (2021, "12-5"), (2022, "7-10"), (2023, "6-11"), (2024, "3-14"), (2025, "0-0")],
    },
    TeamRef {
        abbr: "WAS",
        nickname: "Commanders",
        full_name: "Washington Commanders",
        slug: "washington-commanders",
        records: &[(2015, "9-7"), (2016, "8-7-1"), (2017, "7-9"), (2018, "7-9"), (2019, "3-13"), (2020, "7-9"), (2021, "7-10"), (2022, "8-8-1"), (2023, "4-13"), (2024, "12-5"), (2025, "0-0")],
    },
];
