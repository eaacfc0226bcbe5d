use serde::Serialize;

/// One side of a fixture as reported by the fixture source.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamRef {
    pub id: i64,
    pub name: String,
    /// Badge URL; empty when the source has none
    pub logo: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeagueInfo {
    pub name: String,
    pub country: String,
    pub flag: Option<String>,
}

/// An upcoming match.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FixtureRecord {
    pub fixture_id: i64,
    /// ISO-8601 kick-off time
    pub date: String,
    pub venue: Option<String>,
    pub home: TeamRef,
    pub away: TeamRef,
    pub league: LeagueInfo,
}

impl TeamRef {
    pub fn new(id: i64, name: &str) -> Self {
        TeamRef {
            id,
            name: name.to_string(),
            logo: String::new(),
        }
    }
}
