//! Fixed fixture list served whenever the live fixture source is unavailable.

use chrono::{Days, NaiveDate, NaiveTime};

use super::leagues::{
    FLAG_ENGLAND, FLAG_EUROPE, FLAG_GERMANY, FLAG_INTERNATIONAL, FLAG_ITALY, FLAG_SPAIN,
};
use super::models::{FixtureRecord, LeagueInfo, TeamRef};

struct MockFixture {
    id: i64,
    /// Days after tomorrow
    day_offset: u64,
    kickoff: (u32, u32),
    venue: &'static str,
    home: (i64, &'static str),
    away: (i64, &'static str),
    league: (&'static str, &'static str, &'static str),
}

const PREMIER_LEAGUE: (&str, &str, &str) = ("Premier League", "England", FLAG_ENGLAND);
const CHAMPIONS_LEAGUE: (&str, &str, &str) = ("Champions League", "Europe", FLAG_EUROPE);
const LA_LIGA: (&str, &str, &str) = ("La Liga", "Spain", FLAG_SPAIN);
const SERIE_A: (&str, &str, &str) = ("Serie A", "Italy", FLAG_ITALY);
const BUNDESLIGA: (&str, &str, &str) = ("Bundesliga", "Germany", FLAG_GERMANY);
const WC_QUALIFIERS: (&str, &str, &str) = (
    "World Cup 2026 Qualifiers",
    "International",
    FLAG_INTERNATIONAL,
);

const MOCK_FIXTURES: [MockFixture; 11] = [
    MockFixture {
        id: 1,
        day_offset: 0,
        kickoff: (15, 0),
        venue: "Old Trafford",
        home: (33, "Manchester United"),
        away: (40, "Liverpool"),
        league: PREMIER_LEAGUE,
    },
    MockFixture {
        id: 2,
        day_offset: 0,
        kickoff: (17, 30),
        venue: "Etihad Stadium",
        home: (50, "Manchester City"),
        away: (42, "Arsenal"),
        league: PREMIER_LEAGUE,
    },
    MockFixture {
        id: 9,
        day_offset: 2,
        kickoff: (20, 0),
        venue: "Santiago Bernabéu",
        home: (541, "Real Madrid"),
        away: (157, "Bayern Munich"),
        league: CHAMPIONS_LEAGUE,
    },
    MockFixture {
        id: 10,
        day_offset: 2,
        kickoff: (20, 0),
        venue: "Etihad Stadium",
        home: (50, "Manchester City"),
        away: (505, "Inter Milan"),
        league: CHAMPIONS_LEAGUE,
    },
    MockFixture {
        id: 11,
        day_offset: 3,
        kickoff: (20, 0),
        venue: "Camp Nou",
        home: (529, "Barcelona"),
        away: (212, "Paris Saint-Germain"),
        league: CHAMPIONS_LEAGUE,
    },
    MockFixture {
        id: 3,
        day_offset: 1,
        kickoff: (20, 0),
        venue: "Santiago Bernabéu",
        home: (541, "Real Madrid"),
        away: (529, "Barcelona"),
        league: LA_LIGA,
    },
    MockFixture {
        id: 5,
        day_offset: 2,
        kickoff: (19, 45),
        venue: "San Siro",
        home: (505, "Inter Milan"),
        away: (496, "Juventus"),
        league: SERIE_A,
    },
    MockFixture {
        id: 7,
        day_offset: 3,
        kickoff: (17, 30),
        venue: "Allianz Arena",
        home: (157, "Bayern Munich"),
        away: (165, "Borussia Dortmund"),
        league: BUNDESLIGA,
    },
    MockFixture {
        id: 12,
        day_offset: 4,
        kickoff: (19, 0),
        venue: "Wembley Stadium",
        home: (10, "England"),
        away: (768, "Italy"),
        league: WC_QUALIFIERS,
    },
    MockFixture {
        id: 13,
        day_offset: 4,
        kickoff: (21, 0),
        venue: "Maracanã",
        home: (6, "Brazil"),
        away: (26, "Argentina"),
        league: WC_QUALIFIERS,
    },
    MockFixture {
        id: 14,
        day_offset: 5,
        kickoff: (20, 0),
        venue: "Stade de France",
        home: (2, "France"),
        away: (25, "Germany"),
        league: WC_QUALIFIERS,
    },
];

/// Build the mock fixture list for matches starting tomorrow relative to
/// `today`. The same `today` always yields the same list.
pub fn mock_fixtures(today: NaiveDate) -> Vec<FixtureRecord> {
    let tomorrow = today + Days::new(1);
    MOCK_FIXTURES
        .iter()
        .map(|m| {
            let day = tomorrow + Days::new(m.day_offset);
            let kickoff = NaiveTime::from_hms_opt(m.kickoff.0, m.kickoff.1, 0).unwrap_or_default();
            let (name, country, flag) = m.league;
            FixtureRecord {
                fixture_id: m.id,
                date: day.and_time(kickoff).format("%Y-%m-%dT%H:%M:%S").to_string(),
                venue: Some(m.venue.to_string()),
                home: TeamRef::new(m.home.0, m.home.1),
                away: TeamRef::new(m.away.0, m.away.1),
                league: LeagueInfo {
                    name: name.to_string(),
                    country: country.to_string(),
                    flag: Some(flag.to_string()),
                },
            }
        })
        .collect()
}
