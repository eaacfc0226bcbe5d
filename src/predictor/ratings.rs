//! Static team data the engine scores with: strength ratings and the list of
//! key players currently out injured.

use std::collections::HashMap;

/// Rating given to any team missing from the strength table.
pub const DEFAULT_STRENGTH: i32 = 70;

const TEAM_STRENGTHS: &[(&str, i32)] = &[
    // Premier League
    ("Manchester City", 95),
    ("Arsenal", 90),
    ("Liverpool", 89),
    ("Aston Villa", 82),
    ("Tottenham", 81),
    ("Manchester United", 80),
    ("Chelsea", 79),
    ("Newcastle United", 78),
    ("Brighton", 75),
    ("West Ham", 74),
    ("Everton", 70),
    ("Fulham", 69),
    // La Liga
    ("Real Madrid", 96),
    ("Barcelona", 91),
    ("Atletico Madrid", 87),
    ("Real Sociedad", 79),
    ("Athletic Bilbao", 77),
    ("Real Betis", 76),
    ("Villarreal", 75),
    ("Valencia", 73),
    ("Sevilla", 72),
    ("Girona", 74),
    // Serie A
    ("Inter Milan", 92),
    ("AC Milan", 85),
    ("Juventus", 84),
    ("Napoli", 83),
    ("Roma", 80),
    ("Lazio", 79),
    ("Atalanta", 82),
    ("Fiorentina", 76),
    ("Bologna", 74),
    // Bundesliga
    ("Bayern Munich", 94),
    ("Bayer Leverkusen", 88),
    ("RB Leipzig", 84),
    ("Borussia Dortmund", 86),
    ("Union Berlin", 76),
    ("Eintracht Frankfurt", 75),
    ("VfB Stuttgart", 77),
    ("Wolfsburg", 73),
    ("Freiburg", 74),
    // Ligue 1
    ("Paris Saint-Germain", 93),
    ("Monaco", 80),
    ("Marseille", 79),
    ("Lyon", 77),
    ("Lille", 78),
    ("Nice", 76),
    // Other Champions League clubs
    ("Porto", 81),
    ("Benfica", 80),
    ("Sporting CP", 79),
    ("Ajax", 78),
    ("PSV", 80),
    ("Celtic", 74),
    ("Red Bull Salzburg", 76),
    ("Shakhtar Donetsk", 75),
    // National teams (World Cup 2026)
    ("Brazil", 94),
    ("Argentina", 93),
    ("France", 92),
    ("England", 90),
    ("Spain", 89),
    ("Germany", 88),
    ("Portugal", 87),
    ("Belgium", 86),
    ("Netherlands", 87),
    ("Italy", 85),
    ("Uruguay", 82),
    ("Colombia", 81),
    ("Mexico", 78),
    ("USA", 80),
    ("Canada", 76),
    ("Japan", 77),
    ("South Korea", 77),
    ("Morocco", 79),
    ("Croatia", 83),
    ("Denmark", 80),
    ("Switzerland", 79),
    ("Poland", 78),
    ("Senegal", 78),
    ("Nigeria", 76),
    ("Egypt", 76),
    ("Ghana", 75),
    ("Cameroon", 75),
    ("Iran", 74),
    ("Saudi Arabia", 73),
    ("Australia", 75),
    ("Ecuador", 77),
    ("Peru", 75),
    ("Chile", 76),
];

const INJURIES: &[(&str, &[&str])] = &[
    ("Manchester United", &["Casemiro", "Lisandro Martinez"]),
    ("Liverpool", &[]),
    ("Manchester City", &["Kevin De Bruyne"]),
    ("Arsenal", &[]),
    ("Real Madrid", &[]),
    ("Barcelona", &["Pedri"]),
    ("Inter Milan", &[]),
    ("Juventus", &["Paul Pogba"]),
    ("Bayern Munich", &[]),
    ("Borussia Dortmund", &["Marco Reus"]),
];

/// Team name → strength rating. Lookups are exact and case-sensitive.
#[derive(Debug, Clone)]
pub struct TeamStrengthTable {
    ratings: HashMap<String, i32>,
    default: i32,
}

impl TeamStrengthTable {
    pub fn new<I, S>(entries: I, default: i32) -> Self
    where
        I: IntoIterator<Item = (S, i32)>,
        S: Into<String>,
    {
        TeamStrengthTable {
            ratings: entries.into_iter().map(|(k, v)| (k.into(), v)).collect(),
            default,
        }
    }

    pub fn builtin() -> Self {
        Self::new(TEAM_STRENGTHS.iter().copied(), DEFAULT_STRENGTH)
    }

    pub fn strength(&self, team: &str) -> i32 {
        self.ratings.get(team).copied().unwrap_or(self.default)
    }

    pub fn len(&self) -> usize {
        self.ratings.len()
    }
}

/// Team name → injured key players, in the order they were reported.
#[derive(Debug, Clone, Default)]
pub struct InjuryTable {
    players: HashMap<String, Vec<String>>,
}

impl InjuryTable {
    pub fn new<I, S, P>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, P)>,
        S: Into<String>,
        P: IntoIterator,
        P::Item: Into<String>,
    {
        InjuryTable {
            players: entries
                .into_iter()
                .map(|(team, out)| (team.into(), out.into_iter().map(Into::into).collect()))
                .collect(),
        }
    }

    pub fn builtin() -> Self {
        Self::new(INJURIES.iter().map(|(team, out)| (*team, out.iter().copied())))
    }

    /// Injured players for `team`; empty when the team is unknown.
    pub fn injured(&self, team: &str) -> &[String] {
        self.players.get(team).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn count(&self, team: &str) -> usize {
        self.injured(team).len()
    }
}
