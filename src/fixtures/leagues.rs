use serde::Serialize;

pub const FLAG_ENGLAND: &str = "\u{1F3F4}\u{E0067}\u{E0062}\u{E0065}\u{E006E}\u{E0067}\u{E007F}";
pub const FLAG_SPAIN: &str = "\u{1F1EA}\u{1F1F8}";
pub const FLAG_ITALY: &str = "\u{1F1EE}\u{1F1F9}";
pub const FLAG_GERMANY: &str = "\u{1F1E9}\u{1F1EA}";
pub const FLAG_FRANCE: &str = "\u{1F1EB}\u{1F1F7}";
pub const FLAG_EUROPE: &str = "\u{26BD}";
pub const FLAG_INTERNATIONAL: &str = "\u{1F3C6}";

pub const PREMIER_LEAGUE: i64 = 39;

/// A competition the API advertises, keyed by its API-Football id.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct League {
    pub id: i64,
    pub name: &'static str,
    pub country: &'static str,
    pub flag: &'static str,
}

pub const LEAGUES: [League; 6] = [
    League { id: PREMIER_LEAGUE, name: "Premier League", country: "England", flag: FLAG_ENGLAND },
    League { id: 140, name: "La Liga", country: "Spain", flag: FLAG_SPAIN },
    League { id: 135, name: "Serie A", country: "Italy", flag: FLAG_ITALY },
    League { id: 78, name: "Bundesliga", country: "Germany", flag: FLAG_GERMANY },
    League { id: 61, name: "Ligue 1", country: "France", flag: FLAG_FRANCE },
    League { id: 2, name: "Champions League", country: "Europe", flag: FLAG_EUROPE },
];

pub fn find_league(id: i64) -> Option<&'static League> {
    LEAGUES.iter().find(|l| l.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leagues_have_unique_ids() {
        let mut ids: Vec<i64> = LEAGUES.iter().map(|l| l.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), LEAGUES.len());
    }

    #[test]
    fn find_by_id() {
        assert_eq!(find_league(140).map(|l| l.name), Some("La Liga"));
        assert!(find_league(999).is_none());
    }
}
