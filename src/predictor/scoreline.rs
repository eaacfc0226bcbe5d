use super::engine::Outcome;
use super::random::RandomSource;

const CLOSE_DRAWS: [&str; 2] = ["1-1", "2-2"];

const HOME_ROUT: [&str; 3] = ["3-0", "4-1", "3-1"];
const HOME_COMFORTABLE: [&str; 3] = ["2-0", "3-1", "2-1"];
const HOME_NARROW: [&str; 3] = ["2-1", "1-0", "2-0"];

const AWAY_ROUT: [&str; 3] = ["0-3", "1-4", "1-3"];
const AWAY_COMFORTABLE: [&str; 3] = ["0-2", "1-3", "1-2"];
const AWAY_NARROW: [&str; 3] = ["1-2", "0-1", "0-2"];

/// Pick a plausible "home-away" scoreline for an already decided outcome.
///
/// The winner's margin grows with the rating gap, and a gap over 10 becomes a
/// rout when the loser is missing more than one key player.
pub fn predict_scoreline(
    home_strength: i32,
    away_strength: i32,
    outcome: Outcome,
    home_injuries: usize,
    away_injuries: usize,
    rng: &mut dyn RandomSource,
) -> String {
    let diff = (home_strength - away_strength).abs();

    let choices: &[&str] = match outcome {
        Outcome::Draw if diff < 10 => &CLOSE_DRAWS,
        Outcome::Draw => return "1-1".to_string(),
        Outcome::HomeWin => winner_band(
            diff,
            away_injuries,
            &HOME_ROUT,
            &HOME_COMFORTABLE,
            &HOME_NARROW,
        ),
        Outcome::AwayWin => winner_band(
            diff,
            home_injuries,
            &AWAY_ROUT,
            &AWAY_COMFORTABLE,
            &AWAY_NARROW,
        ),
    };

    choices[rng.index(choices.len())].to_string()
}

fn winner_band<'a>(
    diff: i32,
    loser_injuries: usize,
    rout: &'a [&'a str],
    comfortable: &'a [&'a str],
    narrow: &'a [&'a str],
) -> &'a [&'a str] {
    if diff > 20 || (diff > 10 && loser_injuries > 1) {
        rout
    } else if diff > 10 {
        comfortable
    } else {
        narrow
    }
}

/// Split a "X-Y" scoreline into its two goal counts.
#[cfg(test)]
pub fn parse_scoreline(s: &str) -> Option<(u32, u32)> {
    let (home, away) = s.split_once('-')?;
    Some((home.parse().ok()?, away.parse().ok()?))
}
