//! Terminal walk-through of the predictor over the upcoming fixture list.

use anyhow::Result;
use chrono::NaiveDateTime;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io::{self, Write};

use crate::fixtures::{FixtureRecord, FixtureService};
use crate::predictor::{Prediction, PredictionRequest, Predictor};

const RULE: &str = "======================================================================";
const THIN_RULE: &str = "----------------------------------------------------------------------";

pub async fn run(
    predictor: &Predictor,
    fixtures: &FixtureService,
    league_id: i64,
    window_days: i64,
    seed: Option<u64>,
) -> Result<()> {
    let matches = fixtures.upcoming(league_id, window_days).await?;
    let mut rng = match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_entropy(),
    };

    let predicted: Vec<(FixtureRecord, Prediction)> = matches
        .into_iter()
        .map(|m| {
            let req = PredictionRequest::new(m.home.name.clone(), m.away.name.clone())
                .with_ids(Some(m.home.id), Some(m.away.id));
            let pred = predictor.predict_with(&req, &mut rng);
            (m, pred)
        })
        .collect();

    write_report(&mut io::stdout().lock(), &predicted)?;
    Ok(())
}

/// Write predictions grouped under a header each time the league changes.
pub fn write_report(
    out: &mut impl Write,
    predicted: &[(FixtureRecord, Prediction)],
) -> io::Result<()> {
    writeln!(out, "Football Match Predictor - injury-aware predictions")?;
    writeln!(out, "{RULE}")?;

    let mut current_league: Option<&str> = None;
    for (m, p) in predicted {
        if current_league != Some(m.league.name.as_str()) {
            if current_league.is_some() {
                writeln!(out, "\n{RULE}")?;
            }
            current_league = Some(m.league.name.as_str());
            let flag = m.league.flag.as_deref().unwrap_or("");
            writeln!(out, "\n{} {}", flag, m.league.name.to_uppercase())?;
            writeln!(out, "{THIN_RULE}")?;
        }

        writeln!(out, "\n{} vs {}", m.home.name, m.away.name)?;
        writeln!(out, "{}", kickoff_label(&m.date))?;
        writeln!(out, "\nPrediction: {}", p.outcome)?;
        writeln!(out, "Confidence: {}%", p.confidence)?;
        writeln!(out, "Score: {}", p.score_prediction)?;
        writeln!(out, "\nProbabilities:")?;
        writeln!(out, "   Home Win: {}%", p.home_win_prob)?;
        writeln!(out, "   Draw: {}%", p.draw_prob)?;
        writeln!(out, "   Away Win: {}%", p.away_win_prob)?;
        writeln!(out, "\nKey Factors:")?;
        for (i, reason) in p.reasons.iter().enumerate() {
            writeln!(out, "   {}. {}", i + 1, reason)?;
        }
    }

    writeln!(out, "\n{RULE}")?;
    writeln!(out, "\nTotal matches analyzed: {}", predicted.len())?;
    Ok(())
}

/// "Sun, Oct 19 • 15:00", or the raw string when it is not a plain ISO date-time.
fn kickoff_label(date: &str) -> String {
    chrono::DateTime::parse_from_rfc3339(date)
        .map(|d| d.naive_local())
        .or_else(|_| NaiveDateTime::parse_from_str(date, "%Y-%m-%dT%H:%M:%S"))
        .map(|d| d.format("%a, %b %d • %H:%M").to_string())
        .unwrap_or_else(|_| date.to_string())
}
