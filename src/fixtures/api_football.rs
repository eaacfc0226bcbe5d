use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::{Days, Local};
use reqwest::Client;
use std::time::Duration;
use tracing::debug;
use url::Url;

use super::models::{FixtureRecord, LeagueInfo, TeamRef};
use super::provider::FixtureSource;

/// Upcoming fixtures from the API-Football v3 REST API.
/// Docs: <https://www.api-football.com/documentation-v3>
pub struct ApiFootball {
    http: Client,
    api_key: String,
    /// Base URL for overriding in tests
    base_url: String,
    host: String,
    season: i32,
}

impl ApiFootball {
    pub fn new(api_key: &str, base_url: &str, season: i32, timeout: Duration) -> Result<Self> {
        let parsed = Url::parse(base_url)
            .with_context(|| format!("Invalid API-Football URL: {base_url}"))?;
        let host = parsed
            .host_str()
            .context("API-Football URL has no host")?
            .to_string();
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;
        Ok(ApiFootball {
            http,
            api_key: api_key.to_string(),
            base_url: base_url.trim_end_matches('/').to_string(),
            host,
            season,
        })
    }
}

#[async_trait]
impl FixtureSource for ApiFootball {
    fn name(&self) -> &str {
        "API-Football"
    }

    async fn fetch_upcoming(&self, league_id: i64, window_days: i64) -> Result<Vec<FixtureRecord>> {
        let today = Local::now().date_naive();
        let until = today + Days::new(window_days.max(0) as u64);
        let url = format!("{}/fixtures", self.base_url);
        debug!("Fetching fixtures from {} (league={}, {}..{})", url, league_id, today, until);

        let resp = self
            .http
            .get(&url)
            .header("x-rapidapi-host", &self.host)
            .header("x-rapidapi-key", &self.api_key)
            .query(&[
                ("league", league_id.to_string()),
                ("season", self.season.to_string()),
                ("from", today.format("%Y-%m-%d").to_string()),
                ("to", until.format("%Y-%m-%d").to_string()),
            ])
            .send()
            .await
            .context("API-Football request failed")?;

        if !resp.status().is_success() {
            anyhow::bail!("API-Football error: {}", resp.status());
        }

        let raw: serde_json::Value = resp
            .json()
            .await
            .context("Failed to parse API-Football response")?;

        Ok(parse_fixtures_response(&raw))
    }
}

/// Parse the `response` array of a `/fixtures` payload. Entries missing a
/// fixture id or either team are skipped.
fn parse_fixtures_response(raw: &serde_json::Value) -> Vec<FixtureRecord> {
    let items = match raw["response"].as_array() {
        Some(a) => a,
        None => return vec![],
    };

    items
        .iter()
        .filter_map(|item| {
            let fixture = &item["fixture"];
            let league = &item["league"];
            Some(FixtureRecord {
                fixture_id: fixture["id"].as_i64()?,
                date: fixture["date"].as_str().unwrap_or_default().to_string(),
                venue: fixture["venue"]["name"].as_str().map(str::to_string),
                home: parse_team(&item["teams"]["home"])?,
                away: parse_team(&item["teams"]["away"])?,
                league: LeagueInfo {
                    name: league["name"].as_str().unwrap_or("unknown").to_string(),
                    country: league["country"].as_str().unwrap_or_default().to_string(),
                    flag: league["flag"].as_str().map(str::to_string),
                },
            })
        })
        .collect()
}

fn parse_team(team: &serde_json::Value) -> Option<TeamRef> {
    Some(TeamRef {
        id: team["id"].as_i64()?,
        name: team["name"].as_str()?.to_string(),
        logo: team["logo"].as_str().unwrap_or_default().to_string(),
    })
}
