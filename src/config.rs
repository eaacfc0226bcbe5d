use clap::Parser;

/// Rule-based football match predictor and its JSON API
#[derive(Parser, Debug, Clone)]
#[command(name = "football-predictor", version, about)]
pub struct Config {
    /// API listen address
    #[arg(long, env = "API_ADDR", default_value = "0.0.0.0:5000")]
    pub api_addr: String,

    /// API-Football key. Without one the mock fixture list is served.
    #[arg(long, env = "FOOTBALL_API_KEY")]
    pub football_api_key: Option<String>,

    /// API-Football base URL
    #[arg(
        long,
        env = "FOOTBALL_API_URL",
        default_value = "https://v3.football.api-sports.io"
    )]
    pub football_api_url: String,

    /// Season requested from the fixture API
    #[arg(long, env = "SEASON", default_value = "2025")]
    pub season: i32,

    /// League used when a request does not name one (39 = Premier League)
    #[arg(long, env = "DEFAULT_LEAGUE", default_value = "39")]
    pub default_league: i64,

    /// How many days ahead to look for fixtures
    #[arg(long, env = "WINDOW_DAYS", default_value = "7")]
    pub window_days: i64,

    /// Per-attempt timeout for fixture requests, in seconds
    #[arg(long, env = "FETCH_TIMEOUT_SECS", default_value = "10")]
    pub fetch_timeout_secs: u64,

    /// Extra attempts after a failed fixture request
    #[arg(long, env = "FETCH_RETRIES", default_value = "2")]
    pub fetch_retries: u32,

    /// Base delay before the first retry, in milliseconds; doubles per retry
    #[arg(long, env = "FETCH_BACKOFF_MS", default_value = "250")]
    pub fetch_backoff_ms: u64,

    /// Serve the mock fixture list when the fixture API is unavailable
    #[arg(long, env = "MOCK_FALLBACK", default_value = "true", action = clap::ArgAction::Set)]
    pub mock_fallback: bool,

    /// Print predictions for upcoming fixtures and exit instead of serving
    #[arg(long)]
    pub demo: bool,

    /// Seed for the demo run's random draws
    #[arg(long, requires = "demo")]
    pub seed: Option<u64>,
}

impl Config {
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.api_addr.parse::<std::net::SocketAddr>().is_err() {
            anyhow::bail!("api_addr must be a socket address, got '{}'", self.api_addr);
        }
        if let Err(e) = url::Url::parse(&self.football_api_url) {
            anyhow::bail!("football_api_url is not a valid URL: {}", e);
        }
        if !(1..=60).contains(&self.window_days) {
            anyhow::bail!("window_days must be between 1 and 60");
        }
        if self.fetch_timeout_secs == 0 {
            anyhow::bail!("fetch_timeout_secs must be positive");
        }
        if self.fetch_retries > 10 {
            anyhow::bail!("fetch_retries must be at most 10");
        }
        if self.football_api_key.as_deref().is_some_and(|k| k.trim().is_empty()) {
            anyhow::bail!("FOOTBALL_API_KEY is set but empty");
        }
        Ok(())
    }
}
