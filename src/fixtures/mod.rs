pub mod api_football;
pub mod leagues;
pub mod mock;
pub mod models;
pub mod provider;

pub use api_football::ApiFootball;
pub use models::FixtureRecord;
pub use provider::FixtureSource;

use anyhow::Result;
use chrono::Local;
use rand::Rng;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

/// Upcoming fixtures with timeout, retry and mock fallback applied around an
/// optional live source.
///
/// Without a live source (no API key configured) the mock list is served
/// directly.
#[derive(Clone)]
pub struct FixtureService {
    source: Option<Arc<dyn FixtureSource>>,
    attempt_timeout: Duration,
    retries: u32,
    backoff: Duration,
    mock_fallback: bool,
}

impl FixtureService {
    pub fn new(
        source: Option<Arc<dyn FixtureSource>>,
        attempt_timeout: Duration,
        retries: u32,
    ) -> Self {
        FixtureService {
            source,
            attempt_timeout,
            retries,
            backoff: Duration::from_millis(250),
            mock_fallback: true,
        }
    }

    pub fn mock_only() -> Self {
        Self::new(None, Duration::from_secs(10), 0)
    }

    pub fn with_backoff(mut self, backoff: Duration) -> Self {
        self.backoff = backoff;
        self
    }

    pub fn with_mock_fallback(mut self, enabled: bool) -> Self {
        self.mock_fallback = enabled;
        self
    }

    pub async fn upcoming(&self, league_id: i64, window_days: i64) -> Result<Vec<FixtureRecord>> {
        let Some(source) = &self.source else {
            if !self.mock_fallback {
                anyhow::bail!("No fixture source configured and mock fallback is disabled");
            }
            info!("No live fixture source configured, serving mock fixtures");
            return Ok(mock::mock_fixtures(Local::now().date_naive()));
        };

        match self.fetch_with_retries(source.as_ref(), league_id, window_days).await {
            Ok(fixtures) => Ok(fixtures),
            Err(e) if self.mock_fallback => {
                warn!("{} unavailable, falling back to mock fixtures: {:#}", source.name(), e);
                Ok(mock::mock_fixtures(Local::now().date_naive()))
            }
            Err(e) => Err(e),
        }
    }

    async fn fetch_with_retries(
        &self,
        source: &dyn FixtureSource,
        league_id: i64,
        window_days: i64,
    ) -> Result<Vec<FixtureRecord>> {
        let mut attempt = 0u32;
        loop {
            let fetch = source.fetch_upcoming(league_id, window_days);
            let res = tokio::time::timeout(self.attempt_timeout, fetch).await;
            let err = match res {
                Ok(Ok(fixtures)) => {
                    info!(
                        "{} returned {} fixture(s) for league {}",
                        source.name(),
                        fixtures.len(),
                        league_id
                    );
                    return Ok(fixtures);
                }
                Ok(Err(e)) => e,
                Err(_) => anyhow::anyhow!("timed out after {:?}", self.attempt_timeout),
            };

            if attempt >= self.retries {
                return Err(err.context(format!(
                    "{} failed after {} attempt(s)",
                    source.name(),
                    attempt + 1
                )));
            }

            let delay = self.retry_delay(attempt);
            warn!(
                "{} attempt {} failed: {:#}; retrying in {:?}",
                source.name(),
                attempt + 1,
                err,
                delay
            );
            tokio::time::sleep(delay).await;
            attempt += 1;
        }
    }

    /// Exponential backoff with up to 25% random jitter.
    fn retry_delay(&self, attempt: u32) -> Duration {
        let base = self.backoff.saturating_mul(1u32 << attempt.min(6));
        let jitter_ms = (base.as_millis() as u64) / 4;
        if jitter_ms == 0 {
            return base;
        }
        base + Duration::from_millis(rand::thread_rng().gen_range(0..=jitter_ms))
    }
}
