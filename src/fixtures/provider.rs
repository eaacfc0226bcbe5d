use anyhow::Result;
use async_trait::async_trait;

use super::models::FixtureRecord;

/// Trait that every upcoming-fixture source must implement.
#[async_trait]
pub trait FixtureSource: Send + Sync {
    /// Fixtures for `league_id` kicking off within the next `window_days`.
    async fn fetch_upcoming(&self, league_id: i64, window_days: i64) -> Result<Vec<FixtureRecord>>;

    /// Human-readable name for logging.
    fn name(&self) -> &str;
}
