use anyhow::Result;
use clap::Parser;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

mod api;
mod config;
mod demo;
mod fixtures;
mod predictor;

use api::AppState;
use config::Config;
use fixtures::{ApiFootball, FixtureService, FixtureSource};
use predictor::Predictor;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialise tracing / logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = Config::parse();
    config.validate()?;

    let predictor = Predictor::default();
    info!(
        "Predictor ready ({} rated teams)",
        predictor.strengths().len()
    );

    let fetch_timeout = Duration::from_secs(config.fetch_timeout_secs);
    let fixtures = match config.football_api_key.as_deref() {
        Some(key) => {
            let client = ApiFootball::new(
                key,
                &config.football_api_url,
                config.season,
                fetch_timeout,
            )?;
            info!("Fixture source: {} ({})", client.name(), config.football_api_url);
            let source: Arc<dyn FixtureSource> = Arc::new(client);
            FixtureService::new(Some(source), fetch_timeout, config.fetch_retries)
                .with_backoff(Duration::from_millis(config.fetch_backoff_ms))
        }
        None => {
            info!("FOOTBALL_API_KEY not set – using mock fixtures");
            FixtureService::mock_only()
        }
    }
    .with_mock_fallback(config.mock_fallback);

    if config.demo {
        return demo::run(
            &predictor,
            &fixtures,
            config.default_league,
            config.window_days,
            config.seed,
        )
        .await;
    }

    let app = api::router(AppState {
        predictor,
        fixtures,
        default_league: config.default_league,
        window_days: config.window_days,
    });
    let addr: SocketAddr = config.api_addr.parse()?;
    info!("Football Predictor API listening on http://{}", addr);
    info!("Predictions at http://{}/predictions", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app).await?;

    Ok(())
}
