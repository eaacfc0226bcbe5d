pub mod error;

pub use error::ApiError;

use axum::{
    extract::{Query, State},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use chrono::Local;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::collections::HashMap;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::fixtures::leagues::{find_league, LEAGUES};
use crate::fixtures::{FixtureRecord, FixtureService};
use crate::predictor::{Outcome, Prediction, PredictionRequest, Predictor};

pub struct AppState {
    pub predictor: Predictor,
    pub fixtures: FixtureService,
    pub default_league: i64,
    pub window_days: i64,
}

/// Build the Axum router for the prediction API.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/predictions", get(predictions_handler))
        .route("/predict", post(predict_handler))
        .route("/leagues", get(leagues_handler))
        .route("/health", get(health_handler))
        .layer(CorsLayer::permissive())
        .with_state(Arc::new(state))
}

/// GET /
async fn index_handler() -> impl IntoResponse {
    Json(json!({
        "name": "Football Match Predictor API",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "/predictions": "GET - Get upcoming match predictions",
            "/predict": "POST - Predict specific match",
            "/leagues": "GET - Get available leagues",
        }
    }))
}

#[derive(Debug, Serialize)]
struct TeamSummary {
    name: String,
    logo: String,
}

#[derive(Debug, Serialize)]
struct OutcomeProbabilities {
    home: f64,
    draw: f64,
    away: f64,
}

/// A fixture joined with its prediction, as listed by GET /predictions.
#[derive(Debug, Serialize)]
struct MatchPrediction {
    match_id: i64,
    date: String,
    league: String,
    venue: String,
    home_team: TeamSummary,
    away_team: TeamSummary,
    prediction: Outcome,
    confidence: f64,
    score_prediction: String,
    probabilities: OutcomeProbabilities,
    reasons: Vec<String>,
}

impl MatchPrediction {
    fn new(fixture: FixtureRecord, pred: Prediction) -> Self {
        MatchPrediction {
            match_id: fixture.fixture_id,
            date: fixture.date,
            league: fixture.league.name,
            venue: fixture.venue.unwrap_or_else(|| "Unknown".to_string()),
            home_team: TeamSummary {
                name: fixture.home.name,
                logo: fixture.home.logo,
            },
            away_team: TeamSummary {
                name: fixture.away.name,
                logo: fixture.away.logo,
            },
            prediction: pred.outcome,
            confidence: pred.confidence,
            score_prediction: pred.score_prediction,
            probabilities: OutcomeProbabilities {
                home: pred.home_win_prob,
                draw: pred.draw_prob,
                away: pred.away_win_prob,
            },
            reasons: pred.reasons,
        }
    }
}

/// GET /predictions?league=39
///
/// An unparsable `league` falls back to the configured default.
async fn predictions_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let league_id = params
        .get("league")
        .and_then(|v| v.parse::<i64>().ok())
        .unwrap_or(state.default_league);

    let fixtures = state.fixtures.upcoming(league_id, state.window_days).await?;

    let predictions: Vec<MatchPrediction> = fixtures
        .into_iter()
        .map(|fixture| {
            let req = PredictionRequest::new(fixture.home.name.clone(), fixture.away.name.clone())
                .with_ids(Some(fixture.home.id), Some(fixture.away.id));
            let pred = state.predictor.predict(&req);
            MatchPrediction::new(fixture, pred)
        })
        .collect();

    info!(
        "Served {} prediction(s) for league {} ({})",
        predictions.len(),
        league_id,
        find_league(league_id).map_or("unlisted", |l| l.name)
    );

    Ok(Json(json!({
        "success": true,
        "count": predictions.len(),
        "predictions": predictions,
    })))
}

/// Body of POST /predict. Ids are optional and ignored when malformed.
#[derive(Debug, Deserialize)]
struct PredictBody {
    home_team: Option<String>,
    away_team: Option<String>,
    #[serde(default)]
    home_team_id: Option<serde_json::Value>,
    #[serde(default)]
    away_team_id: Option<serde_json::Value>,
}

/// POST /predict
async fn predict_handler(
    State(state): State<Arc<AppState>>,
    body: Option<Json<PredictBody>>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let Some(Json(body)) = body else {
        return Err(ApiError::MissingTeams);
    };
    let (Some(home_team), Some(away_team)) = (body.home_team, body.away_team) else {
        return Err(ApiError::MissingTeams);
    };

    let req = PredictionRequest::new(home_team, away_team).with_ids(
        body.home_team_id.as_ref().and_then(serde_json::Value::as_i64),
        body.away_team_id.as_ref().and_then(serde_json::Value::as_i64),
    );
    let pred = state.predictor.predict(&req);

    Ok(Json(json!({
        "success": true,
        "prediction": pred,
    })))
}

/// GET /leagues
async fn leagues_handler() -> impl IntoResponse {
    Json(json!({
        "success": true,
        "leagues": LEAGUES,
    }))
}

/// GET /health
async fn health_handler() -> impl IntoResponse {
    Json(json!({
        "status": "healthy",
        "timestamp": Local::now().to_rfc3339(),
    }))
}
