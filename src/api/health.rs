use crate::services::analysis::MIN_CANDLES;
use crate::types::TimeHorizon;
use crate::AppState;
use axum::{routing::get, Json, Router};
use serde::Serialize;

const HORIZONS: [TimeHorizon; 7] = [
    TimeHorizon::FiveMinutes,
    TimeHorizon::FifteenMinutes,
    TimeHorizon::ThirtyMinutes,
    TimeHorizon::OneHour,
    TimeHorizon::FourHours,
    TimeHorizon::OneDay,
    TimeHorizon::OneWeek,
];

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
    min_candles: usize,
    horizons: Vec<&'static str>,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        min_candles: MIN_CANDLES,
        horizons: HORIZONS.iter().map(|h| h.as_str()).collect(),
    })
}

pub fn router() -> Router<AppState> {
    Router::new().route("/api/health", get(health))
}
