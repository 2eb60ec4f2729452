//! Analysis API endpoints.

use axum::{
    extract::{Query, State},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{AnalysisError, AppError, Result};
use crate::services::analysis::{
    analyze_indicators, analyze_price_points, convert_candles, stop_loss, validate_series,
};
use crate::services::analysis::indicators::{fibonacci_extension, fibonacci_retracement};
use crate::types::{
    AnalysisOutcome, FibonacciExtension, FibonacciRetracement, IndicatorSnapshot, RawCandle,
    SeriesReport, StopLoss, StopLossMethod, TimeHorizon,
};
use crate::AppState;

/// API response wrapper.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub data: T,
    pub meta: ApiMeta,
}

#[derive(Debug, Serialize)]
pub struct ApiMeta {
    /// Unix timestamp (milliseconds) when computed.
    pub timestamp: i64,
}

impl<T> ApiResponse<T> {
    fn new(data: T) -> Self {
        Self {
            data,
            meta: ApiMeta {
                timestamp: chrono::Utc::now().timestamp_millis(),
            },
        }
    }
}

fn enabled_by_default() -> bool {
    true
}

/// Body for the price-points endpoint.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricePointsRequest {
    pub candles: Vec<RawCandle>,
    pub current_price: f64,
    /// 5m, 15m, 30m, 1h, 4h, 1d or 1w. Defaults to 1h.
    pub time_horizon: Option<String>,
    /// When false the engine is not run and no analysis is returned.
    #[serde(default = "enabled_by_default")]
    pub enabled: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PricePointsResponse {
    #[serde(flatten)]
    pub outcome: AnalysisOutcome,
    pub data_quality: SeriesReport,
}

#[derive(Debug, Deserialize)]
pub struct IndicatorsRequest {
    pub candles: Vec<RawCandle>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StopLossRequest {
    pub candles: Vec<RawCandle>,
    pub entry_price: f64,
    /// percentage, atr or support. Defaults to atr.
    pub method: Option<String>,
    pub percentage: Option<f64>,
}

#[derive(Debug, Deserialize)]
pub struct RetracementQuery {
    pub from: f64,
    pub to: f64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtensionQuery {
    pub swing1_start: f64,
    pub swing1_end: f64,
    pub swing2_end: f64,
}

/// Create the analysis router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/price-points", post(price_points))
        .route("/indicators", post(indicators))
        .route("/stop-loss", post(stop_loss_level))
        .route("/fibonacci/retracement", get(retracement))
        .route("/fibonacci/extension", get(extension))
}

fn parse_horizon(token: Option<&str>) -> Result<TimeHorizon> {
    match token {
        None => Ok(TimeHorizon::default()),
        Some(s) => TimeHorizon::from_str(s)
            .ok_or_else(|| AppError::BadRequest(format!("Unknown time horizon: {}", s))),
    }
}

fn parse_stop_method(method: Option<&str>) -> Result<StopLossMethod> {
    match method {
        None => Ok(StopLossMethod::default()),
        Some(s) => StopLossMethod::from_str(s)
            .ok_or_else(|| AppError::BadRequest(format!("Unknown stop-loss method: {}", s))),
    }
}

/// Trade plan for a candle history and current price.
async fn price_points(
    State(state): State<AppState>,
    Json(request): Json<PricePointsRequest>,
) -> Result<Json<ApiResponse<PricePointsResponse>>> {
    let horizon = parse_horizon(request.time_horizon.as_deref())?;
    let candles = convert_candles(&request.candles);
    let data_quality = validate_series(&candles);

    let outcome: AnalysisOutcome = if request.enabled {
        analyze_price_points(&candles, request.current_price, horizon, state.settings()).into()
    } else {
        debug!("Price analysis disabled by request");
        AnalysisOutcome::default()
    };

    Ok(Json(ApiResponse::new(PricePointsResponse {
        outcome,
        data_quality,
    })))
}

/// Indicator snapshot for a candle history.
async fn indicators(
    State(state): State<AppState>,
    Json(request): Json<IndicatorsRequest>,
) -> Json<ApiResponse<IndicatorSnapshot>> {
    let candles = convert_candles(&request.candles);
    Json(ApiResponse::new(analyze_indicators(&candles, state.settings())))
}

/// Stop-loss level for an entry price.
async fn stop_loss_level(
    State(state): State<AppState>,
    Json(request): Json<StopLossRequest>,
) -> Result<Json<ApiResponse<StopLoss>>> {
    let method = parse_stop_method(request.method.as_deref())?;
    if !request.entry_price.is_finite() || request.entry_price <= 0.0 {
        return Err(AnalysisError::InvalidPrice(request.entry_price).into());
    }

    let candles = convert_candles(&request.candles);
    let level = stop_loss(
        &candles,
        request.entry_price,
        method,
        request.percentage,
        state.settings(),
    );

    Ok(Json(ApiResponse::new(level)))
}

async fn retracement(Query(query): Query<RetracementQuery>) -> Json<ApiResponse<FibonacciRetracement>> {
    Json(ApiResponse::new(fibonacci_retracement(query.from, query.to)))
}

async fn extension(Query(query): Query<ExtensionQuery>) -> Json<ApiResponse<FibonacciExtension>> {
    Json(ApiResponse::new(fibonacci_extension(
        query.swing1_start,
        query.swing1_end,
        query.swing2_end,
    )))
}
