//! HTTP API tests, driven in-process through the router.

use augur::config::{AnalysisSettings, Config};
use augur::AppState;
use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use serde_json::{json, Value};
use tower::ServiceExt;

fn test_app() -> axum::Router {
    augur::app(AppState::new(Config {
        host: "127.0.0.1".to_string(),
        port: 0,
        analysis: AnalysisSettings::default(),
    }))
}

fn fixture_rows() -> Value {
    json!([
        [1000, 100.0, 105.0, 95.0, 102.0, 1000.0],
        [2000, 102.0, 108.0, 100.0, 106.0, 1200.0],
        [3000, 106.0, 110.0, 104.0, 108.0, 800.0],
        [4000, 108.0, 112.0, 105.0, 107.0, 900.0],
        [5000, 107.0, 109.0, 103.0, 105.0, 1100.0]
    ])
}

async fn send(request: Request<Body>) -> (StatusCode, Value) {
    let response = test_app().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, body)
}

async fn post_json(uri: &str, body: Value) -> (StatusCode, Value) {
    send(
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
}

async fn get(uri: &str) -> (StatusCode, Value) {
    send(Request::builder().uri(uri).body(Body::empty()).unwrap()).await
}

#[tokio::test]
async fn test_health() {
    let (status, body) = get("/api/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_price_points_fixture() {
    let (status, body) = post_json(
        "/api/analysis/price-points",
        json!({ "candles": fixture_rows(), "currentPrice": 105.0, "timeHorizon": "1h" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let analysis = &body["data"]["analysis"];
    assert_eq!(analysis["timeHorizon"], "1h");
    assert_eq!(analysis["entryPoints"]["conservative"], 105.0);
    assert_eq!(analysis["entryPoints"]["moderate"], 98.25);
    assert_eq!(analysis["stopLoss"]["method"], "atr");
    assert!(body["data"].get("error").is_none());
    assert_eq!(body["data"]["dataQuality"]["valid"], true);
    assert!(body["meta"]["timestamp"].as_i64().unwrap() > 0);
}

#[tokio::test]
async fn test_price_points_unsorted_pairs() {
    let (status, body) = post_json(
        "/api/analysis/price-points",
        json!({
            "candles": [[5000, "105"], [1000, "100"], [3000, "108"], [2000, "106"], [4000, "107"]],
            "currentPrice": 105.0
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["analysis"]["timeHorizon"], "1h");
    assert_eq!(body["data"]["dataQuality"]["candleCount"], 5);
}

#[tokio::test]
async fn test_price_points_insufficient_data() {
    let (status, body) = post_json(
        "/api/analysis/price-points",
        json!({ "candles": [[1000, 1.0], [2000, 2.0]], "currentPrice": 2.0 }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["data"]["analysis"].is_null());
    assert!(body["data"]["error"]
        .as_str()
        .unwrap()
        .starts_with("Insufficient data"));
}

#[tokio::test]
async fn test_price_points_invalid_price() {
    let (status, body) = post_json(
        "/api/analysis/price-points",
        json!({ "candles": fixture_rows(), "currentPrice": 0.0 }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["data"]["analysis"].is_null());
    assert!(body["data"]["error"].as_str().unwrap().starts_with("Invalid price"));
}

#[tokio::test]
async fn test_price_points_disabled() {
    let (status, body) = post_json(
        "/api/analysis/price-points",
        json!({ "candles": fixture_rows(), "currentPrice": 105.0, "enabled": false }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["data"]["analysis"].is_null());
    assert!(body["data"].get("error").is_none());
}

#[tokio::test]
async fn test_price_points_unknown_horizon() {
    let (status, body) = post_json(
        "/api/analysis/price-points",
        json!({ "candles": fixture_rows(), "currentPrice": 105.0, "timeHorizon": "2h" }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["status"], 400);
    assert!(body["error"].as_str().unwrap().contains("2h"));
}

#[tokio::test]
async fn test_indicators_empty_candles() {
    let (status, body) = post_json("/api/analysis/indicators", json!({ "candles": [] })).await;

    assert_eq!(status, StatusCode::OK);
    let data = &body["data"];
    assert_eq!(data["rsi"], 0.0);
    assert!(data["ema12"].is_null());
    assert!(data["macd"].is_null());
    assert_eq!(data["bollinger"]["middle"], 0.0);
    assert_eq!(data["stochRsi"]["k"], 50.0);
    assert_eq!(data["volumeProfile"]["totalVolume"], 0.0);
    assert_eq!(data["signals"]["overall"], "neutral");
}

#[tokio::test]
async fn test_stop_loss_percentage() {
    let (status, body) = post_json(
        "/api/analysis/stop-loss",
        json!({ "candles": fixture_rows(), "entryPrice": 100.0, "method": "percentage", "percentage": 5.0 }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["price"], 95.0);
    assert_eq!(body["data"]["percentage"], 5.0);
}

#[tokio::test]
async fn test_stop_loss_rejects_bad_input() {
    let (status, _) = post_json(
        "/api/analysis/stop-loss",
        json!({ "candles": fixture_rows(), "entryPrice": 100.0, "method": "trailing" }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = post_json(
        "/api/analysis/stop-loss",
        json!({ "candles": fixture_rows(), "entryPrice": -3.0 }),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["error"].as_str().unwrap().starts_with("Invalid price"));
}

#[tokio::test]
async fn test_fibonacci_retracement_endpoint() {
    let (status, body) = get("/api/analysis/fibonacci/retracement?from=200&to=100").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["level0"], 100.0);
    assert_eq!(body["data"]["level500"], 150.0);
    assert_eq!(body["data"]["level100"], 200.0);
}

#[tokio::test]
async fn test_fibonacci_extension_endpoint() {
    let (status, body) =
        get("/api/analysis/fibonacci/extension?swing1Start=100&swing1End=150&swing2End=120").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["direction"], "uptrend_continuation");
    assert_eq!(body["data"]["targets"].as_array().unwrap().len(), 4);
}

#[test]
fn test_health_blocking() {
    let app = test_app();
    let response = tokio_test::block_on(
        app.oneshot(Request::builder().uri("/api/health").body(Body::empty()).unwrap()),
    );
    tokio_test::assert_ok!(&response);
}
