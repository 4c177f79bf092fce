//! Router-level tests driven by an in-memory price source.

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use tower::ServiceExt;

use fuel_client::PriceClient;
use fuel_types::{FuelPrice, LastUpdateInfo, PriceSource, Province, UpstreamError};

use super::HttpServer;

/// Source with fixed data; `prices_status` makes the price endpoint fail.
struct FixtureSource {
    prices_status: Option<u16>,
}

#[async_trait::async_trait]
impl PriceSource for FixtureSource {
    async fn fetch_provinces(&self) -> Result<Vec<Province>, UpstreamError> {
        Ok(vec![
            Province::new("6", "ANKARA"),
            Province::new("34", "İSTANBUL"),
        ])
    }

    async fn fetch_last_update(&self) -> Result<LastUpdateInfo, UpstreamError> {
        Ok(LastUpdateInfo {
            last_update_date: "2023-01-01T10:00:00".into(),
        })
    }

    async fn fetch_prices(&self, code: &str) -> Result<Vec<FuelPrice>, UpstreamError> {
        if let Some(status) = self.prices_status {
            return Err(UpstreamError::Status {
                url: format!("mock://prices?ProvinceCode={code}"),
                status,
                body: "down".into(),
            });
        }
        Ok(vec![FuelPrice::new("Petrol", 20.0)])
    }
}

async fn router_with(prices_status: Option<u16>) -> Router {
    let client = PriceClient::with_source(FixtureSource { prices_status })
        .await
        .unwrap();
    HttpServer::new(client).router()
}

async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn test_health() {
    let (status, json) = get_json(router_with(None).await, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "healthy");
}

#[tokio::test]
async fn test_root_message() {
    let (status, json) = get_json(router_with(None).await, "/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(json["message"].as_str().unwrap().contains("fuel prices"));
}

#[tokio::test]
async fn test_list_provinces() {
    let (status, json) = get_json(router_with(None).await, "/fuel/provinces").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        json,
        serde_json::json!([
            {"code": "6", "name": "ANKARA"},
            {"code": "34", "name": "İSTANBUL"}
        ])
    );
}

#[tokio::test]
async fn test_get_prices() {
    let (status, json) = get_json(router_with(None).await, "/fuel/prices/034").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        json,
        serde_json::json!({
            "province": "İSTANBUL",
            "lastUpdate": "2023-01-01T10:00:00",
            "prices": [{"name": "Petrol", "amount": 20.0}]
        })
    );
}

#[tokio::test]
async fn test_get_prices_unknown_province_is_404() {
    let (status, json) = get_json(router_with(None).await, "/fuel/prices/99").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["code"], 404);
    assert!(json["error"].as_str().unwrap().contains("99"));
}

#[tokio::test]
async fn test_get_prices_upstream_failure_is_502() {
    let (status, json) = get_json(router_with(Some(500)).await, "/fuel/prices/34").await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(json["code"], 502);
    assert!(json["error"].as_str().unwrap().contains("500"));
}

#[tokio::test]
async fn test_last_update() {
    let (status, json) = get_json(router_with(None).await, "/fuel/last-update").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["lastUpdateDate"], "2023-01-01T10:00:00");
}

#[tokio::test]
async fn test_openapi_document_served() {
    let (status, json) = get_json(router_with(None).await, "/api-docs/openapi.json").await;
    assert_eq!(status, StatusCode::OK);
    assert!(json["paths"]["/fuel/prices/{code}"].is_object());
}
