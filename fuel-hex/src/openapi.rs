//! OpenAPI document for the HTTP routes.

#![allow(dead_code)] // Path functions are only used by utoipa for documentation generation

use fuel_types::{FuelPrice, LastUpdateInfo, PriceResult, Province};
use utoipa::OpenApi;

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is healthy", body = inline(serde_json::Value), example = json!({"status": "healthy"}))
    )
)]
async fn health() {}

/// List all provinces known to the provider
#[utoipa::path(
    get,
    path = "/fuel/provinces",
    tag = "fuel",
    responses(
        (status = 200, description = "Province list in provider order", body = Vec<Province>),
        (status = 502, description = "Provider request failed")
    )
)]
async fn list_provinces() {}

/// Current fuel prices for a province
#[utoipa::path(
    get,
    path = "/fuel/prices/{code}",
    tag = "fuel",
    params(
        ("code" = String, Path, description = "Province plate code; leading zeros are ignored")
    ),
    responses(
        (status = 200, description = "Prices for the province", body = PriceResult),
        (status = 404, description = "No province with this code"),
        (status = 502, description = "Provider request failed")
    )
)]
async fn get_prices() {}

/// Time of the provider's last price update
#[utoipa::path(
    get,
    path = "/fuel/last-update",
    tag = "fuel",
    responses(
        (status = 200, description = "Last update timestamp", body = LastUpdateInfo),
        (status = 502, description = "Provider request failed")
    )
)]
async fn last_update() {}

/// OpenAPI documentation for the fuel price API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Opet Fuel Prices API",
        version = "1.0.0",
        description = "Current Opet fuel prices by Turkish province, served from the provider's public price API.",
        license(name = "MIT"),
    ),
    paths(health, list_provinces, get_prices, last_update),
    components(schemas(Province, FuelPrice, PriceResult, LastUpdateInfo)),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "fuel", description = "Provinces, prices and update times"),
    )
)]
pub struct ApiDoc;
