//! HTTP request handlers.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use utoipa::OpenApi;

use fuel_client::PriceClient;
use fuel_types::{AppError, FuelError, PriceSource};

use crate::openapi::ApiDoc;

/// Application state shared across handlers.
pub struct AppState<S: PriceSource> {
    pub client: PriceClient<S>,
}

/// Wrapper to implement IntoResponse for AppError (orphan rule workaround).
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        ApiError(err)
    }
}

impl From<FuelError> for ApiError {
    fn from(err: FuelError) -> Self {
        ApiError(err.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            AppError::BadGateway(msg) => (StatusCode::BAD_GATEWAY, msg.clone()),
        };

        if status.is_server_error() {
            tracing::error!(%status, "{}", message);
        }

        let body = serde_json::json!({
            "error": message,
            "code": status.as_u16()
        });

        (status, Json(body)).into_response()
    }
}

/// Landing endpoint.
pub async fn root() -> impl IntoResponse {
    Json(serde_json::json!({ "message": "Welcome to the Opet fuel prices API" }))
}

/// Health check endpoint.
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "healthy" }))
}

/// OpenAPI document.
pub async fn openapi_json() -> impl IntoResponse {
    Json(ApiDoc::openapi())
}

/// List all provinces, fetched fresh from the provider.
#[tracing::instrument(skip(state))]
pub async fn list_provinces<S: PriceSource + 'static>(
    State(state): State<Arc<AppState<S>>>,
) -> Result<impl IntoResponse, ApiError> {
    let provinces = state.client.fetch_provinces().await?;
    Ok(Json(provinces))
}

/// Prices for one province.
#[tracing::instrument(skip(state), fields(province_code = %code))]
pub async fn get_prices<S: PriceSource + 'static>(
    State(state): State<Arc<AppState<S>>>,
    Path(code): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let result = state.client.get_price(&code).await?;
    Ok(Json(result))
}

/// Provider's last update timestamp.
#[tracing::instrument(skip(state))]
pub async fn last_update<S: PriceSource + 'static>(
    State(state): State<Arc<AppState<S>>>,
) -> Result<impl IntoResponse, ApiError> {
    let info = state.client.fetch_last_update().await?;
    Ok(Json(info))
}
