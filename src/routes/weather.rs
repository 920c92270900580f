//! Forecast HTTP endpoints.
//!
//! - GET /api/weather/:location — by code ("taipei") or Chinese name ("臺北市")
//! - GET /api/weather/kaohsiung — fixed-location route kept for backward
//!   compatibility with the original deployment

use axum::extract::{Path, State};
use axum::Json;
use serde::Serialize;
use utoipa::ToSchema;

use crate::errors::AppError;
use crate::locations;
use crate::services::cwa::{CwaClient, WeatherReport};

/// Shared application state for forecast endpoints.
#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) cwa_client: CwaClient,
}

/// Successful forecast response envelope.
#[derive(Debug, Serialize, ToSchema)]
pub struct WeatherEnvelope {
    pub success: bool,
    pub data: WeatherReport,
}

/// Resolve the path parameter to an upstream query name.
///
/// Known codes map to their canonical Chinese name; anything else passes
/// through (trimmed) as a literal name, so clients may query "臺北市"
/// directly without a registered code.
fn resolve_query_name(location: &str) -> String {
    match locations::resolve(location) {
        Some(name) => name.to_string(),
        None => location.trim().to_string(),
    }
}

/// 36-hour forecast for a location code or Chinese region name.
#[utoipa::path(
    get,
    path = "/api/weather/{location}",
    tag = "Weather",
    params(
        ("location" = String, Path, description = "Location code (e.g. \"taipei\") or Chinese region name (e.g. \"臺北市\")")
    ),
    responses(
        (status = 200, description = "Normalized 36-hour forecast", body = WeatherEnvelope),
        (status = 404, description = "Upstream has no record for the location", body = crate::errors::ErrorResponse),
        (status = 500, description = "Gateway is missing its upstream credential", body = crate::errors::ErrorResponse),
        (status = 502, description = "Upstream request failed", body = crate::errors::ErrorResponse),
    )
)]
pub async fn get_weather(
    State(state): State<AppState>,
    Path(location): Path<String>,
) -> Result<Json<WeatherEnvelope>, AppError> {
    let query_name = resolve_query_name(&location);
    tracing::debug!("Fetching forecast for '{}' → '{}'", location, query_name);

    let report = state.cwa_client.fetch_forecast(&query_name).await?;
    Ok(Json(WeatherEnvelope {
        success: true,
        data: report,
    }))
}

/// 36-hour forecast for Kaohsiung (fixed-location compatibility route).
#[utoipa::path(
    get,
    path = "/api/weather/kaohsiung",
    tag = "Weather",
    responses(
        (status = 200, description = "Normalized 36-hour forecast for Kaohsiung", body = WeatherEnvelope),
    )
)]
pub async fn get_kaohsiung_weather(
    state: State<AppState>,
) -> Result<Json<WeatherEnvelope>, AppError> {
    get_weather(state, Path("kaohsiung".to_string())).await
}
