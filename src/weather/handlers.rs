use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

use super::service::ReportError;
use crate::extractors::LocationBody;
use crate::synthesis::WeatherReport;
use crate::AppState;

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

/// Health check endpoint
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Generate a report for the location in the JSON body
///
/// POST /api/v1/weather {"location": "Test Farm"}
pub async fn create_report(
    State(state): State<AppState>,
    LocationBody(location): LocationBody,
) -> Result<Json<WeatherReport>, ReportError> {
    let report = state.weather_service.get_report(location.as_deref())?;
    Ok(Json(report))
}

/// Generate a report for a path-supplied location
///
/// GET /api/v1/weather/{location}
pub async fn get_report(
    State(state): State<AppState>,
    Path(location): Path<String>,
) -> Result<Json<WeatherReport>, ReportError> {
    let report = state.weather_service.get_report(Some(&location))?;
    Ok(Json(report))
}

/// Bare OPTIONS requests that are not CORS pre-flights
pub async fn preflight() -> StatusCode {
    StatusCode::OK
}

/// Prometheus text exposition
pub async fn metrics(State(state): State<AppState>) -> impl IntoResponse {
    match &state.metrics {
        Some(handle) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
            handle.render(),
        )
            .into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}
