use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::weather::service::ReportError;

/// JSON body accepted by the report endpoints
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct ReportRequest {
    /// Farm location name, echoed back in the report
    #[serde(default)]
    pub location: Option<String>,
}

/// Extracts the location from a JSON body
///
/// The body is parsed as JSON whatever its `Content-Type`; browser clients
/// often post `text/plain` to skip the CORS pre-flight. Unreadable bodies are
/// reported as [`ReportError::InvalidRequest`] so every failure of the report
/// endpoint shares the same error shape. A missing or
/// null `location` yields `None`; the service decides whether that is valid.
#[derive(Debug)]
pub struct LocationBody(pub Option<String>);

impl<S> FromRequest<S> for LocationBody
where
    S: Send + Sync,
{
    type Rejection = ReportError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| ReportError::InvalidRequest(rejection.body_text()))?;
        let body: ReportRequest = serde_json::from_slice(&bytes)
            .map_err(|e| ReportError::InvalidRequest(e.to_string()))?;

        Ok(LocationBody(body.location))
    }
}
