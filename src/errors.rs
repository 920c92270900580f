use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use utoipa::ToSchema;

/// Standard error response body.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Human-readable error message
    pub error: String,
    /// HTTP status code returned by the upstream provider, when the failure
    /// originated there
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upstream_status: Option<u16>,
    /// Raw upstream payload, for diagnostics
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<serde_json::Value>,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("CWA API key is not configured")]
    MissingApiKey,

    #[error("No forecast data found for location: {0}")]
    LocationNotFound(String),

    #[error("Upstream weather service error: {message}")]
    Upstream {
        message: String,
        /// HTTP status the provider answered with, if the request got that far.
        status: Option<u16>,
        /// Provider response body, preserved for diagnostic surfacing.
        detail: Option<serde_json::Value>,
    },

    #[error("Internal error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::MissingApiKey => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorResponse {
                    error: "Weather service is not configured".to_string(),
                    upstream_status: None,
                    detail: None,
                },
            ),
            AppError::LocationNotFound(location) => (
                StatusCode::NOT_FOUND,
                ErrorResponse {
                    error: format!("No forecast data found for location: {}", location),
                    upstream_status: None,
                    detail: None,
                },
            ),
            AppError::Upstream {
                message,
                status: upstream_status,
                detail,
            } => (
                StatusCode::BAD_GATEWAY,
                ErrorResponse {
                    error: message,
                    upstream_status,
                    detail,
                },
            ),
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse {
                        error: "Internal server error".to_string(),
                        upstream_status: None,
                        detail: None,
                    },
                )
            }
        };

        (status, axum::Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_api_key_is_500() {
        let resp = AppError::MissingApiKey.into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_location_not_found_is_404() {
        let resp = AppError::LocationNotFound("臺北市".to_string()).into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_internal_is_500() {
        let resp = AppError::Internal("boom".to_string()).into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_upstream_is_502() {
        let resp = AppError::Upstream {
            message: "CWA returned HTTP 503".to_string(),
            status: Some(503),
            detail: Some(serde_json::json!({"success": "false"})),
        }
        .into_response();
        assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
    }
}
