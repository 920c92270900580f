use axum::Json;
use serde::Serialize;
use utoipa::ToSchema;

/// One entry in the service description's endpoint list.
#[derive(Debug, Serialize, ToSchema)]
pub struct EndpointDescription {
    pub method: String,
    pub path: String,
    pub description: String,
}

/// Static service description returned from the root path.
#[derive(Debug, Serialize, ToSchema)]
pub struct ServiceDescription {
    pub service: String,
    pub version: String,
    pub endpoints: Vec<EndpointDescription>,
}

fn endpoint(path: &str, description: &str) -> EndpointDescription {
    EndpointDescription {
        method: "GET".to_string(),
        path: path.to_string(),
        description: description.to_string(),
    }
}

/// Service description endpoint.
#[utoipa::path(
    get,
    path = "/",
    tag = "Service",
    responses(
        (status = 200, description = "Service description", body = ServiceDescription),
    )
)]
pub async fn service_index() -> Json<ServiceDescription> {
    Json(ServiceDescription {
        service: "Taiwan 36-hour weather forecast gateway".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        endpoints: vec![
            endpoint("/api/health", "Liveness check"),
            endpoint("/api/locations", "Supported location codes"),
            endpoint(
                "/api/weather/:location",
                "36-hour forecast by location code or Chinese region name",
            ),
            endpoint("/api/weather/kaohsiung", "36-hour forecast for Kaohsiung"),
        ],
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_service_index_lists_endpoints() {
        let Json(body) = service_index().await;
        assert!(!body.endpoints.is_empty());
        assert!(body
            .endpoints
            .iter()
            .any(|e| e.path == "/api/weather/:location"));
    }
}
