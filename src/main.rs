// Taiwan Weather Gateway v0.1
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::{routing::get, Json, Router};
use std::net::SocketAddr;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod config;
mod errors;
mod locations;
mod routes;
mod services;

use config::AppConfig;
use routes::weather::AppState;
use services::cwa::CwaClient;

/// Taiwan Weather Gateway — OpenAPI specification.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Taiwan Weather Gateway",
        version = "0.1.0",
        description = "Thin HTTP gateway over the CWA open-data 36-hour general \
            forecast (dataset F-C0032-001). Translates short ASCII location codes \
            into Chinese region names, queries the CWA, and flattens the \
            element-oriented time series into per-period forecast records.",
        license(name = "MIT"),
    ),
    tags(
        (name = "Service", description = "Service description"),
        (name = "Health", description = "Service health check"),
        (name = "Locations", description = "Supported location codes"),
        (name = "Weather", description = "36-hour forecast retrieval"),
    ),
    paths(
        routes::index::service_index,
        routes::health::health_check,
        routes::locations::list_locations,
        routes::weather::get_weather,
        routes::weather::get_kaohsiung_weather,
    ),
    components(
        schemas(
            routes::index::ServiceDescription,
            routes::index::EndpointDescription,
            routes::health::HealthResponse,
            routes::locations::LocationsResponse,
            routes::weather::WeatherEnvelope,
            services::cwa::WeatherReport,
            services::cwa::ForecastPeriod,
            errors::ErrorResponse,
        )
    )
)]
struct ApiDoc;

/// Final catch-all: unmatched routes get a JSON 404 instead of axum's
/// default empty body.
async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(errors::ErrorResponse {
            error: "Not found".to_string(),
            upstream_status: None,
            detail: None,
        }),
    )
}

/// Last-resort boundary: a panic in handler logic becomes a generic 500
/// instead of tearing down the connection.
fn handle_panic(err: Box<dyn std::any::Any + Send + 'static>) -> axum::response::Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };
    errors::AppError::Internal(format!("handler panicked: {}", detail)).into_response()
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "taiwan_weather_gateway=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env();
    if config.cwa_api_key.is_none() {
        tracing::warn!("CWA_API_KEY is not set; forecast requests will fail until configured");
    }

    // Create CWA client and shared state
    let cwa_client = CwaClient::new(config.cwa_api_key.clone());
    let app_state = AppState { cwa_client };

    // CORS — read-only API, restrict methods to GET
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([axum::http::Method::GET])
        .allow_headers(Any);

    // Build router
    // Stateless routes first; forecast routes carry AppState. The fixed
    // /api/weather/kaohsiung route coexists with the parametrized one —
    // axum prefers the static match.
    let weather_routes = Router::new()
        .route(
            "/api/weather/kaohsiung",
            get(routes::weather::get_kaohsiung_weather),
        )
        .route("/api/weather/:location", get(routes::weather::get_weather))
        .with_state(app_state);

    let app = Router::new()
        .route("/", get(routes::index::service_index))
        .route("/api/health", get(routes::health::health_check))
        .route("/api/locations", get(routes::locations::list_locations))
        .merge(weather_routes)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(CatchPanicLayer::custom(handle_panic));

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Gateway listening on {}", addr);
    tracing::info!(
        "Swagger UI available at http://localhost:{}/swagger-ui/",
        config.port
    );

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind TCP listener");
    axum::serve(listener, app)
        .await
        .expect("Server terminated unexpectedly");
}
