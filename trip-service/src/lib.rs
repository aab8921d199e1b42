pub mod config;
pub mod dtos;
pub mod error;
pub mod handlers;
pub mod models;
pub mod observability;
pub mod services;
pub mod utils;

use axum::{
    extract::State,
    http::{HeaderValue, Method},
    middleware::from_fn,
    routing::{delete, get, post},
    Json, Router,
};
use time::Duration;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tower_sessions::{Expiry, MemoryStore, SessionManagerLayer};

use crate::config::Settings;
use crate::error::AppError;
use crate::observability::request_id_middleware;
use crate::services::{AuthService, Database, OcrScanner};

#[derive(Clone)]
pub struct AppState {
    pub config: Settings,
    pub db: Database,
    pub auth: AuthService,
    pub scanner: OcrScanner,
}

pub fn build_router(state: AppState) -> Router {
    // Session setup: identities live server-side and expire on inactivity.
    let session_store = MemoryStore::default();
    let session_layer = SessionManagerLayer::new(session_store)
        .with_secure(false) // Set to true in production with HTTPS
        .with_expiry(Expiry::OnInactivity(Duration::hours(24)));

    let allowed_origins: Vec<HeaderValue> = state
        .config
        .server
        .allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!("Ignoring invalid CORS origin '{}': {}", origin, e);
                None
            }
        })
        .collect();

    Router::new()
        .route("/health", get(health_check))
        .route("/metrics", get(handlers::metrics::metrics))
        .route("/api/login", post(handlers::auth::login))
        .route("/api/logout", post(handlers::auth::logout))
        .route("/api/session", get(handlers::auth::current_session))
        .route(
            "/api/trips",
            get(handlers::trips::list_trips).post(handlers::trips::create_trip),
        )
        .route("/api/trips/export", get(handlers::trips::export_trips))
        .route("/api/trips/:id", delete(handlers::trips::delete_trip))
        .route("/api/dashboard/summary", get(handlers::dashboard::summary))
        .route("/api/bills/parse", post(handlers::bills::parse_bill))
        .route("/api/bills/scan", post(handlers::bills::scan_bill))
        .with_state(state)
        .layer(session_layer)
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
                let request_id = request
                    .headers()
                    .get(observability::REQUEST_ID_HEADER)
                    .and_then(|value| value.to_str().ok())
                    .unwrap_or("-");

                tracing::info_span!(
                    "http_request",
                    request_id = %request_id,
                    method = %request.method(),
                    uri = %request.uri(),
                    version = ?request.version(),
                )
            }),
        )
        .layer(from_fn(request_id_middleware))
        .layer(
            CorsLayer::new()
                .allow_origin(allowed_origins)
                .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
                .allow_headers([axum::http::header::CONTENT_TYPE]),
        )
}

/// Service health check: verifies the database answers before reporting
/// healthy.
pub async fn health_check(
    State(state): State<AppState>,
) -> Result<Json<serde_json::Value>, AppError> {
    state.db.health_check().await.map_err(|e| {
        tracing::error!(error = %e, "Database health check failed");
        e
    })?;

    Ok(Json(serde_json::json!({
        "status": "healthy",
        "service": "trip-service",
        "version": env!("CARGO_PKG_VERSION"),
        "checks": {
            "sqlite": "up"
        }
    })))
}
