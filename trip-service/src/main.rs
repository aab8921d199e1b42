use std::time::Duration;

use dotenvy::dotenv;
use tokio::signal;
use trip_service::{
    build_router,
    config::get_configuration,
    error::AppError,
    observability::init_tracing,
    services::{AuthService, Database, OcrScanner},
    AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenv().ok();

    // Load configuration - fail fast if invalid
    let config = get_configuration()?;

    init_tracing(&config.server.log_level);

    trip_service::services::metrics::init_metrics();

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        "Starting trip service"
    );

    let db = Database::connect(&config.database.url, config.database.max_connections).await?;
    db.run_migrations().await?;
    if config.database.seed_demo_data {
        db.seed_demo_data().await?;
    }
    tracing::info!("Database initialized");

    let auth = AuthService::new(db.clone())?;
    let scanner = OcrScanner::new(Duration::from_millis(config.ocr.scan_delay_ms));

    let address = format!("{}:{}", config.server.host, config.server.port);

    let state = AppState {
        config,
        db,
        auth,
        scanner,
    };
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&address).await.map_err(|e| {
        tracing::error!("Failed to bind TCP listener to {}: {}", address, e);
        AppError::InternalError(anyhow::anyhow!("Failed to bind to address {}: {}", address, e))
    })?;

    tracing::info!(address = %address, "Listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Service shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received SIGINT, starting graceful shutdown");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        },
    }
}
