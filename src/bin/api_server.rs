// src/bin/api_server.rs

use cashier_api::infra::config::DEFAULT_LOG_FILTER;
use cashier_api::infra::telemetry;
use cashier_api::transport;
use cashier_api::{build_repositories, AppState, Config};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{error, info};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // --- Configuration ---
    // Loaded before tracing so that a `RUST_LOG` set in `.env` takes effect.
    let config = match Config::from_env() {
        Ok(c) => c,
        Err(e) => {
            telemetry::init_tracing(DEFAULT_LOG_FILTER)?;
            error!(error = %e, "Failed to load configuration");
            return Err(e.into());
        }
    };
    telemetry::init_tracing(&config.log_filter)?;

    // --- Storage Initialization ---
    let repositories = match build_repositories(&config.storage).await {
        Ok(r) => r,
        Err(e) => {
            error!(error = %e, "Failed to initialize storage");
            return Err(e);
        }
    };
    let app_state = AppState::new(repositories);

    // --- API Server Initialization ---
    let cors = CorsLayer::new().allow_origin(Any).allow_methods(Any);
    let app = transport::http::create_router(app_state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", transport::http::ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    let addr = config.listen_addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "Server running");
    info!("Swagger UI available at http://{}/swagger-ui", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Graceful shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "Failed to listen for shutdown signal");
        return;
    }
    info!("Shutdown signal received (Ctrl+C)");
}
