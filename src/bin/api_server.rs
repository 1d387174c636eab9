// src/bin/api_server.rs

use lunchboxd::infra::telemetry;
use lunchboxd::transport;
use lunchboxd::{Config, DirectoryService};
use tower_http::cors::{Any, CorsLayer};
use tracing::{error, info};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    telemetry::init();

    let config = Config::load()?;

    // --- Service Initialization ---
    info!("Initializing DirectoryService...");
    let service = DirectoryService::from_config(&config).await?;
    let app_state = transport::http::AppState::new(service);
    info!("DirectoryService initialized successfully.");

    // --- API Server Initialization ---
    let cors = CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any);
    let app = transport::http::create_router(app_state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", transport::http::ApiDoc::openapi()))
        .layer(cors);
    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    info!("API server listening on http://{}", config.bind_addr);
    info!("Swagger UI available at http://{}/swagger-ui", config.bind_addr);

    tokio::select! {
        result = axum::serve(listener, app) => {
            if let Err(e) = result {
                error!("Server error: {}", e);
                return Err(e.into());
            }
        }
        _ = tokio::signal::ctrl_c() => {
            // Every mutation persists before it responds, so there is nothing left to flush.
            info!("Shutdown signal received, stopping.");
        }
    }

    Ok(())
}
