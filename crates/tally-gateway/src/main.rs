//! Tally Gateway - billing summary and checkout proxy
//!
//! This is the main entry point for the tally gateway.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tally_gateway::{create_router, AppState, GatewayConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tally=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Tally Gateway");

    // Load configuration from environment
    let config = GatewayConfig::from_env();

    tracing::info!(
        listen_addr = %config.listen_addr,
        upstream_base_url = %config.upstream_base_url,
        "Gateway configuration loaded"
    );

    // Build app state
    let state = AppState::new(config.clone());

    // Create the router
    let app = create_router(state);
    tracing::info!("Router configured with all API endpoints");

    // Start HTTP server
    tracing::info!(listen_addr = %config.listen_addr, "Starting HTTP server");
    let listener = tokio::net::TcpListener::bind(&config.listen_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
