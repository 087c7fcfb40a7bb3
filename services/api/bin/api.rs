//! Main Entrypoint for the Improv API Service
//!
//! This binary is responsible for:
//! 1. Loading settings from the environment.
//! 2. Initializing logging.
//! 3. Constructing the shared application state.
//! 4. Constructing the Axum router and applying the CORS policy.
//! 5. Starting the web server and handling graceful shutdown.

use anyhow::Context;
use improv_api::{
    config::Settings,
    router::{cors_layer, create_router},
    state::AppState,
};
use std::sync::Arc;
use tracing::{info, warn};

/// Listens for the `Ctrl+C` signal to gracefully shut down the server.
async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");
    info!("Received shutdown signal. Shutting down gracefully...");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // --- 1. Load Settings ---
    let settings = Settings::from_env().context("Failed to load settings")?;

    // --- 2. Initialize Logging ---
    tracing_subscriber::fmt()
        .with_max_level(settings.log_level)
        .with_timer(tracing_subscriber::fmt::time::ChronoLocal::rfc_3339())
        .init();
    info!("Settings loaded. Initializing application state...");

    if !settings.api_key_configured() {
        warn!("No OpenAI API key configured; token issuance will fail until one is provided.");
    }

    // --- 3. Initialize Shared State ---
    let cors = cors_layer(&settings);
    let bind_address = settings.bind_address;
    let environment = settings.environment;
    let app_state = Arc::new(AppState::from_settings(settings));

    // --- 4. Create Router and Apply Middleware ---
    let app = create_router(app_state).layer(cors);

    // --- 5. Start Server ---
    info!(
        environment = ?environment,
        bind_address = %bind_address,
        "Service configured. Starting server..."
    );
    let listener = tokio::net::TcpListener::bind(bind_address).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server has shut down.");
    Ok(())
}
