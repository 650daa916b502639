//! Serve command - HTTP server for the admin configuration

use std::path::Path;

use cmsconf_core::Settings;
use color_eyre::eyre::{Result, WrapErr};
use tokio::net::TcpListener;

use crate::server::{CONFIG_ROUTE, ServerState, create_router};

/// Run the serve command.
///
/// `host` and `port` override the loaded server settings when given.
pub async fn run(config_path: &Path, host: Option<&str>, port: Option<u16>) -> Result<()> {
    let mut settings = Settings::load(Some(config_path)).wrap_err("Failed to load settings")?;

    if let Some(h) = host {
        tracing::info!(host = h, "Overriding server host from CLI");
        settings.server.host = h.to_string();
    }

    if let Some(p) = port {
        tracing::info!(port = p, "Overriding server port from CLI");
        settings.server.port = p;
    }

    tracing::debug!(?settings, "Loaded settings");

    let addr = settings.server.addr();
    let mode = settings.mode;
    let app = create_router(ServerState::new(settings));

    let listener = TcpListener::bind(&addr)
        .await
        .wrap_err_with(|| format!("Failed to bind to {addr}"))?;

    tracing::info!(%addr, ?mode, "Serving admin configuration");
    println!();
    println!("  Admin config at http://{addr}{CONFIG_ROUTE}");
    println!("  Press Ctrl+C to stop");
    println!();

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .wrap_err("Server error")?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {e}");
    }
    tracing::info!("Shutting down");
}
