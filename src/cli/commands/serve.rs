//! Web frontend command handler

use std::sync::Arc;
use tokio::signal;
use tracing::{error, info};

use crate::config::Config;
use crate::web::{create_app_state, router};

pub async fn cmd_serve(config: Config) -> anyhow::Result<()> {
    info!(
        "Marquee v{} starting web frontend...",
        env!("CARGO_PKG_VERSION")
    );

    let state = create_app_state(config.clone())?;

    let status_handle = Arc::clone(&state.status).spawn(
        Arc::clone(state.backend()),
        config.status.probe_interval(),
    );

    let outcome = state.catalog.reload().await;
    info!(?outcome, "Initial catalog load finished");

    let addr = format!("{}:{}", config.server.bind_address, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    let app = router(state);

    let server_handle = tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            error!("Web server error: {}", e);
        }
    });

    info!("🌐 Web frontend running at http://{}", addr);
    info!("Backend: {}", config.backend.base_url);

    match signal::ctrl_c().await {
        Ok(()) => {
            info!("Shutdown signal received");
        }
        Err(e) => {
            error!("Error listening for shutdown: {}", e);
        }
    }

    status_handle.abort();
    server_handle.abort();
    info!("Web frontend stopped");

    Ok(())
}
