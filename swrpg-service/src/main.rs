use std::sync::Arc;

use metrics_exporter_prometheus::PrometheusBuilder;
use tokio::net::TcpListener;
use tracing::info;

mod api;
mod buttons;
mod chat;
mod commands;
mod config;
mod dice;
mod error;
mod formula;
mod rules;
mod service;
mod tables;
mod websocket;

use crate::error::ServiceError;
use crate::service::SwrpgService;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();

    info!("Starting SWRPG service v{}", env!("CARGO_PKG_VERSION"));

    let config = crate::config::load_config()?;
    info!(
        host = %config.server.host,
        port = config.server.port,
        idle_timeout_secs = config.sessions.idle_timeout_secs,
        "Configuration loaded"
    );

    let metrics = PrometheusBuilder::new()
        .install_recorder()
        .map_err(|e| ServiceError::Internal {
            message: format!("Failed to install metrics recorder: {}", e),
        })?;

    let service = Arc::new(SwrpgService::new(config.sessions.clone()));
    SwrpgService::start_session_sweeper(service.clone());

    let app = api::router(service, metrics);

    let addr = config.server.bind_address();
    let listener = TcpListener::bind(&addr).await?;
    info!("Listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

fn init_logging() {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let format = fmt::format()
        .with_target(true)
        .with_thread_ids(true)
        .compact();

    // Use RUST_LOG if set, otherwise default to info level for our crate
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("swrpg_service=info"));

    tracing_subscriber::registry()
        .with(fmt::layer().event_format(format))
        .with(filter)
        .init();
}
