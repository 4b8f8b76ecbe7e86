// src/main.rs
mod cli;
mod logging;

use clap::Parser;
use cli::Args;
use nba_gateway::clock::SystemClock;
use nba_gateway::config::validation::validate_config;
use nba_gateway::data_fetcher::api::create_http_client_with_timeout;
use nba_gateway::{AppError, AppState, Config, Gateway, NbaApiClient, UpstreamEndpoints, create_router};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let args = Args::parse();

    if args.list_config {
        Config::display().await?;
        return Ok(());
    }

    let mut config = Config::load().await?;
    args.apply_to(&mut config);
    validate_config(&config)?;

    if args.save_config {
        config.save().await?;
        println!("Config saved to {}", Config::get_config_path());
        return Ok(());
    }

    let (log_file_path, _guard) = logging::setup_logging(&args, &config).await?;
    info!("Logs are being written to: {log_file_path}");

    let client = create_http_client_with_timeout(config.http_timeout_seconds)
        .map_err(|e| AppError::config_error(format!("Failed to build HTTP client: {e}")))?;
    let upstream = NbaApiClient::new(client, UpstreamEndpoints::from_config(&config));
    info!(
        "Upstream: stats={}, live={}, timeout={}s",
        upstream.endpoints().stats_base,
        upstream.endpoints().live_base,
        config.http_timeout_seconds
    );
    let gateway = Gateway::new(Arc::new(upstream), Arc::new(SystemClock));
    let app = create_router(AppState::new(Arc::new(gateway)));

    let listener = TcpListener::bind(config.bind_address.as_str()).await?;
    info!("Starting HTTP server on {}", config.bind_address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(e) => {
            warn!("Could not listen for shutdown signal: {e}");
            std::future::pending::<()>().await;
        }
    }
}
