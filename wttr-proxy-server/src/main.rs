//! Binary crate for the wttr.in proxy server.
//!
//! This crate focuses on:
//! - Process startup: CLI args, logging, configuration
//! - The HTTP surface (routes, extractors, status mapping)

use anyhow::Context;
use clap::Parser;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;
use wttr_proxy_core::{Config, WttrProvider};

mod app;
mod cli;
mod error;
mod handler;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = cli::Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let mut config = Config::load(&args.config)?;
    if let Some(port) = args.port {
        config.port = port;
    }

    let provider = WttrProvider::new(config.upstream_url.clone(), config.timeout())?;
    let router = app::build_router(app::AppState { provider: Arc::new(provider) });

    let host = if config.bind_all { [0, 0, 0, 0] } else { [127, 0, 0, 1] };
    let addr = SocketAddr::from((host, config.port));

    info!("Proxying weather data from {}", config.upstream_url);
    info!("Listening on http://{addr}");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    axum::serve(listener, router).await?;

    Ok(())
}
