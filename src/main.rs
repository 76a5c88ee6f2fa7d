//! Fridge Relay (v1)
//!
//! A small HTTP relay between the fridge web UI and its hosted item store,
//! built with Tokio and Axum.
//!
//! # Architecture Overview
//!
//! ```text
//!                      ┌──────────────────────────────────────────────┐
//!                      │                 FRIDGE RELAY                  │
//!                      │                                               │
//!     Browser POST     │  ┌─────────┐    ┌──────────┐    ┌─────────┐  │
//!     ─────────────────┼─▶│  http   │───▶│   item   │───▶│upstream │──┼──▶ Hosted
//!                      │  │ server  │    │ validate │    │ client  │  │    table
//!                      │  └─────────┘    └──────────┘    └────┬────┘  │
//!                      │                                      │       │
//!     Browser JSON     │  ┌──────────┐                        │       │
//!     ◀────────────────┼──│ response │◀───────────────────────┘       │
//!                      │  │translate │                                │
//!                      │  └──────────┘                                │
//!                      │                                               │
//!                      │  ┌─────────────────────────────────────────┐ │
//!                      │  │          Cross-Cutting Concerns          │ │
//!                      │  │  ┌────────┐ ┌─────────┐ ┌────────────┐  │ │
//!                      │  │  │ config │ │ tracing │ │ lifecycle  │  │ │
//!                      │  │  └────────┘ └─────────┘ └────────────┘  │ │
//!                      │  └─────────────────────────────────────────┘ │
//!                      └──────────────────────────────────────────────┘
//! ```
//!
//! # Request Handling
//!
//! - Single relayed operation: `POST /add-item`
//! - Date fields validated and zero-padded before forwarding
//! - Upstream status and body translated into the UI's envelope
//! - Request ID generation (UUID v4), timeout and body limits
//! - CORS locked to one browser origin

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use fridge_relay::config::load_config;
use fridge_relay::http::HttpServer;
use fridge_relay::lifecycle::{shutdown_signal, Shutdown};
use fridge_relay::upstream::UpstreamClient;

#[derive(Parser)]
#[command(name = "fridge-relay")]
#[command(about = "HTTP relay between the fridge UI and its hosted item store", long_about = None)]
struct Cli {
    /// Path to a TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the listener bind address (e.g. 127.0.0.1:9000).
    #[arg(short, long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "fridge_relay=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("fridge-relay v0.1.0 starting");

    // Load configuration (defaults, optional file, environment overrides)
    let mut config = load_config(cli.config.as_deref())?;
    if let Some(bind) = cli.bind {
        config.listener.bind_address = bind;
    }

    tracing::info!(
        bind_address = %config.listener.bind_address,
        upstream_base_url = %config.upstream.base_url,
        upstream_service_key = %config.upstream.redacted_key(),
        allowed_origin = %config.cors.allowed_origin,
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    // Shared client for the hosted table
    let upstream = UpstreamClient::new(&config.upstream)?;

    // Bind TCP listener
    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let local_addr = listener.local_addr()?;

    tracing::info!(
        address = %local_addr,
        "Listening for connections"
    );

    // Translate OS signals into the shutdown broadcast
    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(async move {
        shutdown_signal().await;
        shutdown.trigger();
    });

    // Create and run HTTP server
    let server = HttpServer::new(config, upstream)?;
    server.run(listener, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
