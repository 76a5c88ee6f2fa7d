//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the axum Router with all handlers
//! - Wire up middleware (tracing, timeout, body limit, request ID, CORS)
//! - Serve on a caller-supplied listener with graceful shutdown

use std::time::Duration;

use axum::http::HeaderValue;
use axum::routing::{get, post};
use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::{ConfigError, RelayConfig, ValidationError};
use crate::http::handlers;
use crate::http::request::{propagate_request_id_layer, set_request_id_layer};
use crate::lifecycle::ShutdownListener;
use crate::upstream::UpstreamClient;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub upstream: UpstreamClient,
}

/// Build the relay's router: routes, state and middleware stack.
pub fn app(config: &RelayConfig, upstream: UpstreamClient) -> Result<Router, ConfigError> {
    let state = AppState { upstream };

    let router = Router::new()
        .route("/add-item", post(handlers::add_item))
        .route("/health", get(handlers::health))
        .with_state(state)
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.timeouts.request_secs,
        )))
        .layer(RequestBodyLimitLayer::new(config.listener.max_body_bytes))
        .layer(propagate_request_id_layer())
        .layer(TraceLayer::new_for_http())
        .layer(set_request_id_layer())
        .layer(cors_layer(&config.cors.allowed_origin)?);

    Ok(router)
}

/// HTTP server for the relay.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server from configuration and an
    /// already-constructed upstream client.
    pub fn new(config: RelayConfig, upstream: UpstreamClient) -> Result<Self, ConfigError> {
        let router = app(&config, upstream)?;
        Ok(Self { router })
    }

    /// Run the server, accepting connections on the given listener until the
    /// shutdown listener fires, then drain in-flight requests.
    pub async fn run(
        self,
        listener: TcpListener,
        shutdown: ShutdownListener,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown.wait())
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// CORS layer permitting exactly one browser origin, with credentials.
///
/// Methods and headers mirror the preflight request; a wildcard grant cannot
/// be combined with credentials.
fn cors_layer(allowed_origin: &str) -> Result<CorsLayer, ConfigError> {
    let origin: HeaderValue = allowed_origin.parse().map_err(|_| {
        ConfigError::Validation(vec![ValidationError::InvalidAllowedOrigin {
            origin: allowed_origin.to_string(),
        }])
    })?;

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true))
}
