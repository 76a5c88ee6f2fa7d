//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check the upstream base URL is a usable http(s) URL
//! - Check the credential is present and the listener/CORS values parse
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Validation is a pure function: RelayConfig → Result<(), Vec<ValidationError>>
//! - Runs before the config is accepted into the system

use std::net::SocketAddr;

use axum::http::HeaderValue;
use thiserror::Error;
use url::Url;

use crate::config::schema::RelayConfig;

/// A single semantic problem found in a [`RelayConfig`].
#[derive(Debug, Error)]
pub enum ValidationError {
    /// No upstream base URL was supplied at all.
    #[error("upstream base URL is required (set SUPABASE_URL)")]
    MissingBaseUrl,

    /// The upstream base URL does not parse as an http(s) URL.
    #[error("upstream base URL {url:?} is not a valid http(s) URL: {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    /// No service credential was supplied.
    #[error("upstream service key is required (set SUPABASE_SERVICE_KEY)")]
    MissingServiceKey,

    /// The listener bind address does not parse.
    #[error("bind address {addr:?} is not a valid socket address")]
    InvalidBindAddress { addr: String },

    /// The allowed CORS origin cannot be sent as a header value.
    #[error("allowed origin {origin:?} is not a valid origin value")]
    InvalidAllowedOrigin { origin: String },

    /// The inbound request timeout is zero.
    #[error("request timeout must be greater than zero")]
    ZeroRequestTimeout,
}

/// Validate a configuration, collecting every problem found.
pub fn validate_config(config: &RelayConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.upstream.base_url.is_empty() {
        errors.push(ValidationError::MissingBaseUrl);
    } else {
        match Url::parse(&config.upstream.base_url) {
            Ok(url) if url.scheme() == "http" || url.scheme() == "https" => {}
            Ok(url) => errors.push(ValidationError::InvalidBaseUrl {
                url: config.upstream.base_url.clone(),
                reason: format!("unsupported scheme {:?}", url.scheme()),
            }),
            Err(e) => errors.push(ValidationError::InvalidBaseUrl {
                url: config.upstream.base_url.clone(),
                reason: e.to_string(),
            }),
        }
    }

    if config.upstream.service_key.is_empty() {
        errors.push(ValidationError::MissingServiceKey);
    }

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidBindAddress {
            addr: config.listener.bind_address.clone(),
        });
    }

    if config.cors.allowed_origin.is_empty()
        || HeaderValue::from_str(&config.cors.allowed_origin).is_err()
    {
        errors.push(ValidationError::InvalidAllowedOrigin {
            origin: config.cors.allowed_origin.clone(),
        });
    }

    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::ZeroRequestTimeout);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
