//! Upstream store subsystem.
//!
//! # Data Flow
//! ```text
//! validated FridgeItem
//!     → client.rs (POST {base_url}/rest/v1/fridge_items, credential headers)
//!     → UpstreamReply { status, raw body text }
//!     → http/response.rs (decode, envelope or detail)
//! ```
//!
//! # Design Decisions
//! - One synchronous round-trip per request: no retries, no pooling beyond
//!   what the HTTP client does internally
//! - The client never interprets the reply; status and body text travel back
//!   untouched so translation happens in one place

pub mod client;
pub mod types;

pub use client::UpstreamClient;
pub use types::{UpstreamError, UpstreamReply, UpstreamResult};
