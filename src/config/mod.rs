//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! built-in defaults
//!     → loader.rs (optional TOML file, then environment overlay)
//!     → validation.rs (semantic checks, all errors reported at once)
//!     → RelayConfig (validated, immutable for the process lifetime)
//!     → injected explicitly into server and upstream client
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; no hot reload
//! - All fields have defaults so the two upstream values are the only
//!   required inputs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError, ENV_BASE_URL, ENV_SERVICE_KEY};
pub use schema::{CorsConfig, ListenerConfig, RelayConfig, TimeoutConfig, UpstreamConfig};
pub use validation::{validate_config, ValidationError};
