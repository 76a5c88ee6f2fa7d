//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (axum setup, middleware, CORS)
//!     → request.rs (request id stamping)
//!     → handlers.rs (validate item, forward to upstream)
//!     → response.rs (translate reply, map errors)
//!     → Send to client
//! ```

pub mod handlers;
pub mod request;
pub mod response;
pub mod server;

pub use request::{MakeRequestUuid, X_REQUEST_ID};
pub use response::{RelayError, INVALID_DATE_MESSAGE};
pub use server::{app, AppState, HttpServer};
