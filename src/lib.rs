//! Fridge Relay Library

pub mod config;
pub mod http;
pub mod item;
pub mod lifecycle;
pub mod upstream;

pub use config::schema::RelayConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
