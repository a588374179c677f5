//! Roster Server Library
//!
//! HTTP surface for the Roster user service.
//!
//! This library exposes the router and its building blocks for testing purposes.

pub mod api;
pub mod config;
pub mod error;
pub mod state;

// Re-export commonly used types for convenience
pub use api::router;
pub use config::ServerConfig;
pub use error::{Result, ServerError};
pub use state::AppState;
