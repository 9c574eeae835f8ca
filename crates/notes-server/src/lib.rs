//! notes-server: HTTP API server for the notes service
//!
//! This crate provides the REST endpoints for notes (list, create, update,
//! delete) and a minimal users surface, on top of the notes-store
//! PostgreSQL layer.
//!
//! # Architecture
//!
//! The server is built on Axum with a middleware stack for:
//! - Request tracing and logging
//! - CORS handling
//! - Request ID generation
//! - JSON error responses
//!
//! # Usage
//!
//! ```rust,ignore
//! use notes_server::{config::ServerConfig, routes, state::AppState};
//!
//! let state = AppState::new(store, config);
//! let app = routes::build_router(state);
//! ```

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;

// Re-exports for convenience
pub use config::{ConfigError, ServerConfig};
pub use error::{ApiError, ApiResult};
pub use state::AppState;

// Re-export dependent crates
pub use notes_core;
pub use notes_store;
