//! Route definitions for the HTTP API.

pub mod health;
pub mod notes;
pub mod users;

use axum::Router;
use serde::Serialize;

use crate::state::AppState;

/// JSON body for confirmation messages.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    /// Human-readable confirmation.
    pub message: String,
}

/// Build the complete router with all routes.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(health::routes())
        .merge(notes::routes())
        .merge(users::routes())
        .with_state(state)
}
