//! Services module - HTTP service handlers
//!
//! Every sub-module serves the endpoints of one feature.

pub mod invite;

pub use invite::create_invite;

use axum::{http::StatusCode, response::IntoResponse};

/// Root endpoint - health check
pub async fn root() -> impl IntoResponse {
    (StatusCode::OK, "Server is running!")
}
