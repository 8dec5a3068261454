//! Trip invite service library - exposes the main modules for the binary and the tests

pub mod core;
pub mod dtos;
pub mod entities;
pub mod mail;
pub mod repositories;
pub mod services;

// Re-export of the main types for easier imports
pub use crate::core::{AppError, AppState, config};
pub use services::root;

use axum::{
    Router,
    routing::{get, post},
};
use mail::Mailer;
use repositories::{ParticipantStore, TripStore};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// Builds the main router of the application
pub fn create_router<T, P, M>(state: Arc<AppState<T, P, M>>) -> Router
where
    T: TripStore,
    P: ParticipantStore,
    M: Mailer,
{
    Router::new()
        .route("/", get(root))
        .nest("/trips", configure_trip_routes())
        .with_state(state)
}

/// Routes nested under `/trips`
fn configure_trip_routes<T, P, M>() -> Router<Arc<AppState<T, P, M>>>
where
    T: TripStore,
    P: ParticipantStore,
    M: Mailer,
{
    use services::*;

    Router::new().route("/{trip_id}/invites", post(create_invite::<T, P, M>))
}

/// Installs the global tracing subscriber, filtered by `RUST_LOG` (default `info`)
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
