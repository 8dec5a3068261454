//! Core Module - Infrastructure components of the application
//!
//! - Configuration
//! - Error handling
//! - Application state

pub mod config;
pub mod error;
pub mod state;

// Re-exports for shorter imports
pub use config::Config;
pub use error::AppError;
pub use state::AppState;
