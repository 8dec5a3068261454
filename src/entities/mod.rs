//! Entities module - Domain entities
//!
//! Every entity maps one table of the database.

pub mod participant;
pub mod trip;

pub use participant::Participant;
pub use trip::Trip;
