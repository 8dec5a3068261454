//! Repositories module - Database access for every entity
//!
//! Queries go through the runtime `sqlx::query_as` API with `FromRow`
//! entities, so the crate builds without a live database.

pub mod participant;
pub mod traits;
pub mod trip;

pub use traits::{Create, Read};

pub use participant::ParticipantRepository;
pub use trip::TripRepository;

use crate::dtos::CreateParticipantDTO;
use crate::entities::{Participant, Trip};
use uuid::Uuid;

/// Capability: look up a trip by id
pub trait TripStore: Read<Trip, Uuid> + Send + Sync + 'static {}

impl<T> TripStore for T where T: Read<Trip, Uuid> + Send + Sync + 'static {}

/// Capability: create a participant
pub trait ParticipantStore:
    Create<Participant, CreateParticipantDTO> + Send + Sync + 'static
{
}

impl<T> ParticipantStore for T where
    T: Create<Participant, CreateParticipantDTO> + Send + Sync + 'static
{
}
