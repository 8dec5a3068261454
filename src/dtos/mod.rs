//! DTOs module - Data Transfer Objects
//!
//! DTOs keep the external (API) representation apart from the entities.

pub mod invite;
pub mod participant;

pub use invite::{CreateInviteDTO, InviteCreatedDTO};
pub use participant::CreateParticipantDTO;
