//! Participant DTOs - Data Transfer Objects for participants

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// DTO to create a new participant (id and flags are assigned by the database)
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct CreateParticipantDTO {
    pub email: String,
    pub trip_id: Uuid,
}
