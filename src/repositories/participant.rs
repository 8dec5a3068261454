//! ParticipantRepository - Persistence of trip participants

use super::Create;
use crate::dtos::CreateParticipantDTO;
use crate::entities::Participant;
use sqlx::{Error, PgPool};
use tracing::{debug, instrument};

pub struct ParticipantRepository {
    connection_pool: PgPool,
}

impl ParticipantRepository {
    pub fn new(connection_pool: PgPool) -> Self {
        Self { connection_pool }
    }
}

impl Create<Participant, CreateParticipantDTO> for ParticipantRepository {
    // id, name, is_confirmed and is_owner come from the column defaults
    #[instrument(skip(self, data), fields(trip_id = %data.trip_id))]
    async fn create(&self, data: &CreateParticipantDTO) -> Result<Participant, Error> {
        let participant = sqlx::query_as::<_, Participant>(
            r#"
            INSERT INTO participants (email, trip_id)
            VALUES ($1, $2)
            RETURNING id, name, email, is_confirmed, is_owner, trip_id
            "#,
        )
        .bind(&data.email)
        .bind(data.trip_id)
        .fetch_one(&self.connection_pool)
        .await?;

        debug!("Participant {} inserted", participant.id);
        Ok(participant)
    }
}
