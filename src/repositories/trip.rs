//! TripRepository - Read access to trips

use super::Read;
use crate::entities::Trip;
use sqlx::{Error, PgPool};
use tracing::{debug, instrument};
use uuid::Uuid;

pub struct TripRepository {
    connection_pool: PgPool,
}

impl TripRepository {
    pub fn new(connection_pool: PgPool) -> Self {
        Self { connection_pool }
    }
}

impl Read<Trip, Uuid> for TripRepository {
    #[instrument(skip(self))]
    async fn read(&self, id: &Uuid) -> Result<Option<Trip>, Error> {
        debug!("Looking up trip");
        let trip = sqlx::query_as::<_, Trip>(
            r#"
            SELECT id, destination, starts_at, ends_at
            FROM trips
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.connection_pool)
        .await?;

        Ok(trip)
    }
}
