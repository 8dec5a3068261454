//! Trip entity - A planned journey with destination and date range

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Trips are created elsewhere; this service only reads them.
#[derive(Serialize, Deserialize, Debug, Clone, sqlx::FromRow)]
pub struct Trip {
    pub id: Uuid,
    pub destination: String,
    pub starts_at: DateTime<Utc>,
    pub ends_at: DateTime<Utc>,
}
