//! Application State - State shared by every route
//!
//! Holds the stores, the mail transport and the settings the invite flow
//! needs. Everything is read-only once the server is running.

use crate::core::Config;
use crate::mail::{ConfiguredMailer, MailSender};
use crate::repositories::{ParticipantRepository, TripRepository};
use sqlx::PgPool;

/// Global state shared between all routes.
///
/// Generic over the store and mail capabilities so tests can plug in fakes;
/// the defaults are the production implementations.
pub struct AppState<T = TripRepository, P = ParticipantRepository, M = ConfiguredMailer> {
    /// Trip lookup by id
    pub trip: T,

    /// Participant creation
    pub participant: P,

    /// Outgoing mail transport
    pub mailer: M,

    /// Base URL confirmation links point at
    pub api_base_url: String,

    /// Sender identity of invite emails
    pub mail_sender: MailSender,
}

impl AppState {
    /// Creates the production state: Postgres repositories sharing `pool`
    /// plus the configured mail transport.
    pub fn new(pool: PgPool, mailer: ConfiguredMailer, config: &Config) -> Self {
        Self {
            trip: TripRepository::new(pool.clone()),
            participant: ParticipantRepository::new(pool),
            mailer,
            api_base_url: config.api_base_url.clone(),
            mail_sender: MailSender::new(&config.mail.from_name, &config.mail.from_address),
        }
    }
}

impl<T, P, M> AppState<T, P, M> {
    pub fn from_parts(
        trip: T,
        participant: P,
        mailer: M,
        api_base_url: impl Into<String>,
        mail_sender: MailSender,
    ) -> Self {
        Self {
            trip,
            participant,
            mailer,
            api_base_url: api_base_url.into(),
            mail_sender,
        }
    }
}
