//! Shared helpers for the integration tests: in-memory stores, a recording
//! mailer and a `TestServer` wired to the real router.

#![allow(dead_code)]

use axum_test::TestServer;
use chrono::{TimeZone, Utc};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use trip_invites::AppState;
use trip_invites::dtos::CreateParticipantDTO;
use trip_invites::entities::{Participant, Trip};
use trip_invites::mail::{MailError, MailReceipt, MailSender, Mailer, OutgoingMail};
use trip_invites::repositories::{Create, Read};
use uuid::Uuid;

pub const TEST_BASE_URL: &str = "http://localhost:3333";
pub const TEST_SENDER_NAME: &str = "plann.er Team";
pub const TEST_SENDER_ADDRESS: &str = "support@plann.er";

/// Trip store backed by a map; counts every lookup
#[derive(Clone, Default)]
pub struct InMemoryTrips {
    trips: Arc<Mutex<HashMap<Uuid, Trip>>>,
    reads: Arc<AtomicUsize>,
}

impl InMemoryTrips {
    pub fn insert(&self, trip: Trip) {
        self.trips.lock().unwrap().insert(trip.id, trip);
    }

    pub fn reads(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }
}

impl Read<Trip, Uuid> for InMemoryTrips {
    async fn read(&self, id: &Uuid) -> Result<Option<Trip>, sqlx::Error> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        let trip = self.trips.lock().unwrap().get(id).cloned();
        Ok(trip)
    }
}

/// Participant store backed by a vector; can be switched to fail every insert
#[derive(Clone, Default)]
pub struct InMemoryParticipants {
    rows: Arc<Mutex<Vec<Participant>>>,
    fail: Arc<AtomicBool>,
}

impl InMemoryParticipants {
    pub fn rows(&self) -> Vec<Participant> {
        self.rows.lock().unwrap().clone()
    }

    pub fn fail_inserts(&self) {
        self.fail.store(true, Ordering::SeqCst);
    }
}

impl Create<Participant, CreateParticipantDTO> for InMemoryParticipants {
    async fn create(&self, data: &CreateParticipantDTO) -> Result<Participant, sqlx::Error> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(sqlx::Error::Protocol("connection reset by peer".into()));
        }

        let participant = Participant {
            id: Uuid::new_v4(),
            name: None,
            email: data.email.clone(),
            is_confirmed: false,
            is_owner: false,
            trip_id: data.trip_id,
        };
        self.rows.lock().unwrap().push(participant.clone());
        Ok(participant)
    }
}

/// Mailer that keeps every message instead of sending it
#[derive(Clone, Default)]
pub struct RecordingMailer {
    sent: Arc<Mutex<Vec<OutgoingMail>>>,
    fail: Arc<AtomicBool>,
}

impl RecordingMailer {
    pub fn sent(&self) -> Vec<OutgoingMail> {
        self.sent.lock().unwrap().clone()
    }

    pub fn fail_sends(&self) {
        self.fail.store(true, Ordering::SeqCst);
    }
}

impl Mailer for RecordingMailer {
    async fn send_mail(&self, mail: &OutgoingMail) -> Result<MailReceipt, MailError> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(MailError::Transport("smtp relay unavailable".to_string()));
        }

        // Same address and message building as the real transports
        mail.to_message()?;

        let mut sent = self.sent.lock().unwrap();
        sent.push(mail.clone());
        Ok(MailReceipt {
            id: format!("test-{}", sent.len()),
        })
    }
}

pub struct TestContext {
    pub server: TestServer,
    pub trips: InMemoryTrips,
    pub participants: InMemoryParticipants,
    pub mailer: RecordingMailer,
}

/// Creates a TestServer on top of fresh fakes
pub fn create_test_context() -> TestContext {
    let trips = InMemoryTrips::default();
    let participants = InMemoryParticipants::default();
    let mailer = RecordingMailer::default();

    let state = Arc::new(AppState::from_parts(
        trips.clone(),
        participants.clone(),
        mailer.clone(),
        TEST_BASE_URL,
        MailSender::new(TEST_SENDER_NAME, TEST_SENDER_ADDRESS),
    ));
    let app = trip_invites::create_router(state);
    let server = TestServer::new(app).expect("Failed to create test server");

    TestContext {
        server,
        trips,
        participants,
        mailer,
    }
}

/// Florianópolis, 10/03/2024 to 15/03/2024
pub fn sample_trip() -> Trip {
    Trip {
        id: Uuid::new_v4(),
        destination: "Florianópolis".to_string(),
        starts_at: Utc.with_ymd_and_hms(2024, 3, 10, 12, 0, 0).unwrap(),
        ends_at: Utc.with_ymd_and_hms(2024, 3, 15, 12, 0, 0).unwrap(),
    }
}

pub fn invites_url(trip_id: impl std::fmt::Display) -> String {
    format!("/trips/{}/invites", trip_id)
}
