//! Invite services - Invitation of participants to a trip

use crate::core::{AppError, AppState};
use crate::dtos::{CreateInviteDTO, CreateParticipantDTO, InviteCreatedDTO};
use crate::mail::{Mailer, OutgoingMail, invite_email};
use crate::repositories::{ParticipantStore, TripStore};
use axum::extract::rejection::JsonRejection;
use axum::extract::{Json, Path, State};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;
use validator::Validate;

#[instrument(skip(state, payload), fields(trip_id = %trip_id))]
pub async fn create_invite<T, P, M>(
    State(state): State<Arc<AppState<T, P, M>>>,
    Path(trip_id): Path<String>,
    payload: Result<Json<CreateInviteDTO>, JsonRejection>,
) -> Result<Json<InviteCreatedDTO>, AppError>
where
    T: TripStore,
    P: ParticipantStore,
    M: Mailer,
{
    debug!("Creating invite");
    // 1. Validate path and body before touching the store
    // 2. Look up the trip, fail with a client error when it does not exist
    // 3. Insert the participant (the store assigns the id)
    // 4. Compose and dispatch the confirmation email
    // 5. Return the participant id
    //
    // A mail failure after step 3 leaves the participant in place.

    let trip_id = Uuid::parse_str(&trip_id).map_err(|e| {
        warn!("Malformed trip id: {}", e);
        AppError::validation(format!("tripId: {}", e))
    })?;

    let Json(body) = payload?;
    body.validate()?;

    let trip = state.trip.read(&trip_id).await?.ok_or_else(|| {
        warn!("Trip not found: {}", trip_id);
        AppError::bad_request("Trip not found")
    })?;

    let participant = state
        .participant
        .create(&CreateParticipantDTO {
            email: body.email,
            trip_id,
        })
        .await?;

    debug!("Participant created with id {}", participant.id);

    let email = invite_email(&trip, participant.id, &state.api_base_url);

    let receipt = state
        .mailer
        .send_mail(&OutgoingMail {
            from: state.mail_sender.clone(),
            to: participant.email.clone(),
            subject: email.subject,
            html: email.html,
        })
        .await?;

    info!(
        participant_id = %participant.id,
        receipt = %receipt.id,
        "Invite email dispatched"
    );

    Ok(Json(InviteCreatedDTO {
        participant_id: participant.id,
    }))
}
