//! Invite email content

use crate::entities::Trip;
use chrono::{DateTime, Utc};
use html_escape::{encode_double_quoted_attribute, encode_text};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InviteEmail {
    pub subject: String,
    pub html: String,
    pub confirmation_link: String,
}

/// Day/month/year, e.g. `10/03/2024`
pub fn format_date(date: &DateTime<Utc>) -> String {
    date.format("%d/%m/%Y").to_string()
}

pub fn confirmation_link(api_base_url: &str, participant_id: Uuid) -> String {
    format!(
        "{}/participants/{}/confirm",
        api_base_url.trim_end_matches('/'),
        participant_id
    )
}

pub fn invite_email(trip: &Trip, participant_id: Uuid, api_base_url: &str) -> InviteEmail {
    let starts_at = format_date(&trip.starts_at);
    let ends_at = format_date(&trip.ends_at);
    let link = confirmation_link(api_base_url, participant_id);

    let subject = format!(
        "Confirm your attendance on the trip to {} on {}",
        trip.destination, starts_at
    );

    let html = format!(
        r#"<div style="font-family: sans-serif; font-size: 1rem; line-height: 1.6;">
  <p>You have been invited to a trip to <strong>{destination}</strong> from <strong>{starts_at} to {ends_at}</strong>.</p>
  <p>To confirm your attendance, click the link below:</p>
  <p><a href="{href}">Confirm trip</a></p>
  <p>If you don't know what this email is about, just ignore it.</p>
</div>"#,
        destination = encode_text(&trip.destination),
        starts_at = starts_at,
        ends_at = ends_at,
        href = encode_double_quoted_attribute(&link),
    );

    InviteEmail {
        subject,
        html,
        confirmation_link: link,
    }
}
