//! Invite DTOs - Request and response bodies of the invite endpoint

use lettre::Address;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use uuid::Uuid;
use validator::{Validate, ValidationError};

/// Body of `POST /trips/{tripId}/invites`
#[derive(Serialize, Deserialize, Debug, Clone, Validate)]
pub struct CreateInviteDTO {
    #[validate(
        email(message = "Invalid email address"),
        custom(function = "validate_recipient_address")
    )]
    pub email: String,
}

/// Accepts only addresses the mail layer can turn into a recipient: a dot-atom
/// local part and a dotted domain ending in an alphabetic TLD (no
/// `user@localhost`, no IP literals).
fn validate_recipient_address(email: &str) -> Result<(), ValidationError> {
    let invalid = || {
        ValidationError::new("email").with_message(Cow::Borrowed("Invalid email address"))
    };

    let address = email.parse::<Address>().map_err(|_| invalid())?;

    let user = address.user();
    if user.starts_with('.') || user.ends_with('.') || user.contains("..") {
        return Err(invalid());
    }

    let has_tld = address
        .domain()
        .rsplit_once('.')
        .is_some_and(|(host, tld)| {
            !host.is_empty() && tld.len() >= 2 && tld.chars().all(|c| c.is_ascii_alphabetic())
        });

    if has_tld { Ok(()) } else { Err(invalid()) }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InviteCreatedDTO {
    pub participant_id: Uuid,
}
