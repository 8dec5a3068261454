//! Mail module - Outgoing email
//!
//! Handlers only see the [`Mailer`] capability. The concrete transport
//! ([`SmtpMailer`] or [`LogMailer`]) is picked from configuration at startup.

pub mod invite_template;
pub mod log_transport;
pub mod smtp;

pub use invite_template::{InviteEmail, confirmation_link, format_date, invite_email};
pub use log_transport::LogMailer;
pub use smtp::SmtpMailer;

use crate::core::config::{MailConfig, MailTransportKind};
use lettre::Message;
use lettre::message::{Mailbox, header::ContentType};
use std::future::Future;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MailError {
    #[error("invalid email address: {0}")]
    Address(#[from] lettre::address::AddressError),

    #[error("failed to build message: {0}")]
    Build(#[from] lettre::error::Error),

    #[error("transport error: {0}")]
    Transport(String),
}

/// Identity the invite emails are sent from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailSender {
    pub name: String,
    pub address: String,
}

impl MailSender {
    pub fn new(name: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            address: address.into(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct OutgoingMail {
    pub from: MailSender,
    pub to: String,
    pub subject: String,
    pub html: String,
}

impl OutgoingMail {
    /// Builds the RFC 5322 message handed to the transport
    pub fn to_message(&self) -> Result<Message, MailError> {
        let from = Mailbox::new(Some(self.from.name.clone()), self.from.address.parse()?);
        let to: Mailbox = self.to.parse()?;

        let message = Message::builder()
            .from(from)
            .to(to)
            .subject(self.subject.as_str())
            .header(ContentType::TEXT_HTML)
            .body(self.html.clone())?;

        Ok(message)
    }
}

/// Handle returned by a transport once it accepted a message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailReceipt {
    pub id: String,
}

/// Capability: send a formatted message to an address
pub trait Mailer: Send + Sync + 'static {
    fn send_mail(
        &self,
        mail: &OutgoingMail,
    ) -> impl Future<Output = Result<MailReceipt, MailError>> + Send;
}

/// Transport chosen from [`MailConfig`]
pub enum ConfiguredMailer {
    Smtp(SmtpMailer),
    Log(LogMailer),
}

impl ConfiguredMailer {
    pub fn from_config(config: &MailConfig) -> Result<Self, MailError> {
        match config.transport {
            MailTransportKind::Smtp => Ok(Self::Smtp(SmtpMailer::from_config(config)?)),
            MailTransportKind::Log => Ok(Self::Log(LogMailer::new())),
        }
    }
}

impl Mailer for ConfiguredMailer {
    async fn send_mail(&self, mail: &OutgoingMail) -> Result<MailReceipt, MailError> {
        match self {
            Self::Smtp(mailer) => mailer.send_mail(mail).await,
            Self::Log(mailer) => mailer.send_mail(mail).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mail(to: &str) -> OutgoingMail {
        OutgoingMail {
            from: MailSender::new("plann.er Team", "support@plann.er"),
            to: to.to_string(),
            subject: "Confirm your attendance".to_string(),
            html: "<p>hello</p>".to_string(),
        }
    }

    #[test]
    fn builds_html_message() {
        let message = mail("guest@example.com").to_message().unwrap();
        let raw = String::from_utf8(message.formatted()).unwrap();

        assert!(raw.contains("To: guest@example.com"));
        assert!(raw.contains("Content-Type: text/html"));
        assert!(raw.contains("Subject: Confirm your attendance"));
    }

    #[test]
    fn rejects_unparseable_recipient() {
        let err = mail("not-an-email").to_message().unwrap_err();
        assert!(matches!(err, MailError::Address(_)));
    }
}
