//! Development transport: messages are written to the log, never delivered

use super::{MailError, MailReceipt, Mailer, OutgoingMail};
use tracing::{info, instrument};
use uuid::Uuid;

#[derive(Debug, Default, Clone)]
pub struct LogMailer;

impl LogMailer {
    pub fn new() -> Self {
        Self
    }
}

impl Mailer for LogMailer {
    #[instrument(skip(self, mail), fields(to = %mail.to))]
    async fn send_mail(&self, mail: &OutgoingMail) -> Result<MailReceipt, MailError> {
        // Still build the message so malformed addresses fail like they would over SMTP
        let message = mail.to_message()?;
        let id = format!("log-{}", Uuid::new_v4());

        info!(
            message_id = %id,
            subject = %mail.subject,
            "Mail not delivered (log transport):\n{}",
            String::from_utf8_lossy(&message.formatted())
        );

        Ok(MailReceipt { id })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mail::MailSender;

    #[tokio::test]
    async fn returns_a_synthetic_receipt() {
        let mail = OutgoingMail {
            from: MailSender::new("plann.er Team", "support@plann.er"),
            to: "guest@example.com".to_string(),
            subject: "Hi".to_string(),
            html: "<p>Hi</p>".to_string(),
        };

        let receipt = LogMailer::new().send_mail(&mail).await.unwrap();
        assert!(receipt.id.starts_with("log-"));
    }
}
