//! SMTP implementation of MailRelay
//!
//! The transport is built once at startup and shared by every request.

use async_trait::async_trait;
use lettre::message::{Mailbox, MultiPart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use tracing::info;

use crate::domain::{DomainError, MailRelay, OutgoingEmail};
use crate::infrastructure::config::MailConfig;

pub struct SmtpMailRelay {
    transport: AsyncSmtpTransport<Tokio1Executor>,
}

impl SmtpMailRelay {
    /// Build an authenticated, TLS-wrapped transport to `config.smtp_host`.
    /// No connection is opened until the first message is sent.
    pub fn new(config: &MailConfig) -> Result<Self, DomainError> {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(&config.smtp_host)
            .map_err(|e| DomainError::Relay(format!("Invalid SMTP relay host: {}", e)))?
            .credentials(Credentials::new(
                config.username.clone(),
                config.password.clone(),
            ))
            .build();

        info!("SMTP relay configured for {}", config.smtp_host);
        Ok(Self { transport })
    }
}

#[async_trait]
impl MailRelay for SmtpMailRelay {
    async fn send(&self, email: OutgoingEmail) -> Result<(), DomainError> {
        let message = build_message(email)?;

        self.transport
            .send(message)
            .await
            .map_err(|e| DomainError::Relay(e.to_string()))?;

        Ok(())
    }
}

fn parse_mailbox(role: &str, address: &str) -> Result<Mailbox, DomainError> {
    address
        .parse()
        .map_err(|e| DomainError::Relay(format!("Invalid {} address '{}': {}", role, address, e)))
}

/// Assemble a multipart/alternative message carrying both bodies.
fn build_message(email: OutgoingEmail) -> Result<Message, DomainError> {
    let from = parse_mailbox("sender", &email.from)?;
    let to = parse_mailbox("recipient", &email.to)?;

    Message::builder()
        .from(from)
        .to(to)
        .subject(email.subject)
        .multipart(MultiPart::alternative_plain_html(
            email.text_body,
            email.html_body,
        ))
        .map_err(|e| DomainError::Relay(format!("Failed to build message: {}", e)))
}
