//! Outbound mail contract

use async_trait::async_trait;

use super::DomainError;

/// A fully composed message ready for delivery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingEmail {
    pub from: String,
    pub to: String,
    pub subject: String,
    pub text_body: String,
    pub html_body: String,
}

/// Single-attempt delivery through an external relay.
///
/// Failures come back as `DomainError::Relay`; there is no retry.
#[async_trait]
pub trait MailRelay: Send + Sync {
    async fn send(&self, email: OutgoingEmail) -> Result<(), DomainError>;
}
