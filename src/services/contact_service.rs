//! Contact Service - turns a validated contact form into an outgoing email

use html_escape::encode_text;

use crate::domain::{DomainError, MailRelay, OutgoingEmail};
use crate::models::ContactMessage;

pub const CONTACT_SUBJECT: &str = "New Contact Form Submission";

/// Where contact messages are sent from and delivered to.
/// Both come from configuration, never from the request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactRouting {
    pub sender: String,
    pub recipient: String,
}

/// Compose the plain-text and HTML bodies for a contact message.
pub fn compose(routing: &ContactRouting, contact: &ContactMessage) -> OutgoingEmail {
    let text_body = format!(
        "You have a new message from {} ({}):\n\n{}",
        contact.name, contact.email, contact.message
    );
    let html_body = format!(
        "<p>You have a new message from <strong>{}</strong> ({}):</p><p>{}</p>",
        encode_text(&contact.name),
        encode_text(&contact.email),
        encode_text(&contact.message)
    );

    OutgoingEmail {
        from: routing.sender.clone(),
        to: routing.recipient.clone(),
        subject: CONTACT_SUBJECT.to_string(),
        text_body,
        html_body,
    }
}

/// Send a contact message through the relay. One attempt, no retry.
pub async fn relay_contact_message(
    relay: &dyn MailRelay,
    routing: &ContactRouting,
    contact: &ContactMessage,
) -> Result<(), DomainError> {
    relay.send(compose(routing, contact)).await
}
