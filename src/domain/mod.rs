//! Domain layer - Pure business abstractions
//!
//! This layer contains NO framework dependencies (no MongoDB driver, no Axum,
//! no SMTP client). Only trait definitions and domain error types.

pub mod errors;
pub mod mailer;
pub mod repositories;

pub use errors::DomainError;
pub use mailer::{MailRelay, OutgoingEmail};
pub use repositories::*;
