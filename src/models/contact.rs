//! Contact form payload
//!
//! A contact message is never persisted. The raw request is checked for
//! presence of every field and turned into a `ContactMessage`, which lives
//! only as long as the request that carried it.

use serde::Deserialize;
use thiserror::Error;
use utoipa::ToSchema;

/// Raw `POST /contact` body, before validation
#[derive(Clone, Debug, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct ContactRequest {
    #[serde(deserialize_with = "super::deserialize_text")]
    pub name: Option<String>,
    #[serde(deserialize_with = "super::deserialize_text")]
    pub email: Option<String>,
    #[serde(deserialize_with = "super::deserialize_text")]
    pub message: Option<String>,
}

/// Validated contact form submission
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ContactValidationError {
    #[error("name is required")]
    MissingName,
    #[error("email is required")]
    MissingEmail,
    #[error("message is required")]
    MissingMessage,
}

impl ContactRequest {
    /// Check that name, email and message are all present and non-empty.
    /// Values are taken verbatim, so whitespace counts as content.
    /// Reports the first missing field in that order.
    pub fn validate(self) -> Result<ContactMessage, ContactValidationError> {
        let name = present(self.name).ok_or(ContactValidationError::MissingName)?;
        let email = present(self.email).ok_or(ContactValidationError::MissingEmail)?;
        let message = present(self.message).ok_or(ContactValidationError::MissingMessage)?;

        Ok(ContactMessage {
            name,
            email,
            message,
        })
    }
}

fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(name: Option<&str>, email: Option<&str>, message: Option<&str>) -> ContactRequest {
        ContactRequest {
            name: name.map(String::from),
            email: email.map(String::from),
            message: message.map(String::from),
        }
    }

    #[test]
    fn test_complete_request_validates() {
        let msg = request(Some("Ada"), Some("ada@example.com"), Some("Hello"))
            .validate()
            .unwrap();
        assert_eq!(msg.name, "Ada");
        assert_eq!(msg.email, "ada@example.com");
        assert_eq!(msg.message, "Hello");
    }

    #[test]
    fn test_missing_fields_are_reported_in_order() {
        assert_eq!(
            request(None, None, None).validate(),
            Err(ContactValidationError::MissingName)
        );
        assert_eq!(
            request(Some("Ada"), Some(""), Some("Hello")).validate(),
            Err(ContactValidationError::MissingEmail)
        );
        assert_eq!(
            request(Some("Ada"), Some("ada@example.com"), None).validate(),
            Err(ContactValidationError::MissingMessage)
        );
    }

    #[test]
    fn test_whitespace_is_content() {
        let msg = request(Some("Ada"), Some("ada@example.com"), Some(" "))
            .validate()
            .unwrap();
        assert_eq!(msg.message, " ");
    }

    #[test]
    fn test_non_string_values_are_read_as_text() {
        let req: ContactRequest = serde_json::from_value(serde_json::json!({
            "name": "Ada",
            "email": "ada@example.com",
            "message": 42
        }))
        .unwrap();
        assert_eq!(req.validate().unwrap().message, "42");
    }
}
