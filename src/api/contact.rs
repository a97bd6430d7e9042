use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::infrastructure::AppState;
use crate::models::ContactRequest;
use crate::services::relay_contact_message;

/// Relay a contact form submission to the site owner's inbox.
///
/// Field values of any JSON type are read as text. A missing body, or one
/// that is not a JSON object, is treated like an empty form and reported as
/// missing fields.
#[utoipa::path(
    post,
    path = "/contact",
    tag = "contact",
    request_body = ContactRequest,
    responses(
        (status = 200, description = "Message sent"),
        (status = 400, description = "name, email or message missing"),
        (status = 500, description = "Mail relay failed")
    )
)]
pub async fn submit_contact(
    State(state): State<AppState>,
    payload: Result<Json<ContactRequest>, JsonRejection>,
) -> Response {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            tracing::debug!("Unreadable contact body: {}", rejection.body_text());
            ContactRequest::default()
        }
    };

    let contact = match request.validate() {
        Ok(contact) => contact,
        Err(reason) => {
            tracing::debug!("Rejected contact form: {}", reason);
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({
                    "message": "All fields are required",
                    "reason": reason.to_string(),
                })),
            )
                .into_response();
        }
    };

    match relay_contact_message(state.mail_relay.as_ref(), &state.contact_routing, &contact).await
    {
        Ok(()) => {
            tracing::info!("Contact message relayed");
            (
                StatusCode::OK,
                Json(json!({ "message": "Message sent successfully!" })),
            )
                .into_response()
        }
        Err(e) => {
            tracing::error!("Error sending email: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "message": "Failed to send message, please try again later." })),
            )
                .into_response()
        }
    }
}
