//! Shared request-to-store mapping for record collections.
//!
//! Every record kind is exposed the same way; the per-kind handler modules
//! only pick the repository and the body type.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use tracing::{debug, error};

use crate::domain::{DomainError, RecordRepository};
use crate::infrastructure::config::ResponsePolicy;
use crate::models::Record;

pub async fn list<R: Record>(repo: &dyn RecordRepository<R>, policy: &ResponsePolicy) -> Response {
    match repo.find_all().await {
        Ok(records) if records.is_empty() && policy.empty_list_not_found => {
            debug!(collection = R::COLLECTION, "List on empty collection");
            (
                StatusCode::NOT_FOUND,
                Json(json!({ "message": format!("No {} found", R::PLURAL) })),
            )
                .into_response()
        }
        Ok(records) => (StatusCode::OK, Json(records)).into_response(),
        Err(e) => store_failure(policy, format!("Error fetching {}", R::PLURAL), &e),
    }
}

pub async fn create<R: Record>(
    repo: &dyn RecordRepository<R>,
    policy: &ResponsePolicy,
    fields: R::Fields,
) -> Response {
    match repo.create(fields).await {
        Ok(record) => (StatusCode::CREATED, Json(record)).into_response(),
        Err(e) => store_failure(policy, format!("Error creating {}", singular::<R>()), &e),
    }
}

pub async fn update<R: Record>(
    repo: &dyn RecordRepository<R>,
    policy: &ResponsePolicy,
    id: &str,
    fields: R::Fields,
) -> Response {
    match repo.update_by_id(id, fields).await {
        Ok(Some(record)) => (StatusCode::OK, Json(record)).into_response(),
        Ok(None) | Err(DomainError::NotFound) => not_found::<R>(id),
        Err(e) => store_failure(policy, format!("Error updating {}", singular::<R>()), &e),
    }
}

pub async fn delete<R: Record>(
    repo: &dyn RecordRepository<R>,
    policy: &ResponsePolicy,
    id: &str,
) -> Response {
    match repo.delete_by_id(id).await {
        Ok(Some(record)) => (
            StatusCode::OK,
            Json(json!({
                "message": format!("{} deleted", R::SINGULAR),
                (format!("deleted{}", R::SINGULAR)): record,
            })),
        )
            .into_response(),
        Ok(None) | Err(DomainError::NotFound) => not_found::<R>(id),
        Err(e) => store_failure(policy, format!("Error deleting {}", singular::<R>()), &e),
    }
}

fn singular<R: Record>() -> String {
    R::SINGULAR.to_lowercase()
}

fn not_found<R: Record>(id: &str) -> Response {
    debug!(collection = R::COLLECTION, id, "Record not found");
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "message": format!("{} not found", R::SINGULAR) })),
    )
        .into_response()
}

fn store_failure(policy: &ResponsePolicy, message: String, err: &DomainError) -> Response {
    error!("{}: {}", message, err);

    let body = if policy.expose_store_errors {
        json!({ "message": message, "error": err.to_string() })
    } else {
        json!({ "message": message })
    };
    (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
}
