use axum::{
    Json,
    extract::{Path, State},
    response::Response,
};

use super::records;
use crate::infrastructure::AppState;
use crate::models::ProjectInput;

#[utoipa::path(
    get,
    path = "/projects",
    tag = "projects",
    responses(
        (status = 200, description = "Every project", body = [crate::models::Project]),
        (status = 404, description = "No projects stored"),
        (status = 500, description = "Store error")
    )
)]
pub async fn list_projects(State(state): State<AppState>) -> Response {
    records::list(state.projects.as_ref(), &state.policy).await
}

#[utoipa::path(
    post,
    path = "/projects",
    tag = "projects",
    request_body = ProjectInput,
    responses(
        (status = 201, description = "Project created", body = crate::models::Project),
        (status = 500, description = "Store error")
    )
)]
pub async fn create_project(
    State(state): State<AppState>,
    Json(input): Json<ProjectInput>,
) -> Response {
    records::create(state.projects.as_ref(), &state.policy, input).await
}

#[utoipa::path(
    put,
    path = "/projects/{id}",
    tag = "projects",
    params(("id" = String, Path, description = "Project identifier")),
    request_body = ProjectInput,
    responses(
        (status = 200, description = "Project replaced", body = crate::models::Project),
        (status = 404, description = "Project not found"),
        (status = 500, description = "Store error")
    )
)]
pub async fn update_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(input): Json<ProjectInput>,
) -> Response {
    records::update(state.projects.as_ref(), &state.policy, &id, input).await
}

#[utoipa::path(
    delete,
    path = "/projects/{id}",
    tag = "projects",
    params(("id" = String, Path, description = "Project identifier")),
    responses(
        (status = 200, description = "Project deleted; body carries `deletedProject`"),
        (status = 404, description = "Project not found"),
        (status = 500, description = "Store error")
    )
)]
pub async fn delete_project(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    records::delete(state.projects.as_ref(), &state.policy, &id).await
}
