use axum::{
    Json,
    extract::{Path, State},
    response::Response,
};

use super::records;
use crate::infrastructure::AppState;
use crate::models::SkillInput;

#[utoipa::path(
    get,
    path = "/skills",
    tag = "skills",
    responses(
        (status = 200, description = "Every skill", body = [crate::models::Skill]),
        (status = 404, description = "No skills stored"),
        (status = 500, description = "Store error")
    )
)]
pub async fn list_skills(State(state): State<AppState>) -> Response {
    records::list(state.skills.as_ref(), &state.policy).await
}

#[utoipa::path(
    post,
    path = "/skills",
    tag = "skills",
    request_body = SkillInput,
    responses(
        (status = 201, description = "Skill created", body = crate::models::Skill),
        (status = 500, description = "Store error")
    )
)]
pub async fn create_skill(
    State(state): State<AppState>,
    Json(input): Json<SkillInput>,
) -> Response {
    records::create(state.skills.as_ref(), &state.policy, input).await
}

#[utoipa::path(
    put,
    path = "/skills/{id}",
    tag = "skills",
    params(("id" = String, Path, description = "Skill identifier")),
    request_body = SkillInput,
    responses(
        (status = 200, description = "Skill replaced", body = crate::models::Skill),
        (status = 404, description = "Skill not found"),
        (status = 500, description = "Store error")
    )
)]
pub async fn update_skill(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(input): Json<SkillInput>,
) -> Response {
    records::update(state.skills.as_ref(), &state.policy, &id, input).await
}

#[utoipa::path(
    delete,
    path = "/skills/{id}",
    tag = "skills",
    params(("id" = String, Path, description = "Skill identifier")),
    responses(
        (status = 200, description = "Skill deleted; body carries `deletedSkill`"),
        (status = 404, description = "Skill not found"),
        (status = 500, description = "Store error")
    )
)]
pub async fn delete_skill(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    records::delete(state.skills.as_ref(), &state.policy, &id).await
}
