use axum::Json;
use utoipa::OpenApi;

use crate::api;
use crate::models::{ContactRequest, Project, ProjectInput, Skill, SkillInput};

#[derive(OpenApi)]
#[openapi(
    paths(
        api::health::health_check,
        api::contact::submit_contact,
        api::projects::list_projects,
        api::projects::create_project,
        api::projects::update_project,
        api::projects::delete_project,
        api::skills::list_skills,
        api::skills::create_skill,
        api::skills::update_skill,
        api::skills::delete_skill,
    ),
    components(schemas(Project, ProjectInput, Skill, SkillInput, ContactRequest)),
    tags(
        (name = "projects", description = "Portfolio projects"),
        (name = "skills", description = "Skills and proficiency levels"),
        (name = "contact", description = "Contact form relay"),
        (name = "health", description = "Liveness")
    )
)]
pub struct ApiDoc;

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
