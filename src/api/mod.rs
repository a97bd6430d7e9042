pub mod contact;
pub mod health;
pub mod projects;
pub mod records;
pub mod skills;

use axum::{
    Router,
    routing::{get, post, put},
};

use crate::api_docs;
use crate::infrastructure::AppState;

pub fn api_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // OpenAPI document
        .route("/api-docs/openapi.json", get(api_docs::openapi_json))
        // Contact form
        .route("/contact", post(contact::submit_contact))
        // Projects
        .route(
            "/projects",
            get(projects::list_projects).post(projects::create_project),
        )
        .route(
            "/projects/:id",
            put(projects::update_project).delete(projects::delete_project),
        )
        // Skills
        .route("/skills", get(skills::list_skills).post(skills::create_skill))
        .route(
            "/skills/:id",
            put(skills::update_skill).delete(skills::delete_skill),
        )
        .with_state(state)
}
