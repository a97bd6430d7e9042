use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode, header},
};
use portfolio_backend::api;
use portfolio_backend::config::ResponsePolicy;
use portfolio_backend::infrastructure::AppState;
use portfolio_backend::models::{Project, Skill};
use portfolio_backend::services::ContactRouting;
use serde_json::Value;
use std::sync::Arc;
use tower::util::ServiceExt; // for `oneshot`

use crate::mocks::{MockMailRelay, MockRecordRepository};

/// Handles on every collaborator behind a test router
#[allow(dead_code)]
pub struct TestApp {
    pub router: Router,
    pub projects: MockRecordRepository<Project>,
    pub skills: MockRecordRepository<Skill>,
    pub relay: MockMailRelay,
}

#[allow(dead_code)]
pub fn setup_test_app() -> TestApp {
    setup_test_app_with(ResponsePolicy::default(), MockMailRelay::new())
}

#[allow(dead_code)]
pub fn setup_test_app_with(policy: ResponsePolicy, relay: MockMailRelay) -> TestApp {
    let projects = MockRecordRepository::<Project>::new();
    let skills = MockRecordRepository::<Skill>::new();

    let state = AppState::new(
        Arc::new(projects.clone()),
        Arc::new(skills.clone()),
        Arc::new(relay.clone()),
        ContactRouting {
            sender: "site@example.com".to_string(),
            recipient: "inbox@example.com".to_string(),
        },
        policy,
    );

    TestApp {
        router: api::api_router(state),
        projects,
        skills,
        relay,
    }
}

/// Send one request through the router and decode the JSON response body.
/// A non-JSON body comes back as `Value::Null`.
#[allow(dead_code)]
pub async fn send(
    router: &Router,
    method: Method,
    uri: &str,
    payload: Option<Value>,
) -> (StatusCode, Value) {
    let builder = Request::builder().uri(uri).method(method);
    let req = match payload {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_vec(&json).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = router.clone().oneshot(req).await.unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = serde_json::from_slice(&body).unwrap_or(Value::Null);

    (status, json)
}
