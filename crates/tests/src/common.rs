use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::Value;
use server::state::AppState;
use shared_types::RoleAssignmentConfig;
use tower::ServiceExt;

/// Allow-list and email map shared by the integration tests.
pub const ADMIN_EMAILS: &str = "Dean@College.edu, warden@college.edu";
pub const ADMIN_EMAIL_ROLES: &str =
    "a@x.com:hostel-admin, Cook@College.edu:food-admin, principal@college.edu:super-admin, bad-pair";

pub fn test_config() -> RoleAssignmentConfig {
    RoleAssignmentConfig::from_lists(ADMIN_EMAILS, ADMIN_EMAIL_ROLES)
}

/// Build the full API router over the test role assignments.
pub fn test_app() -> Router {
    server::openapi::api_router(AppState::new(test_config()))
}

/// POST JSON to a route.
pub async fn post_json(app: &Router, uri: &str, body: &str) -> (StatusCode, Value) {
    let req = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    send(app, req).await
}

/// GET a route.
pub async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    let req = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    send(app, req).await
}

async fn send(app: &Router, req: Request<Body>) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(req)
        .await
        .expect("Failed to send request");

    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");

    let body: Value = if body_bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body_bytes).unwrap_or(Value::String(
            String::from_utf8_lossy(&body_bytes).to_string(),
        ))
    };

    (status, body)
}
