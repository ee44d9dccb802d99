pub mod access;
pub mod admin;
pub mod complaints;

use axum::{routing::post, Router};
use crate::state::AppState;

/// Build the decision API router.
pub fn api_router() -> Router<AppState> {
    Router::new()
        // Role resolution and admin access
        .route("/api/v1/access/role", post(access::resolve))
        .route("/api/v1/access/destination", post(access::destination))
        .route("/api/v1/navigation", post(access::navigation))
        // Admin sign-in
        .route("/api/v1/admin/sign-in/plan", post(admin::sign_in_plan))
        .route("/api/v1/admin/sign-in/admit", post(admin::sign_in_admit))
        .route("/api/v1/admin/dashboard-scope", post(admin::dashboard_scope))
        // Complaints
        .route("/api/v1/admin/complaints/view", post(complaints::view))
        .route("/api/v1/complaints/submit", post(complaints::submit))
}
