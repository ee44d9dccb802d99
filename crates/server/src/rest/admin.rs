use axum::{extract::State, Json};
use shared_types::{
    AdmitRequest, AdmitResponse, AppError, DashboardScopeRequest, DashboardScopeResponse,
    RoleAssignmentConfig, SignInPlanRequest, SignInPlanResponse,
};
use std::sync::Arc;

use crate::auth::{
    admit, dashboard_category, plan_session, validate_form, DEFAULT_ADMIN_REDIRECT, FOOD_CATEGORY,
};

// ---------------------------------------------------------------------------
// POST /api/v1/admin/sign-in/plan
// ---------------------------------------------------------------------------

/// Validate the sign-in form and decide what to do with the active session.
#[utoipa::path(
    post,
    path = "/api/v1/admin/sign-in/plan",
    request_body = SignInPlanRequest,
    responses(
        (status = 200, description = "Session plan", body = SignInPlanResponse),
        (status = 422, description = "Email or password missing", body = AppError)
    ),
    tag = "admin"
)]
pub async fn sign_in_plan(
    Json(body): Json<SignInPlanRequest>,
) -> Result<Json<SignInPlanResponse>, AppError> {
    validate_form(&body.form)?;
    Ok(Json(SignInPlanResponse {
        plan: plan_session(body.active.as_ref(), &body.form.email),
    }))
}

// ---------------------------------------------------------------------------
// POST /api/v1/admin/sign-in/admit
// ---------------------------------------------------------------------------

/// Admit a signed-in user to the admin area.
#[utoipa::path(
    post,
    path = "/api/v1/admin/sign-in/admit",
    request_body = AdmitRequest,
    responses(
        (status = 200, description = "Redirect target with role", body = AdmitResponse),
        (status = 400, description = "Redirect is not a local path", body = AppError),
        (status = 403, description = "User has no admin role", body = AppError)
    ),
    tag = "admin"
)]
pub async fn sign_in_admit(
    State(roles): State<Arc<RoleAssignmentConfig>>,
    Json(body): Json<AdmitRequest>,
) -> Result<Json<AdmitResponse>, AppError> {
    let target = body.redirect.as_deref().unwrap_or(DEFAULT_ADMIN_REDIRECT);
    let redirect = admit(&body.user, &roles, target)?;
    Ok(Json(AdmitResponse { redirect }))
}

// ---------------------------------------------------------------------------
// POST /api/v1/admin/dashboard-scope
// ---------------------------------------------------------------------------

/// Complaint category an area dashboard manages for this admin.
#[utoipa::path(
    post,
    path = "/api/v1/admin/dashboard-scope",
    request_body = DashboardScopeRequest,
    responses(
        (status = 200, description = "Category name", body = DashboardScopeResponse)
    ),
    tag = "admin"
)]
pub async fn dashboard_scope(Json(body): Json<DashboardScopeRequest>) -> Json<DashboardScopeResponse> {
    let default = body.default_category.as_deref().unwrap_or(FOOD_CATEGORY);
    Json(DashboardScopeResponse {
        category: dashboard_category(&body.user, default),
    })
}
