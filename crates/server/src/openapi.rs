use axum::Router;
use shared_types::{
    AdminRole, AdminSignInForm, AdmitRequest, AdmitResponse, AppError, AppErrorKind, Complaint,
    ComplaintAuthor, ComplaintFilter, ComplaintRow, ComplaintStats, ComplaintSubmission,
    ComplaintViewRequest, ComplaintViewResponse, CountEntry, DashboardScopeRequest,
    DashboardScopeResponse, Destination, DestinationRequest, Navigation, NavigationRequest,
    NewComplaint, ResolveRoleRequest, ResolveRoleResponse, SessionPlan, SignInPlanRequest,
    SignInPlanResponse, SubmitComplaintRequest, SubmitComplaintResponse, UserRecord, View,
};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

use crate::health;
use crate::rest;
use crate::state::AppState;

#[derive(OpenApi)]
#[openapi(
    paths(
        rest::access::resolve,
        rest::access::destination,
        rest::access::navigation,
        rest::admin::sign_in_plan,
        rest::admin::sign_in_admit,
        rest::admin::dashboard_scope,
        rest::complaints::view,
        rest::complaints::submit,
        health::health_check,
    ),
    components(schemas(
        AdminRole,
        Destination,
        UserRecord,
        View,
        Navigation,
        SessionPlan,
        AdminSignInForm,
        ResolveRoleRequest,
        ResolveRoleResponse,
        DestinationRequest,
        NavigationRequest,
        SignInPlanRequest,
        SignInPlanResponse,
        AdmitRequest,
        AdmitResponse,
        DashboardScopeRequest,
        DashboardScopeResponse,
        Complaint,
        ComplaintAuthor,
        ComplaintFilter,
        ComplaintRow,
        ComplaintStats,
        CountEntry,
        ComplaintViewRequest,
        ComplaintViewResponse,
        ComplaintSubmission,
        NewComplaint,
        SubmitComplaintRequest,
        SubmitComplaintResponse,
        AppError,
        AppErrorKind,
        health::HealthResponse,
    )),
    tags(
        (name = "access", description = "Role resolution and admin access decisions"),
        (name = "admin", description = "Admin sign-in and dashboard scoping"),
        (name = "complaints", description = "Dashboard complaint views and student submissions"),
        (name = "health", description = "Health check endpoint")
    ),
    info(
        title = "Complaint Desk API",
        description = "Role resolution and admin routing for the complaint tracker",
        version = "1.0.0"
    )
)]
pub struct ApiDoc;

/// Build an Axum router that serves the API docs at `/docs`
/// and the decision API at `/api/*`.
pub fn api_router(state: AppState) -> Router {
    Router::new()
        .merge(rest::api_router())
        .route("/health", axum::routing::get(health::health_check))
        .with_state(state)
        .merge(Scalar::with_url("/docs", ApiDoc::openapi()))
}
