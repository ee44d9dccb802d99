use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use shared_types::{
    Destination, DestinationRequest, Navigation, NavigationRequest, RoleAssignmentConfig,
    ResolveRoleRequest, ResolveRoleResponse,
};
use std::sync::Arc;

use crate::auth::{resolve_role, select_destination};
use crate::navigation::navigate;

// ---------------------------------------------------------------------------
// Query parameters
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct RoleOverrideParams {
    /// Caller-supplied role. Bypasses resolution, not authorization.
    pub role: Option<String>,
}

// ---------------------------------------------------------------------------
// POST /api/v1/access/role
// ---------------------------------------------------------------------------

/// Resolve a user's role without authorizing it.
#[utoipa::path(
    post,
    path = "/api/v1/access/role",
    request_body = ResolveRoleRequest,
    responses(
        (status = 200, description = "Resolved role, or null", body = ResolveRoleResponse)
    ),
    tag = "access"
)]
pub async fn resolve(
    State(roles): State<Arc<RoleAssignmentConfig>>,
    Json(body): Json<ResolveRoleRequest>,
) -> Json<ResolveRoleResponse> {
    Json(ResolveRoleResponse {
        role: resolve_role(&body.user, &roles),
    })
}

// ---------------------------------------------------------------------------
// POST /api/v1/access/destination
// ---------------------------------------------------------------------------

/// Choose the admin view for a session user.
#[utoipa::path(
    post,
    path = "/api/v1/access/destination",
    params(RoleOverrideParams),
    request_body = DestinationRequest,
    responses(
        (status = 200, description = "Admin view or login redirect", body = Destination)
    ),
    tag = "access"
)]
pub async fn destination(
    State(roles): State<Arc<RoleAssignmentConfig>>,
    Query(params): Query<RoleOverrideParams>,
    Json(body): Json<DestinationRequest>,
) -> Json<Destination> {
    Json(select_destination(
        body.user.as_ref(),
        params.role.as_deref(),
        &roles,
    ))
}

// ---------------------------------------------------------------------------
// POST /api/v1/navigation
// ---------------------------------------------------------------------------

/// Route a front-end navigation to a view or a redirect.
#[utoipa::path(
    post,
    path = "/api/v1/navigation",
    request_body = NavigationRequest,
    responses(
        (status = 200, description = "View to render or path to redirect to", body = Navigation)
    ),
    tag = "access"
)]
pub async fn navigation(
    State(roles): State<Arc<RoleAssignmentConfig>>,
    Json(body): Json<NavigationRequest>,
) -> Json<Navigation> {
    Json(navigate(&body.target, body.user.as_ref(), &roles))
}
