use axum::{extract::State, Json};
use shared_types::{
    AppError, ComplaintViewRequest, ComplaintViewResponse, RoleAssignmentConfig,
    SubmitComplaintRequest, SubmitComplaintResponse,
};
use std::sync::Arc;

use crate::complaints::{complaint_view, prepare_submission};

// ---------------------------------------------------------------------------
// POST /api/v1/admin/complaints/view
// ---------------------------------------------------------------------------

/// Scope, filter and count complaints for an admin dashboard.
#[utoipa::path(
    post,
    path = "/api/v1/admin/complaints/view",
    request_body = ComplaintViewRequest,
    responses(
        (status = 200, description = "Dashboard view", body = ComplaintViewResponse),
        (status = 403, description = "User's role does not own this dashboard", body = AppError)
    ),
    tag = "complaints"
)]
pub async fn view(
    State(roles): State<Arc<RoleAssignmentConfig>>,
    Json(body): Json<ComplaintViewRequest>,
) -> Result<Json<ComplaintViewResponse>, AppError> {
    let view = complaint_view(&body.user, body.dashboard, body.complaints, &body.filter, &roles)?;
    Ok(Json(view))
}

// ---------------------------------------------------------------------------
// POST /api/v1/complaints/submit
// ---------------------------------------------------------------------------

/// Check a student's complaint and return the document to create.
#[utoipa::path(
    post,
    path = "/api/v1/complaints/submit",
    request_body = SubmitComplaintRequest,
    responses(
        (status = 200, description = "Document to create", body = SubmitComplaintResponse),
        (status = 403, description = "No signed-in user", body = AppError),
        (status = 422, description = "Category or description missing", body = AppError)
    ),
    tag = "complaints"
)]
pub async fn submit(
    Json(body): Json<SubmitComplaintRequest>,
) -> Result<Json<SubmitComplaintResponse>, AppError> {
    let complaint = prepare_submission(body.user.as_ref(), &body.submission)?;
    Ok(Json(SubmitComplaintResponse { complaint }))
}
