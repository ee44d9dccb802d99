use serde::{Deserialize, Serialize};

use crate::{
    AdminRole, Complaint, ComplaintFilter, ComplaintRow, ComplaintStats, ComplaintSubmission,
    CountEntry, NewComplaint, SessionPlan, UserRecord,
};

#[cfg(feature = "validation")]
use validator::Validate;

/// Request DTO for resolving a user's role.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ResolveRoleRequest {
    pub user: UserRecord,
}

/// Resolved role. `None` when the user has no role signal at all.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ResolveRoleResponse {
    pub role: Option<String>,
}

/// Request DTO for an admin-area authorization check.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct DestinationRequest {
    /// Session user, or `null` when nobody is signed in.
    #[serde(default)]
    pub user: Option<UserRecord>,
}

/// Request DTO for routing a front-end navigation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct NavigationRequest {
    /// Path with optional query string, e.g. `/admin?role=food-admin`.
    pub target: String,
    #[serde(default)]
    pub user: Option<UserRecord>,
}

/// Admin sign-in form as submitted.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[cfg_attr(feature = "validation", derive(Validate))]
pub struct AdminSignInForm {
    #[serde(default)]
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Email is required"))
    )]
    pub email: String,
    #[serde(default)]
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Password is required"))
    )]
    pub password: String,
}

/// Request DTO for planning an admin sign-in.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct SignInPlanRequest {
    pub form: AdminSignInForm,
    /// User of the currently active session, if any.
    #[serde(default)]
    pub active: Option<UserRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct SignInPlanResponse {
    pub plan: SessionPlan,
}

/// Request DTO for admitting a freshly signed-in user to the admin area.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct AdmitRequest {
    pub user: UserRecord,
    /// Where to send the admin. Defaults to `/admin`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub redirect: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct AdmitResponse {
    pub redirect: String,
}

/// Request DTO for the category a dashboard manages.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct DashboardScopeRequest {
    pub user: UserRecord,
    /// Category used when the user's preferences name none.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_category: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct DashboardScopeResponse {
    pub category: String,
}

/// Request DTO for building an admin dashboard's complaint view.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ComplaintViewRequest {
    pub user: UserRecord,
    /// Dashboard being opened. Must match the user's own role.
    pub dashboard: AdminRole,
    /// Complaints as listed from the backend, newest first.
    #[serde(default)]
    pub complaints: Vec<Complaint>,
    #[serde(default)]
    pub filter: ComplaintFilter,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ComplaintViewResponse {
    /// Category the dashboard is scoped to; `None` for the super dashboard.
    pub category: Option<String>,
    pub visible: Vec<ComplaintRow>,
    pub stats: ComplaintStats,
    pub status_counts: Vec<CountEntry>,
    pub category_counts: Vec<CountEntry>,
}

/// Request DTO for a student complaint submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct SubmitComplaintRequest {
    #[serde(default)]
    pub user: Option<UserRecord>,
    pub submission: ComplaintSubmission,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct SubmitComplaintResponse {
    pub complaint: NewComplaint,
}
