use shared_types::{AdminSignInForm, AppError, RoleAssignmentConfig, SessionPlan, UserRecord};

use super::role_resolver::resolve_role;
use crate::error_convert::ValidateRequest;

/// Where admins land after signing in unless the caller says otherwise.
pub const DEFAULT_ADMIN_REDIRECT: &str = "/admin";

/// Both fields must be non-empty before any session call is made.
/// Whitespace counts as content; the identity provider rejects it later.
pub fn validate_form(form: &AdminSignInForm) -> Result<(), AppError> {
    form.validate_request().map_err(|err| AppError {
        message: "Please enter email & password.".to_string(),
        ..err
    })
}

/// Decide what to do with an existing session before signing in `requested_email`.
pub fn plan_session(active: Option<&UserRecord>, requested_email: &str) -> SessionPlan {
    let Some(active) = active else {
        return SessionPlan::CreateNew;
    };
    let same_account = active
        .email
        .as_deref()
        .map(|e| e.to_lowercase() == requested_email.to_lowercase())
        .unwrap_or(false);
    if same_account {
        SessionPlan::ReuseActive
    } else {
        SessionPlan::ReplaceActive
    }
}

/// Admit a signed-in user to the admin area.
///
/// Returns the redirect target carrying the resolved role as `?role=`. On
/// `Err` the caller must delete the session it just created. `redirect` must
/// be a local path.
pub fn admit(
    user: &UserRecord,
    config: &RoleAssignmentConfig,
    redirect: &str,
) -> Result<String, AppError> {
    if !is_local_path(redirect) {
        return Err(AppError::bad_request("Redirect must be a local path"));
    }
    match resolve_role(user, config).filter(|r| !r.is_empty()) {
        Some(role) => {
            tracing::info!(user_id = %user.id, %role, "Admin sign-in admitted");
            Ok(format!("{redirect}?role={}", urlencoding::encode(&role)))
        }
        None => {
            tracing::info!(user_id = %user.id, "Admin sign-in denied, no role");
            Err(AppError::forbidden("Access denied: not an admin."))
        }
    }
}

fn is_local_path(target: &str) -> bool {
    target.starts_with('/') && !target.starts_with("//") && !target.contains('?')
}
