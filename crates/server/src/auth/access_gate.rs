use shared_types::{AdminRole, Destination, RoleAssignmentConfig, UserRecord};

use super::role_resolver::resolve_role;

/// Decide which admin view a request should land on.
///
/// - No session user: login.
/// - `override_role` (e.g. from `?role=`), when non-empty, replaces the
///   resolved role but must still name a recognized admin role.
/// - Unknown or missing roles: login.
///
/// Recomputed on every call; nothing is cached between requests.
pub fn select_destination(
    user: Option<&UserRecord>,
    override_role: Option<&str>,
    config: &RoleAssignmentConfig,
) -> Destination {
    let Some(user) = user else {
        return Destination::LoginRedirect;
    };

    let final_role = match override_role.filter(|r| !r.is_empty()) {
        Some(role) => Some(role.to_string()),
        None => resolve_role(user, config),
    };

    match final_role.as_deref() {
        None | Some("") => Destination::LoginRedirect,
        Some(role) => match AdminRole::parse(role) {
            Some(admin) => Destination::AdminView(admin),
            None => {
                tracing::warn!(user_id = %user.id, role, "Unrecognized admin role, sending to login");
                Destination::LoginRedirect
            }
        },
    }
}
