use axum::extract::FromRef;
use shared_types::RoleAssignmentConfig;
use std::sync::Arc;

/// Shared application state passed to Axum handlers via `State`.
#[derive(Clone)]
pub struct AppState {
    pub roles: Arc<RoleAssignmentConfig>,
}

impl AppState {
    pub fn new(roles: RoleAssignmentConfig) -> Self {
        Self {
            roles: Arc::new(roles),
        }
    }
}

/// Lets handlers extract `State<Arc<RoleAssignmentConfig>>` directly.
impl FromRef<AppState> for Arc<RoleAssignmentConfig> {
    fn from_ref(state: &AppState) -> Self {
        state.roles.clone()
    }
}
