use serde::{Deserialize, Serialize};

use crate::AdminRole;

/// Screens the front end can render.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum View {
    Home,
    Login,
    /// Complaint form and submission history.
    ComplaintRegister { signed_in: bool, super_admin: bool },
    AdminLogin,
    AdminDashboard { role: AdminRole },
}

/// Result of routing a navigation request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Navigation {
    Render { view: View },
    Redirect { to: String },
}

impl Navigation {
    pub fn render(view: View) -> Self {
        Navigation::Render { view }
    }

    pub fn redirect(to: impl Into<String>) -> Self {
        Navigation::Redirect { to: to.into() }
    }
}

/// What to do with an already-active session before an admin signs in.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "snake_case")]
pub enum SessionPlan {
    /// No session; create one with the submitted credentials.
    CreateNew,
    /// The active session already belongs to the requested email.
    ReuseActive,
    /// A different account is signed in; delete its session first.
    ReplaceActive,
}
