//! Front-end route table.
//!
//! Maps a requested `path?query` plus the session user to a screen or a
//! redirect. Admin screens are only rendered after the access gate agrees.

use shared_types::{AdminRole, Destination, Navigation, RoleAssignmentConfig, UserRecord, View};

use crate::auth::{resolve_admin_role, select_destination};

pub const HOME_PATH: &str = "/";
pub const ADMIN_LOGIN_PATH: &str = "/admin/login";

/// Known front-end routes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppRoute {
    Home,
    Login,
    Complaints,
    AdminLogin,
    /// `/admin`: picks the dashboard from the resolved (or `?role=`) role.
    Admin,
    /// `/admin/<area>`: one specific dashboard.
    AdminArea(AdminRole),
    NotFound,
}

impl AppRoute {
    pub fn parse(path: &str) -> Self {
        let trimmed = path.trim_end_matches('/');
        match trimmed {
            "" => AppRoute::Home,
            "/login" => AppRoute::Login,
            "/complaints" => AppRoute::Complaints,
            "/admin/login" => AppRoute::AdminLogin,
            "/admin" => AppRoute::Admin,
            other => other
                .strip_prefix("/admin/")
                .and_then(AdminRole::from_area)
                .map(AppRoute::AdminArea)
                .unwrap_or(AppRoute::NotFound),
        }
    }
}

/// Split `path?query` into its parts.
fn split_target(target: &str) -> (&str, Option<&str>) {
    match target.split_once('?') {
        Some((path, query)) => (path, Some(query)),
        None => (target, None),
    }
}

/// Value of the first `role=` parameter, percent-decoded.
///
/// Invalid UTF-8 decodes lossily to U+FFFD rather than being dropped, so a
/// mangled override still reaches the access gate and is refused there
/// instead of silently falling back to the resolved role.
pub fn role_param(query: &str) -> Option<String> {
    let raw = query
        .split('&')
        .filter_map(|pair| pair.split_once('=').or(Some((pair, ""))))
        .find(|(key, _)| *key == "role")
        .map(|(_, value)| value)?;
    let spaced = raw.replace('+', " ");
    let bytes = urlencoding::decode_binary(spaced.as_bytes());
    Some(String::from_utf8_lossy(&bytes).into_owned())
}

/// Route a navigation request.
///
/// `/admin/<area>` renders only when the session's own resolved role is
/// that area; any other signed-in user is sent to the admin login. These
/// direct routes ignore `?role=`, so the override only applies to `/admin`.
pub fn navigate(
    target: &str,
    session: Option<&UserRecord>,
    config: &RoleAssignmentConfig,
) -> Navigation {
    let (path, query) = split_target(target);
    match AppRoute::parse(path) {
        AppRoute::Home => Navigation::render(View::Home),
        AppRoute::Login => Navigation::render(View::Login),
        AppRoute::AdminLogin => Navigation::render(View::AdminLogin),
        AppRoute::Complaints => Navigation::render(View::ComplaintRegister {
            signed_in: session.is_some(),
            super_admin: session
                .and_then(|u| resolve_admin_role(u, config))
                .map(|r| r == AdminRole::SuperAdmin)
                .unwrap_or(false),
        }),
        AppRoute::Admin => {
            let override_role = query.and_then(role_param);
            match select_destination(session, override_role.as_deref(), config) {
                Destination::AdminView(role) => Navigation::render(View::AdminDashboard { role }),
                Destination::LoginRedirect => Navigation::redirect(ADMIN_LOGIN_PATH),
            }
        }
        AppRoute::AdminArea(area) => {
            if select_destination(session, None, config).role() == Some(area) {
                Navigation::render(View::AdminDashboard { role: area })
            } else {
                Navigation::redirect(ADMIN_LOGIN_PATH)
            }
        }
        AppRoute::NotFound => Navigation::redirect(HOME_PATH),
    }
}
