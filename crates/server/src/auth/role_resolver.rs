use serde_json::Value;
use shared_types::{
    is_truthy, scalar_string, AdminRole, Preferences, RoleAssignmentConfig, UserRecord,
    DEFAULT_ALLOWLIST_ROLE,
};

/// Role information carried in a user's preferences bag.
#[derive(Debug, Clone, PartialEq)]
pub enum RoleSignal {
    Absent,
    /// `preferences.role`, returned verbatim.
    Scalar(String),
    /// `preferences.role` is a truthy object or array. It claims the rule
    /// but names no role.
    Opaque,
    /// `preferences.roles`, non-empty and in stored order. `None` marks an
    /// entry that is null or a container.
    List(Vec<Option<String>>),
    /// Preferences were a string that is not JSON.
    Unparsed(String),
}

impl RoleSignal {
    pub fn from_preferences(preferences: &Preferences) -> Self {
        if let Preferences::Unparsed(raw) = preferences {
            return RoleSignal::Unparsed(raw.clone());
        }
        if let Some(role) = preferences.field("role").filter(|v| is_truthy(v)) {
            return match scalar_string(role) {
                Some(role) => RoleSignal::Scalar(role),
                None => RoleSignal::Opaque,
            };
        }
        match preferences.field("roles") {
            Some(Value::Array(items)) if !items.is_empty() => {
                RoleSignal::List(items.iter().map(list_entry).collect())
            }
            _ => RoleSignal::Absent,
        }
    }

    /// Whether the preferences decide the role, so later rules never run.
    pub fn is_decisive(&self) -> bool {
        matches!(
            self,
            RoleSignal::Scalar(_) | RoleSignal::Opaque | RoleSignal::List(_)
        )
    }

    /// The role this signal selects, if any.
    ///
    /// A list yields its first recognized role, else its first entry even if
    /// unrecognized. Such a role still fails the access gate. A list whose
    /// first entry is null or a container yields nothing.
    pub fn role(self) -> Option<String> {
        match self {
            RoleSignal::Scalar(role) => Some(role),
            RoleSignal::List(roles) => {
                let known = roles
                    .iter()
                    .flatten()
                    .find(|r| AdminRole::is_known(r))
                    .cloned();
                known.or_else(|| roles.into_iter().next().flatten())
            }
            RoleSignal::Absent | RoleSignal::Opaque | RoleSignal::Unparsed(_) => None,
        }
    }
}

/// `roles` entries compare as strings; containers and null carry no role.
fn list_entry(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(_) | Value::Bool(_) => Some(value.to_string()),
        _ => None,
    }
}

/// Resolve a user's role from, in order: `preferences.role`,
/// `preferences.roles`, the direct `role` field, the configured email map
/// and finally the email allow-list.
///
/// Pure and deterministic. Malformed preferences skip the preference rules
/// rather than failing. Once preferences carry a truthy `role` or a
/// non-empty `roles` list, the later rules are never consulted, even when
/// that yields no role. The returned string is not checked against
/// [`AdminRole`]; that is the access gate's job.
pub fn resolve_role(user: &UserRecord, config: &RoleAssignmentConfig) -> Option<String> {
    let preferences = Preferences::normalize(user.preferences.as_ref());
    match RoleSignal::from_preferences(&preferences) {
        RoleSignal::Unparsed(_) => {
            tracing::debug!(user_id = %user.id, "Preferences are not valid JSON, skipping");
        }
        signal if signal.is_decisive() => {
            let role = signal.role();
            tracing::debug!(user_id = %user.id, role = ?role, "Role from preferences");
            return role;
        }
        _ => {}
    }

    if let Some(role) = &user.role {
        return Some(role.clone());
    }

    let email = user.email()?;
    if let Some(role) = config.mapped_role(email) {
        tracing::debug!(user_id = %user.id, %role, "Role from admin email map");
        return Some(role.to_string());
    }
    if config.is_allowlisted(email) {
        tracing::debug!(user_id = %user.id, "Email on admin allow-list");
        return Some(DEFAULT_ALLOWLIST_ROLE.to_string());
    }

    None
}

/// Resolve and keep only recognized admin roles.
pub fn resolve_admin_role(user: &UserRecord, config: &RoleAssignmentConfig) -> Option<AdminRole> {
    resolve_role(user, config).and_then(|r| AdminRole::parse(&r))
}
