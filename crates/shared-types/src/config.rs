use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Role used for allow-listed admin emails that have no explicit mapping.
pub const DEFAULT_ALLOWLIST_ROLE: &str = "college-admin";

/// Static email-based role assignments.
///
/// Built once at startup and never mutated; pass it by reference (or inside
/// an `Arc`) to whatever needs to resolve roles.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RoleAssignmentConfig {
    /// Raw emails granted `college-admin` when nothing else matches.
    /// Compared case-sensitively.
    pub admin_emails: Vec<String>,
    /// Lowercased email -> role identifier.
    pub admin_email_roles: HashMap<String, String>,
}

impl RoleAssignmentConfig {
    /// Build from the two comma-separated configuration values.
    pub fn from_lists(admin_emails: &str, admin_email_roles: &str) -> Self {
        Self {
            admin_emails: parse_admin_emails(admin_emails),
            admin_email_roles: parse_admin_email_roles(admin_email_roles),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.admin_emails.is_empty() && self.admin_email_roles.is_empty()
    }

    /// Mapped role for an email, matched case-insensitively.
    pub fn mapped_role(&self, email: &str) -> Option<&str> {
        self.admin_email_roles
            .get(&email.to_lowercase())
            .map(String::as_str)
            .filter(|r| !r.is_empty())
    }

    /// Whether the email is on the allow-list, matched exactly.
    pub fn is_allowlisted(&self, email: &str) -> bool {
        self.admin_emails.iter().any(|e| e == email)
    }
}

/// Split `a@x.com, b@y.com` into trimmed, non-empty entries.
pub fn parse_admin_emails(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Parse `email:role` pairs. Pairs missing either side are dropped; anything
/// after a second `:` is ignored.
pub fn parse_admin_email_roles(raw: &str) -> HashMap<String, String> {
    raw.split(',')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .filter_map(|pair| {
            let mut parts = pair.split(':').map(str::trim);
            let email = parts.next().filter(|e| !e.is_empty())?;
            let role = parts.next().filter(|r| !r.is_empty())?;
            Some((email.to_lowercase(), role.to_string()))
        })
        .collect()
}

/// `[admin]` table of `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AdminSection {
    /// Comma-separated allow-list.
    #[serde(default)]
    pub emails: String,
    /// Comma-separated `email:role` pairs.
    #[serde(default)]
    pub email_roles: String,
}

/// Top-level config file structure matching `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub admin: AdminSection,
}

impl AppConfig {
    pub fn role_assignments(&self) -> RoleAssignmentConfig {
        RoleAssignmentConfig::from_lists(&self.admin.emails, &self.admin.email_roles)
    }
}
