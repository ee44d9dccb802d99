use shared_types::{AppConfig, RoleAssignmentConfig};
use std::path::Path;

/// Path to the config file, relative to the working directory.
pub const CONFIG_PATH: &str = "config.toml";

/// Comma-separated admin allow-list.
pub const ADMIN_EMAILS_VAR: &str = "ADMIN_EMAILS";
/// Comma-separated `email:role` pairs.
pub const ADMIN_EMAIL_ROLES_VAR: &str = "ADMIN_EMAIL_ROLES";

/// Read `config.toml` if present. A missing or unparseable file yields the
/// default (empty) config.
pub fn read_config_file(path: &Path) -> AppConfig {
    match std::fs::read_to_string(path) {
        Ok(contents) => toml::from_str(&contents).unwrap_or_else(|e| {
            tracing::warn!(path = %path.display(), %e, "Failed to parse config file, using defaults");
            AppConfig::default()
        }),
        Err(e) => {
            tracing::info!(path = %path.display(), %e, "No config file, using defaults");
            AppConfig::default()
        }
    }
}

/// Overlay environment values onto the file config. A set variable wins,
/// even when empty.
pub fn apply_env_overrides(
    mut config: AppConfig,
    lookup: impl Fn(&str) -> Option<String>,
) -> AppConfig {
    if let Some(emails) = lookup(ADMIN_EMAILS_VAR) {
        config.admin.emails = emails;
    }
    if let Some(pairs) = lookup(ADMIN_EMAIL_ROLES_VAR) {
        config.admin.email_roles = pairs;
    }
    config
}

/// Build the process-wide role assignments from `.env`, `config.toml` and
/// the environment. Call once at startup and pass the result around.
pub fn load_role_config() -> RoleAssignmentConfig {
    let _ = dotenvy::dotenv();
    load_role_config_from(Path::new(CONFIG_PATH), |key| std::env::var(key).ok())
}

pub fn load_role_config_from(
    path: &Path,
    lookup: impl Fn(&str) -> Option<String>,
) -> RoleAssignmentConfig {
    let config = apply_env_overrides(read_config_file(path), lookup);
    let roles = config.role_assignments();
    tracing::info!(
        allowlisted = roles.admin_emails.len(),
        mapped = roles.admin_email_roles.len(),
        "Loaded admin role assignments"
    );
    roles
}
