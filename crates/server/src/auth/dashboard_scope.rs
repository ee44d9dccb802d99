use shared_types::{AdminRole, Preferences, UserRecord};

/// Category the food dashboard manages when the admin's preferences name none.
pub const FOOD_CATEGORY: &str = "Food";

/// Category an area dashboard falls back to. The super dashboard is unscoped.
pub fn default_category(role: AdminRole) -> Option<&'static str> {
    match role {
        AdminRole::SuperAdmin => None,
        AdminRole::CollegeAdmin => Some("College"),
        AdminRole::HostelAdmin => Some("Hostel"),
        AdminRole::FoodAdmin => Some(FOOD_CATEGORY),
        AdminRole::OtherAdmin => Some("Other"),
    }
}

/// Category `role`'s dashboard shows to `user`, or `None` when it shows
/// every complaint.
pub fn role_category(user: &UserRecord, role: AdminRole) -> Option<String> {
    default_category(role).map(|default| dashboard_category(user, default))
}

/// Complaint category an area dashboard is scoped to: `preferences.college`,
/// then `preferences.college_id`, then `default`. Trimmed.
pub fn dashboard_category(user: &UserRecord, default: &str) -> String {
    let preferences = Preferences::normalize(user.preferences.as_ref());
    preferences
        .scalar("college")
        .or_else(|| preferences.scalar("college_id"))
        .unwrap_or_else(|| default.to_string())
        .trim()
        .to_string()
}

/// Case-insensitive category comparison used when filtering complaints.
pub fn category_matches(category: &str, scope: &str) -> bool {
    category.to_lowercase() == scope.to_lowercase()
}
