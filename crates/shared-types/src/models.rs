use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Admin capability tier.
///
/// - `SuperAdmin`: sees and manages every complaint.
/// - `CollegeAdmin`: college-wide complaints. Default role for allow-listed emails.
/// - `HostelAdmin`: hostel complaints.
/// - `FoodAdmin`: mess and canteen complaints.
/// - `OtherAdmin`: everything filed under "Other".
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "kebab-case")]
pub enum AdminRole {
    SuperAdmin,
    CollegeAdmin,
    HostelAdmin,
    FoodAdmin,
    OtherAdmin,
}

impl AdminRole {
    /// Every recognized role, in the order role lists are matched against.
    pub const ALL: [AdminRole; 5] = [
        AdminRole::SuperAdmin,
        AdminRole::CollegeAdmin,
        AdminRole::HostelAdmin,
        AdminRole::FoodAdmin,
        AdminRole::OtherAdmin,
    ];

    /// Exact, case-sensitive parse. Unknown strings are not admin roles.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "super-admin" => Some(AdminRole::SuperAdmin),
            "college-admin" => Some(AdminRole::CollegeAdmin),
            "hostel-admin" => Some(AdminRole::HostelAdmin),
            "food-admin" => Some(AdminRole::FoodAdmin),
            "other-admin" => Some(AdminRole::OtherAdmin),
            _ => None,
        }
    }

    /// Identifier as stored in user preferences and passed in `?role=`.
    pub fn as_str(&self) -> &'static str {
        match self {
            AdminRole::SuperAdmin => "super-admin",
            AdminRole::CollegeAdmin => "college-admin",
            AdminRole::HostelAdmin => "hostel-admin",
            AdminRole::FoodAdmin => "food-admin",
            AdminRole::OtherAdmin => "other-admin",
        }
    }

    /// Path segment of the role's dashboard under `/admin/`.
    pub fn area(&self) -> &'static str {
        match self {
            AdminRole::SuperAdmin => "super",
            AdminRole::CollegeAdmin => "college",
            AdminRole::HostelAdmin => "hostel",
            AdminRole::FoodAdmin => "food",
            AdminRole::OtherAdmin => "other",
        }
    }

    pub fn from_area(segment: &str) -> Option<Self> {
        AdminRole::ALL.into_iter().find(|r| r.area() == segment)
    }

    pub fn is_known(s: &str) -> bool {
        Self::parse(s).is_some()
    }
}

impl fmt::Display for AdminRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of an admin-area authorization check.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(tag = "kind", content = "role")]
pub enum Destination {
    LoginRedirect,
    AdminView(AdminRole),
}

impl Destination {
    pub fn role(&self) -> Option<AdminRole> {
        match self {
            Destination::AdminView(role) => Some(*role),
            Destination::LoginRedirect => None,
        }
    }
}

/// A user as returned by the identity provider's session lookup.
///
/// Field names follow the provider's account payload: `$id` and `prefs` are
/// accepted as aliases. The record is read-only to this workspace.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct UserRecord {
    #[serde(default, alias = "$id")]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Free-form preferences bag. May arrive as a JSON-encoded string.
    #[serde(default, alias = "prefs", skip_serializing_if = "Option::is_none")]
    #[cfg_attr(feature = "openapi", schema(value_type = Option<Object>))]
    pub preferences: Option<serde_json::Value>,
    /// Legacy direct role. Non-string values are dropped on deserialize.
    #[serde(
        default,
        deserialize_with = "string_or_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub role: Option<String>,
}

impl UserRecord {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_preferences(mut self, preferences: serde_json::Value) -> Self {
        self.preferences = Some(preferences);
        self
    }

    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self
    }

    /// Email if present and non-empty.
    pub fn email(&self) -> Option<&str> {
        self.email.as_deref().filter(|e| !e.is_empty())
    }
}

fn string_or_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::String(s)) => Some(s),
        _ => None,
    })
}
