use serde::{Deserialize, Serialize};

#[cfg(feature = "validation")]
use validator::Validate;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

pub const STATUS_OPEN: &str = "Open";
pub const STATUS_PENDING: &str = "Pending";
pub const STATUS_IN_PROGRESS: &str = "In Progress";
pub const STATUS_RESOLVED: &str = "Resolved";

/// Status filter value that matches every complaint.
pub const STATUS_ALL: &str = "All";

/// Categories a student can file under.
pub const COMPLAINT_CATEGORIES: &[&str] = &["College", "Hostel", "Food", "Other"];

/// Chart label for complaints filed without a category.
pub const UNCATEGORIZED: &str = "Other";

pub fn is_valid_category(s: &str) -> bool {
    COMPLAINT_CATEGORIES.contains(&s)
}

// ---------------------------------------------------------------------------
// Stored document
// ---------------------------------------------------------------------------

/// Account that filed a complaint, as embedded by the backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ComplaintAuthor {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, alias = "$email", skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// A complaint document as listed from the backend.
///
/// Older documents carry the student under `student_name`/`student_email`,
/// newer ones under `name`/`email`, and some only under `createdBy`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Complaint {
    #[serde(default, alias = "$id")]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub student_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub student_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub student_email: Option<String>,
    #[serde(default, rename = "createdBy", skip_serializing_if = "Option::is_none")]
    pub created_by: Option<ComplaintAuthor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(
        default,
        alias = "$createdAt",
        alias = "createdAt",
        skip_serializing_if = "Option::is_none"
    )]
    pub created_at: Option<String>,
}

impl Complaint {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

// ---------------------------------------------------------------------------
// Dashboard view
// ---------------------------------------------------------------------------

/// Status and free-text filter applied to a dashboard's complaint list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ComplaintFilter {
    /// Exact status to keep, or `"All"`.
    #[serde(default = "default_status_filter")]
    pub status: String,
    #[serde(default)]
    pub query: String,
}

fn default_status_filter() -> String {
    STATUS_ALL.to_string()
}

impl Default for ComplaintFilter {
    fn default() -> Self {
        Self {
            status: default_status_filter(),
            query: String::new(),
        }
    }
}

/// A complaint with the display fields a dashboard row needs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ComplaintRow {
    #[serde(flatten)]
    pub complaint: Complaint,
    pub student_name: String,
    pub contact_email: String,
}

/// Headline counters shown above a dashboard.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ComplaintStats {
    pub total: usize,
    pub open: usize,
    pub in_progress: usize,
    pub resolved: usize,
}

/// One bar or slice of a dashboard chart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct CountEntry {
    pub name: String,
    pub value: usize,
}

// ---------------------------------------------------------------------------
// Student submission
// ---------------------------------------------------------------------------

/// Complaint form as a student submits it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[cfg_attr(feature = "validation", derive(Validate))]
pub struct ComplaintSubmission {
    #[serde(default)]
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Category is required"))
    )]
    pub category: String,
    #[serde(default)]
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Description is required"))
    )]
    pub description: String,
    #[serde(default)]
    pub message: String,
}

/// Document to create for an accepted submission.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct NewComplaint {
    pub student_id: String,
    pub name: String,
    pub email: String,
    pub category: String,
    pub description: String,
    pub message: String,
    pub status: String,
}
