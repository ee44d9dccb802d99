//! Complaint list logic behind the admin dashboards and the student form.
//!
//! Everything here works on complaint documents the caller already listed
//! from the backend. Nothing is fetched or stored.

use shared_types::{
    is_valid_category, AdminRole, AppError, Complaint, ComplaintFilter, ComplaintRow,
    ComplaintStats, ComplaintSubmission, ComplaintViewResponse, CountEntry, NewComplaint,
    RoleAssignmentConfig, UserRecord, STATUS_ALL, STATUS_IN_PROGRESS, STATUS_OPEN,
    STATUS_PENDING, STATUS_RESOLVED, UNCATEGORIZED,
};

use crate::auth::{category_matches, role_category, select_destination};
use crate::error_convert::ValidateRequest;

/// Name shown for a complaint whose author cannot be identified.
pub const UNKNOWN_STUDENT: &str = "Unknown";

/// Name recorded for a submitting student with neither name nor email.
pub const ANONYMOUS_STUDENT: &str = "Anonymous";

/// First value that is present and non-empty.
fn first_present<'a>(candidates: &[Option<&'a str>]) -> Option<&'a str> {
    candidates.iter().flatten().copied().find(|s| !s.is_empty())
}

// ---------------------------------------------------------------------------
// Display fields
// ---------------------------------------------------------------------------

pub fn student_name(complaint: &Complaint) -> String {
    let author = complaint.created_by.as_ref();
    first_present(&[
        author.and_then(|a| a.name.as_deref()),
        complaint.student_name.as_deref(),
        complaint.name.as_deref(),
        author.and_then(|a| a.email.as_deref()),
    ])
    .unwrap_or(UNKNOWN_STUDENT)
    .to_string()
}

pub fn contact_email(complaint: &Complaint) -> String {
    first_present(&[
        complaint.email.as_deref(),
        complaint.student_email.as_deref(),
        complaint.created_by.as_ref().and_then(|a| a.email.as_deref()),
    ])
    .unwrap_or_default()
    .to_string()
}

pub fn to_row(complaint: Complaint) -> ComplaintRow {
    ComplaintRow {
        student_name: student_name(&complaint),
        contact_email: contact_email(&complaint),
        complaint,
    }
}

// ---------------------------------------------------------------------------
// Scoping and filtering
// ---------------------------------------------------------------------------

/// Keep complaints filed under `category`, ignoring case. A complaint
/// without a category never matches.
pub fn scope_to_category(complaints: Vec<Complaint>, category: &str) -> Vec<Complaint> {
    complaints
        .into_iter()
        .filter(|c| category_matches(c.category.as_deref().unwrap_or_default(), category))
        .collect()
}

/// Does `row` pass the dashboard's status and search filters?
///
/// The status must equal the filter exactly unless the filter is `"All"`.
/// The trimmed query is matched case-insensitively against the headline,
/// category, student name, contact email, student id and document id.
pub fn is_visible(row: &ComplaintRow, filter: &ComplaintFilter) -> bool {
    let complaint = &row.complaint;
    if filter.status != STATUS_ALL && complaint.status.as_deref() != Some(filter.status.as_str()) {
        return false;
    }
    let query = filter.query.trim().to_lowercase();
    if query.is_empty() {
        return true;
    }
    let headline = first_present(&[
        complaint.title.as_deref(),
        complaint.description.as_deref(),
        complaint.message.as_deref(),
    ]);
    [
        headline,
        complaint.category.as_deref(),
        Some(row.student_name.as_str()),
        Some(row.contact_email.as_str()),
        complaint.student_id.as_deref(),
        Some(complaint.id.as_str()),
    ]
    .into_iter()
    .flatten()
    .any(|field| field.to_lowercase().contains(&query))
}

pub fn filter_visible(rows: Vec<ComplaintRow>, filter: &ComplaintFilter) -> Vec<ComplaintRow> {
    rows.into_iter().filter(|row| is_visible(row, filter)).collect()
}

// ---------------------------------------------------------------------------
// Counters and chart series
// ---------------------------------------------------------------------------

/// Statuses counted as open on `role`'s dashboard. Area dashboards treat a
/// freshly filed `Pending` complaint as open; the super dashboard does not.
pub fn open_statuses(role: AdminRole) -> &'static [&'static str] {
    match role {
        AdminRole::SuperAdmin => &[STATUS_OPEN],
        _ => &[STATUS_OPEN, STATUS_PENDING],
    }
}

fn count_with_status(complaints: &[Complaint], wanted: &[&str]) -> usize {
    complaints
        .iter()
        .filter(|c| c.status.as_deref().is_some_and(|s| wanted.contains(&s)))
        .count()
}

pub fn stats(complaints: &[Complaint], open_statuses: &[&str]) -> ComplaintStats {
    ComplaintStats {
        total: complaints.len(),
        open: count_with_status(complaints, open_statuses),
        in_progress: count_with_status(complaints, &[STATUS_IN_PROGRESS]),
        resolved: count_with_status(complaints, &[STATUS_RESOLVED]),
    }
}

/// Count occurrences in first-seen order.
fn tally<'a>(labels: impl Iterator<Item = &'a str>) -> Vec<CountEntry> {
    let mut entries: Vec<CountEntry> = Vec::new();
    for label in labels {
        match entries.iter_mut().find(|e| e.name == label) {
            Some(entry) => entry.value += 1,
            None => entries.push(CountEntry {
                name: label.to_string(),
                value: 1,
            }),
        }
    }
    entries
}

/// Complaints per status. A missing or empty status counts as `Open`.
pub fn status_counts(complaints: &[Complaint]) -> Vec<CountEntry> {
    tally(complaints.iter().map(|c| {
        first_present(&[c.status.as_deref()]).unwrap_or(STATUS_OPEN)
    }))
}

/// Complaints per category. A missing or empty category counts as `Other`.
pub fn category_counts(complaints: &[Complaint]) -> Vec<CountEntry> {
    tally(complaints.iter().map(|c| {
        first_present(&[c.category.as_deref()]).unwrap_or(UNCATEGORIZED)
    }))
}

// ---------------------------------------------------------------------------
// Dashboard view
// ---------------------------------------------------------------------------

/// Build what `dashboard` shows to `user`.
///
/// The user's own resolved role must be `dashboard`, as for the direct
/// `/admin/<area>` routes. Counters and charts cover the whole scoped list;
/// only `visible` is narrowed by `filter`.
pub fn complaint_view(
    user: &UserRecord,
    dashboard: AdminRole,
    complaints: Vec<Complaint>,
    filter: &ComplaintFilter,
    config: &RoleAssignmentConfig,
) -> Result<ComplaintViewResponse, AppError> {
    if select_destination(Some(user), None, config).role() != Some(dashboard) {
        tracing::info!(user_id = %user.id, %dashboard, "Complaint view denied");
        return Err(AppError::forbidden("Access denied: not an admin."));
    }

    let category = role_category(user, dashboard);
    let scoped = match &category {
        Some(category) => scope_to_category(complaints, category),
        None => complaints,
    };

    let stats = stats(&scoped, open_statuses(dashboard));
    let status_counts = status_counts(&scoped);
    let category_counts = category_counts(&scoped);
    let rows = scoped.into_iter().map(to_row).collect();

    Ok(ComplaintViewResponse {
        category,
        visible: filter_visible(rows, filter),
        stats,
        status_counts,
        category_counts,
    })
}

// ---------------------------------------------------------------------------
// Student submission
// ---------------------------------------------------------------------------

/// Check a student's complaint form and build the document to create.
///
/// New complaints start as `Pending`. The author's display name falls back
/// to the local part of their email, then to `Anonymous`.
pub fn prepare_submission(
    user: Option<&UserRecord>,
    submission: &ComplaintSubmission,
) -> Result<NewComplaint, AppError> {
    let Some(user) = user else {
        return Err(AppError::forbidden("Please sign in."));
    };
    submission.validate_request().map_err(|err| AppError {
        message: "Please fill all required fields.".to_string(),
        ..err
    })?;
    if !is_valid_category(&submission.category) {
        let field_errors = [("category".to_string(), "Unknown category".to_string())].into();
        return Err(AppError::validation("Please fill all required fields.", field_errors));
    }

    let email = user.email().unwrap_or_default();
    let name = first_present(&[
        user.name.as_deref(),
        email.split('@').next(),
    ])
    .unwrap_or(ANONYMOUS_STUDENT);

    Ok(NewComplaint {
        student_id: user.id.clone(),
        name: name.to_string(),
        email: email.to_string(),
        category: submission.category.clone(),
        description: submission.description.clone(),
        message: submission.message.clone(),
        status: STATUS_PENDING.to_string(),
    })
}
