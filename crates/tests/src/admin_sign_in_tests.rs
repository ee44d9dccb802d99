use pretty_assertions::assert_eq;
use serde_json::json;
use server::auth::{admit, dashboard_category, plan_session, DEFAULT_ADMIN_REDIRECT, FOOD_CATEGORY};
use server::navigation::navigate;
use shared_types::{AdminRole, AppErrorKind, Navigation, SessionPlan, UserRecord, View};

use crate::common::test_config;

#[test]
fn admitted_admin_lands_on_their_dashboard() {
    let config = test_config();
    let warden = UserRecord::new("u1").with_email("warden@college.edu");

    let redirect = admit(&warden, &config, DEFAULT_ADMIN_REDIRECT).unwrap();
    assert_eq!(redirect, "/admin?role=college-admin");
    assert_eq!(
        navigate(&redirect, Some(&warden), &config),
        Navigation::render(View::AdminDashboard {
            role: AdminRole::CollegeAdmin
        })
    );
}

#[test]
fn student_is_denied() {
    let config = test_config();
    let student = UserRecord::new("u2").with_email("student@college.edu");
    let err = admit(&student, &config, DEFAULT_ADMIN_REDIRECT).unwrap_err();
    assert_eq!(err.kind, AppErrorKind::Forbidden);
    assert_eq!(err.message, "Access denied: not an admin.");
}

#[test]
fn session_plan_follows_active_account() {
    let active = UserRecord::new("u3").with_email("Cook@College.edu");
    assert_eq!(plan_session(Some(&active), "cook@college.edu"), SessionPlan::ReuseActive);
    assert_eq!(plan_session(Some(&active), "dean@college.edu"), SessionPlan::ReplaceActive);
    assert_eq!(plan_session(None, "dean@college.edu"), SessionPlan::CreateNew);
}

#[test]
fn dashboard_scope_reads_college_preferences() {
    let admin = UserRecord::new("u4").with_preferences(json!({"college_id": "Hostel"}));
    assert_eq!(dashboard_category(&admin, FOOD_CATEGORY), "Hostel");

    let plain = UserRecord::new("u5");
    assert_eq!(dashboard_category(&plain, FOOD_CATEGORY), "Food");
}
