use pretty_assertions::assert_eq;
use serde_json::json;
use server::auth::{resolve_role, select_destination};
use shared_types::{AdminRole, Destination, UserRecord};

use crate::common::test_config;

#[test]
fn absent_user_always_goes_to_login() {
    let config = test_config();
    for role in AdminRole::ALL {
        assert_eq!(
            select_destination(None, Some(role.as_str()), &config),
            Destination::LoginRedirect
        );
    }
    assert_eq!(select_destination(None, None, &config), Destination::LoginRedirect);
}

#[test]
fn override_wins_over_resolved_role() {
    let config = test_config();
    let cook = UserRecord::new("u1").with_email("Cook@College.edu");
    assert_eq!(resolve_role(&cook, &config).as_deref(), Some("food-admin"));

    assert_eq!(
        select_destination(Some(&cook), Some("super-admin"), &config),
        Destination::AdminView(AdminRole::SuperAdmin)
    );
}

#[test]
fn unknown_override_is_rejected() {
    let config = test_config();
    let cook = UserRecord::new("u2").with_email("Cook@College.edu");
    assert_eq!(
        select_destination(Some(&cook), Some("not-a-real-role"), &config),
        Destination::LoginRedirect
    );
    assert_eq!(
        select_destination(Some(&cook), Some("Super-Admin"), &config),
        Destination::LoginRedirect
    );
}

#[test]
fn every_known_role_maps_to_its_view() {
    let config = test_config();
    for role in AdminRole::ALL {
        let u = UserRecord::new("u3").with_preferences(json!({"role": role.as_str()}));
        assert_eq!(select_destination(Some(&u), None, &config), Destination::AdminView(role));
    }
}

#[test]
fn legacy_unknown_list_role_resolves_but_is_not_authorized() {
    let config = test_config();
    let u = UserRecord::new("u4").with_preferences(json!({"roles": ["unknown-x"]}));
    assert_eq!(resolve_role(&u, &config).as_deref(), Some("unknown-x"));
    assert_eq!(select_destination(Some(&u), None, &config), Destination::LoginRedirect);
}

#[test]
fn user_without_role_goes_to_login() {
    let config = test_config();
    let student = UserRecord::new("u5").with_email("student@college.edu");
    assert_eq!(select_destination(Some(&student), None, &config), Destination::LoginRedirect);
}

#[test]
fn decision_is_recomputed_per_call() {
    let config = test_config();
    let warden = UserRecord::new("u6").with_email("warden@college.edu");
    let first = select_destination(Some(&warden), None, &config);
    let second = select_destination(Some(&warden), None, &config);
    assert_eq!(first, Destination::AdminView(AdminRole::CollegeAdmin));
    assert_eq!(first, second);
}

#[test]
fn null_roles_entry_blocks_email_and_direct_fallbacks() {
    let config = test_config();

    let dean = UserRecord::new("u7")
        .with_preferences(json!({"roles": [null]}))
        .with_email("Dean@College.edu");
    assert_eq!(resolve_role(&dean, &config), None);
    assert_eq!(select_destination(Some(&dean), None, &config), Destination::LoginRedirect);

    let direct = UserRecord::new("u8")
        .with_preferences(json!({"roles": [{"x": 1}]}))
        .with_role("super-admin");
    assert_eq!(resolve_role(&direct, &config), None);
    assert_eq!(select_destination(Some(&direct), None, &config), Destination::LoginRedirect);
}
