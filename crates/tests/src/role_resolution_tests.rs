use pretty_assertions::assert_eq;
use serde_json::json;
use server::auth::resolve_role;
use shared_types::{RoleAssignmentConfig, UserRecord};

use crate::common::test_config;

fn user(json: serde_json::Value) -> UserRecord {
    serde_json::from_value(json).expect("valid user record")
}

#[test]
fn preferences_role_is_returned_verbatim_over_all_other_fields() {
    for role in ["super-admin", "X", "custom-tier"] {
        let u = user(json!({
            "$id": "u1",
            "email": "Dean@College.edu",
            "role": "food-admin",
            "prefs": {"role": role, "roles": ["hostel-admin"]}
        }));
        assert_eq!(resolve_role(&u, &test_config()).as_deref(), Some(role));
    }
}

#[test]
fn roles_list_returns_first_known_role() {
    let u = user(json!({"$id": "u2", "prefs": {"roles": ["unknown-x", "food-admin", "super-admin"]}}));
    assert_eq!(resolve_role(&u, &test_config()).as_deref(), Some("food-admin"));
}

#[test]
fn roles_list_without_known_role_returns_first_entry() {
    let u = user(json!({"$id": "u3", "prefs": {"roles": ["unknown-x", "unknown-y"]}}));
    assert_eq!(resolve_role(&u, &test_config()).as_deref(), Some("unknown-x"));
}

#[test]
fn email_map_applies_when_no_other_signal() {
    let u = user(json!({"$id": "u4", "email": "a@x.com"}));
    assert_eq!(resolve_role(&u, &test_config()).as_deref(), Some("hostel-admin"));

    let upper = user(json!({"$id": "u5", "email": "A@X.COM"}));
    assert_eq!(resolve_role(&upper, &test_config()).as_deref(), Some("hostel-admin"));
}

#[test]
fn allowlisted_email_gets_college_admin() {
    let u = user(json!({"$id": "u6", "email": "Dean@College.edu"}));
    assert_eq!(resolve_role(&u, &test_config()).as_deref(), Some("college-admin"));

    let lower = user(json!({"$id": "u7", "email": "dean@college.edu"}));
    assert_eq!(resolve_role(&lower, &test_config()), None);
}

#[test]
fn user_without_signal_has_no_role() {
    let u = user(json!({"$id": "u8", "email": "student@college.edu", "prefs": {}}));
    assert_eq!(resolve_role(&u, &test_config()), None);
}

#[test]
fn malformed_preferences_do_not_stop_resolution() {
    let u = user(json!({"$id": "u9", "email": "Cook@College.edu", "prefs": "{not json"}));
    assert_eq!(resolve_role(&u, &test_config()).as_deref(), Some("food-admin"));

    let role_only = user(json!({"$id": "u10", "role": "other-admin", "prefs": "[1, 2"}));
    assert_eq!(resolve_role(&role_only, &test_config()).as_deref(), Some("other-admin"));
}

#[test]
fn direct_role_beats_email_rules() {
    let u = user(json!({"$id": "u11", "role": "hostel-admin", "email": "principal@college.edu"}));
    assert_eq!(resolve_role(&u, &test_config()).as_deref(), Some("hostel-admin"));
}

#[test]
fn resolution_is_idempotent() {
    let u = user(json!({"$id": "u12", "email": "a@x.com", "prefs": "{\"roles\":[\"zzz\"]}"}));
    let config = test_config();
    let first = resolve_role(&u, &config);
    let second = resolve_role(&u, &config);
    assert_eq!(first, second);
    assert_eq!(first.as_deref(), Some("zzz"));
}

#[test]
fn empty_config_only_resolves_record_signals() {
    let config = RoleAssignmentConfig::default();
    let u = user(json!({"$id": "u13", "email": "a@x.com"}));
    assert_eq!(resolve_role(&u, &config), None);
}
