use pretty_assertions::assert_eq;
use serde_json::json;
use server::navigation::navigate;
use shared_types::{AdminRole, Navigation, UserRecord, View};

use crate::common::test_config;

fn dashboard(role: AdminRole) -> Navigation {
    Navigation::render(View::AdminDashboard { role })
}

#[test]
fn public_pages_render_without_session() {
    let config = test_config();
    assert_eq!(navigate("/", None, &config), Navigation::render(View::Home));
    assert_eq!(navigate("/login", None, &config), Navigation::render(View::Login));
    assert_eq!(navigate("/admin/login", None, &config), Navigation::render(View::AdminLogin));
}

#[test]
fn complaints_page_flags_super_admin() {
    let config = test_config();
    assert_eq!(
        navigate("/complaints", None, &config),
        Navigation::render(View::ComplaintRegister {
            signed_in: false,
            super_admin: false
        })
    );

    let principal = UserRecord::new("u1").with_email("principal@college.edu");
    assert_eq!(
        navigate("/complaints", Some(&principal), &config),
        Navigation::render(View::ComplaintRegister {
            signed_in: true,
            super_admin: true
        })
    );

    let student = UserRecord::new("u2").with_email("student@college.edu");
    assert_eq!(
        navigate("/complaints?role=super-admin", Some(&student), &config),
        Navigation::render(View::ComplaintRegister {
            signed_in: true,
            super_admin: false
        })
    );
}

#[test]
fn admin_route_uses_resolved_role() {
    let config = test_config();
    let cook = UserRecord::new("u3").with_email("Cook@College.edu");
    assert_eq!(navigate("/admin", Some(&cook), &config), dashboard(AdminRole::FoodAdmin));
}

#[test]
fn admin_route_honors_role_parameter() {
    let config = test_config();
    let cook = UserRecord::new("u4").with_email("Cook@College.edu");
    assert_eq!(
        navigate("/admin?role=other-admin", Some(&cook), &config),
        dashboard(AdminRole::OtherAdmin)
    );
    assert_eq!(
        navigate("/admin?role=not-a-real-role", Some(&cook), &config),
        Navigation::redirect("/admin/login")
    );
    assert_eq!(
        navigate("/admin?role=", Some(&cook), &config),
        dashboard(AdminRole::FoodAdmin)
    );
}

#[test]
fn admin_route_without_session_redirects_to_admin_login() {
    let config = test_config();
    assert_eq!(
        navigate("/admin?role=super-admin", None, &config),
        Navigation::redirect("/admin/login")
    );
}

#[test]
fn area_routes_require_matching_role() {
    let config = test_config();
    let cook = UserRecord::new("u5").with_email("Cook@College.edu");
    assert_eq!(navigate("/admin/food", Some(&cook), &config), dashboard(AdminRole::FoodAdmin));
    assert_eq!(
        navigate("/admin/hostel", Some(&cook), &config),
        Navigation::redirect("/admin/login")
    );
    assert_eq!(
        navigate("/admin/food", None, &config),
        Navigation::redirect("/admin/login")
    );
}

#[test]
fn area_routes_ignore_role_parameter() {
    let config = test_config();
    let student = UserRecord::new("u6").with_preferences(json!({"college": "Food"}));
    assert_eq!(
        navigate("/admin/super?role=super-admin", Some(&student), &config),
        Navigation::redirect("/admin/login")
    );
}

#[test]
fn unknown_paths_redirect_home() {
    let config = test_config();
    for path in ["/nope", "/admin/janitor", "/complaints/42"] {
        assert_eq!(navigate(path, None, &config), Navigation::redirect("/"));
    }
}

#[test]
fn undecodable_role_parameter_is_refused() {
    let config = test_config();
    let cook = UserRecord::new("u7").with_email("Cook@College.edu");
    assert_eq!(
        navigate("/admin?role=%FF", Some(&cook), &config),
        Navigation::redirect("/admin/login")
    );
}
