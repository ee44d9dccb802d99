pub mod access_gate;
pub mod admin_sign_in;
pub mod dashboard_scope;
pub mod role_resolver;

pub use access_gate::select_destination;
pub use admin_sign_in::{admit, plan_session, validate_form, DEFAULT_ADMIN_REDIRECT};
pub use dashboard_scope::{
    category_matches, dashboard_category, default_category, role_category, FOOD_CATEGORY,
};
pub use role_resolver::{resolve_admin_role, resolve_role, RoleSignal};
