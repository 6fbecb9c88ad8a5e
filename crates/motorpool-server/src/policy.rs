//! Route authorization policy.
//!
//! A single table maps every protected route template to the set of
//! roles allowed to call it. The authorization middleware consults this
//! table via the request's matched path; a protected route with no
//! entry is denied.

use axum::http::Method;

use motorpool_core::models::Profile;

pub const ADMIN_ONLY: &[Profile] = &[Profile::Admin];
pub const ADMIN_OR_EDITOR: &[Profile] = &[Profile::Admin, Profile::Editor];

/// (method, route template, allowed roles). Templates use the router's
/// `{param}` syntax and must match the registered routes exactly.
const POLICY: &[(Method, &str, &[Profile])] = &[
    (Method::POST, "/administrators", ADMIN_ONLY),
    (Method::GET, "/administrators", ADMIN_ONLY),
    (Method::GET, "/administrator/{id}", ADMIN_ONLY),
    (Method::DELETE, "/administrator/{id}", ADMIN_ONLY),
    (Method::POST, "/vehicles", ADMIN_OR_EDITOR),
    (Method::GET, "/vehicles", ADMIN_OR_EDITOR),
    (Method::GET, "/vehicle/{id}", ADMIN_OR_EDITOR),
    (Method::GET, "/vehiclesName/{name}", ADMIN_OR_EDITOR),
    (Method::GET, "/vehiclesBrand/{brand}", ADMIN_OR_EDITOR),
    (Method::PUT, "/vehicle/{id}", ADMIN_ONLY),
    (Method::DELETE, "/vehicle/{id}", ADMIN_ONLY),
];

/// Roles allowed for a protected route, or None if the route has no
/// policy entry.
pub fn required_roles(method: &Method, route: &str) -> Option<&'static [Profile]> {
    POLICY
        .iter()
        .find(|(m, r, _)| m == method && *r == route)
        .map(|(_, _, roles)| *roles)
}
