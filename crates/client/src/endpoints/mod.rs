//! REST paths and low-level request helpers.

pub(crate) mod request;
pub mod url_encoding;

pub use url_encoding::encode_path_segment;

/// Collection path for saved searches.
pub const SAVED_SEARCHES_PATH: &str = "/services/saved/searches";

/// Collection path for users.
pub const USERS_PATH: &str = "/services/authentication/users";

/// Collection path for roles.
pub const ROLES_PATH: &str = "/services/authorization/roles";

/// Path of the named object inside `collection`.
pub fn item_path(collection: &str, name: &str) -> String {
    format!("{}/{}", collection, encode_path_segment(name))
}

/// Metrics label for `path`: its collection, never the object name.
pub(crate) fn endpoint_label(path: &str) -> &'static str {
    let path = path.split('?').next().unwrap_or(path);
    for collection in [SAVED_SEARCHES_PATH, USERS_PATH, ROLES_PATH] {
        if path == collection || path.starts_with(&format!("{collection}/")) {
            return collection;
        }
    }
    if path.contains("/saved/searches/") {
        if path.ends_with("/acl") {
            return "/servicesNS/saved/searches/acl";
        }
        return "/servicesNS/saved/searches";
    }
    "other"
}
