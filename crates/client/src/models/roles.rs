//! Role models for the `authorization/roles` endpoint.

use crate::form::FormParams;

/// App every managed role lands in by default.
pub const ROLE_DEFAULT_APP: &str = "search";

/// A Splunk role, either as declared or as read back.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Role {
    pub name: String,
    /// Search filter applied to every search run by members (`srchFilter`).
    pub search_filter: String,
    /// Indexes members may search (`srchIndexesAllowed`).
    pub indexes_allowed: Vec<String>,
    /// Roles whose capabilities this role inherits (`imported_roles`).
    pub imported_roles: Vec<String>,
}

impl Role {
    pub fn create_form(&self) -> FormParams {
        let mut form = FormParams::new();
        form.push("name", self.name.as_str());
        self.push_settings(&mut form);
        form
    }

    /// Same as the create form without the name.
    pub fn update_form(&self) -> FormParams {
        let mut form = FormParams::new();
        self.push_settings(&mut form);
        form
    }

    fn push_settings(&self, form: &mut FormParams) {
        form.push("srchFilter", self.search_filter.as_str());
        form.push("defaultApp", ROLE_DEFAULT_APP);
        form.push_all("srchIndexesAllowed", &self.indexes_allowed);
        form.push_all("imported_roles", &self.imported_roles);
    }
}
