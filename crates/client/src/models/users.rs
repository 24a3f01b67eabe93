//! User models for the `authentication/users` endpoint.

use secrecy::{ExposeSecret, SecretString};

use crate::form::FormParams;

/// A Splunk user as read back from the server. The password is never returned.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct User {
    pub name: String,
    pub real_name: String,
    pub email: String,
    pub roles: Vec<String>,
}

/// Parameters for creating or updating a user.
#[derive(Debug, Clone)]
pub struct UserParams {
    pub name: String,
    pub password: SecretString,
    pub real_name: String,
    pub email: String,
    pub roles: Vec<String>,
}

impl UserParams {
    /// Create form. New users must change their password on first login.
    pub fn create_form(&self) -> FormParams {
        let mut form = FormParams::new();
        form.push("name", self.name.as_str());
        self.push_common(&mut form);
        form.push("force-change-pass", "true");
        form.push_all("roles", &self.roles);
        form
    }

    /// Update form. `force-change-pass` is only sent when the password changed.
    pub fn update_form(&self, password_changed: bool) -> FormParams {
        let mut form = FormParams::new();
        self.push_common(&mut form);
        if password_changed {
            form.push("force-change-pass", "true");
        }
        form.push_all("roles", &self.roles);
        form
    }

    fn push_common(&self, form: &mut FormParams) {
        form.push("password", self.password.expose_secret());
        form.push("email", self.email.as_str());
        form.push("realname", self.real_name.as_str());
    }
}
