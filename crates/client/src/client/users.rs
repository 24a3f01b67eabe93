//! User management methods for [`SplunkClient`].
//!
//! # What this module does NOT handle:
//! - Reading passwords back; Splunk never returns them.

use tracing::debug;

use crate::client::SplunkClient;
use crate::endpoints::{USERS_PATH, item_path};
use crate::error::{ClientError, Result};
use crate::lookup::{lookup_str, lookup_string_list};
use crate::models::{User, UserParams};

impl SplunkClient {
    /// Create a user. New users must change their password on first login.
    pub async fn create_user(&self, params: &UserParams) -> Result<()> {
        debug!(name = %params.name, "Creating user");
        self.post(USERS_PATH, &params.create_form()).await?;
        Ok(())
    }

    /// Read a user by name.
    ///
    /// # Errors
    /// Returns [`ClientError::Lookup`] when `email`, `realname` or `roles`
    /// is missing from the first entry.
    pub async fn get_user(&self, id: &str) -> Result<User> {
        let body = self.get(&item_path(USERS_PATH, id)).await?;
        let doc: serde_json::Value = serde_json::from_slice(&body)
            .map_err(|e| ClientError::InvalidResponse(e.to_string()))?;

        Ok(User {
            name: lookup_str(&doc, "/entry/0/name")?,
            email: lookup_str(&doc, "/entry/0/content/email")?,
            real_name: lookup_str(&doc, "/entry/0/content/realname")?,
            roles: lookup_string_list(&doc, "/entry/0/content/roles")?,
        })
    }

    /// Update a user. `force_change_pass` should be set when the password changed.
    pub async fn update_user(
        &self,
        id: &str,
        params: &UserParams,
        force_change_pass: bool,
    ) -> Result<()> {
        debug!(%id, force_change_pass, "Updating user");
        self.post(&item_path(USERS_PATH, id), &params.update_form(force_change_pass))
            .await?;
        Ok(())
    }

    pub async fn delete_user(&self, id: &str) -> Result<()> {
        debug!(%id, "Deleting user");
        self.delete(&item_path(USERS_PATH, id)).await?;
        Ok(())
    }
}
