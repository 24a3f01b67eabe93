//! Role management methods for [`SplunkClient`].

use tracing::debug;

use crate::client::SplunkClient;
use crate::endpoints::{ROLES_PATH, item_path};
use crate::error::{ClientError, Result};
use crate::lookup::{lookup_str, lookup_string_list};
use crate::models::Role;

impl SplunkClient {
    pub async fn create_role(&self, role: &Role) -> Result<()> {
        debug!(name = %role.name, "Creating role");
        self.post(ROLES_PATH, &role.create_form()).await?;
        Ok(())
    }

    /// Read a role by name.
    ///
    /// # Errors
    /// Returns [`ClientError::Lookup`] when `srchFilter`, `srchIndexesAllowed`
    /// or `imported_roles` is missing from the first entry.
    pub async fn get_role(&self, id: &str) -> Result<Role> {
        let body = self.get(&item_path(ROLES_PATH, id)).await?;
        let doc: serde_json::Value = serde_json::from_slice(&body)
            .map_err(|e| ClientError::InvalidResponse(e.to_string()))?;

        Ok(Role {
            name: lookup_str(&doc, "/entry/0/name")?,
            search_filter: lookup_str(&doc, "/entry/0/content/srchFilter")?,
            indexes_allowed: lookup_string_list(&doc, "/entry/0/content/srchIndexesAllowed")?,
            imported_roles: lookup_string_list(&doc, "/entry/0/content/imported_roles")?,
        })
    }

    /// Update a role. The name in `role` is ignored; `id` addresses the role.
    pub async fn update_role(&self, id: &str, role: &Role) -> Result<()> {
        debug!(%id, "Updating role");
        self.post(&item_path(ROLES_PATH, id), &role.update_form())
            .await?;
        Ok(())
    }

    pub async fn delete_role(&self, id: &str) -> Result<()> {
        debug!(%id, "Deleting role");
        self.delete(&item_path(ROLES_PATH, id)).await?;
        Ok(())
    }
}
