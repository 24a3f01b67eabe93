//! Saved search methods for [`SplunkClient`].
//!
//! # What this module handles:
//! - Create, read, update and delete by name
//! - Resolving an entry's named links (`edit`, `remove`, ...)
//!
//! # Invariants
//! - Update, delete and ACL calls always resolve their target through a fresh
//!   read, so they hit the namespaced path Splunk advertises for the object.
//! - When a link is missing, nothing is sent.

use tracing::debug;

use crate::client::SplunkClient;
use crate::endpoints::{SAVED_SEARCHES_PATH, item_path};
use crate::error::{ClientError, Result};
use crate::form::FormEncode;
use crate::models::{Feed, HasLinks, SavedSearch, SavedSearchConfiguration, decode_feed};

impl SplunkClient {
    /// Create a saved search in the default app.
    pub async fn create_saved_search(&self, search: &SavedSearch) -> Result<Feed<SavedSearch>> {
        debug!(name = %search.name, "Creating saved search");
        let body = self
            .post(SAVED_SEARCHES_PATH, &search.create_form())
            .await?;
        decode_feed(&body)
    }

    /// Read one saved search by name.
    ///
    /// # Errors
    /// Besides transport and status errors, returns [`ClientError::EmptyFeed`]
    /// when Splunk answers with no entry.
    pub async fn get_saved_search(&self, name: &str) -> Result<SavedSearch> {
        let body = self.get(&item_path(SAVED_SEARCHES_PATH, name)).await?;
        decode_feed::<SavedSearch>(&body)?.into_first(&format!("saved search {name}"))
    }

    /// Path of the `rel` link of the named saved search.
    pub async fn saved_search_link(&self, name: &str, rel: &str) -> Result<String> {
        let search = self.get_saved_search(name).await?;
        search
            .link(rel)
            .map(str::to_string)
            .ok_or_else(|| ClientError::LinkNotFound {
                name: name.to_string(),
                rel: rel.to_string(),
            })
    }

    /// Replace the configuration of an existing saved search.
    pub async fn update_saved_search(
        &self,
        name: &str,
        configuration: &SavedSearchConfiguration,
    ) -> Result<Feed<SavedSearch>> {
        let edit = self.saved_search_link(name, "edit").await?;
        debug!(%name, %edit, "Updating saved search");
        let body = self.post(&edit, &configuration.to_form()).await?;
        decode_feed(&body)
    }

    /// Delete a saved search.
    pub async fn delete_saved_search(&self, name: &str) -> Result<()> {
        let remove = self.saved_search_link(name, "remove").await?;
        debug!(%name, %remove, "Deleting saved search");
        self.delete(&remove).await?;
        Ok(())
    }
}
