//! ACL methods for [`SplunkClient`].

use tracing::debug;

use crate::client::SplunkClient;
use crate::error::Result;
use crate::form::FormEncode;
use crate::models::{Acl, AclFeed, decode_feed};

impl SplunkClient {
    /// POST `acl` to an object's ACL endpoint (`<edit link>/acl`).
    pub async fn post_acl(&self, acl: &Acl, path: &str) -> Result<AclFeed> {
        debug!(%path, owner = %acl.owner, sharing = %acl.sharing, "Updating ACL");
        let body = self.post(path, &acl.to_form()).await?;
        decode_feed(&body)
    }

    /// Apply `acl` to the named saved search.
    pub async fn update_saved_search_acl(&self, name: &str, acl: &Acl) -> Result<AclFeed> {
        let edit = self.saved_search_link(name, "edit").await?;
        self.post_acl(acl, &format!("{}/acl", edit.trim_end_matches('/')))
            .await
    }
}
