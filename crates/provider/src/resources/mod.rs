//! Resource handlers.
//!
//! Each handler maps one declared resource kind onto the client's REST
//! operations. Create and update finish with a read so the bag always holds
//! the server's representation.

mod role;
mod saved_search;
mod user;

pub use role::RoleResource;
pub use saved_search::{AclArgs, SavedSearchResource};
pub use user::UserResource;

use splunk_client::SplunkClient;

use crate::error::Result;
use crate::schema::Schema;
use crate::state::ResourceData;

/// CRUD handlers for one resource type.
#[allow(async_fn_in_trait)]
pub trait Resource {
    /// Type name as declared in configuration, e.g. `splunk_user`.
    const TYPE_NAME: &'static str;

    fn schema() -> Schema;

    async fn create(client: &SplunkClient, data: &mut ResourceData) -> Result<()>;

    async fn read(client: &SplunkClient, data: &mut ResourceData) -> Result<()>;

    async fn update(client: &SplunkClient, data: &mut ResourceData) -> Result<()>;

    async fn delete(client: &SplunkClient, data: &ResourceData) -> Result<()>;

    /// Adopt an existing object: the id doubles as the name.
    async fn import(client: &SplunkClient, data: &mut ResourceData) -> Result<()> {
        let id = data.require_id(Self::TYPE_NAME)?.to_string();
        data.set("name", id);
        Self::read(client, data).await
    }
}
