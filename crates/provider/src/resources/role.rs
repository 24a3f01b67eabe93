//! `splunk_role`: an authorization role.

use serde::Deserialize;
use splunk_client::{Role, SplunkClient};
use tracing::debug;

use super::Resource;
use crate::error::Result;
use crate::schema::{Attribute, Schema};
use crate::state::ResourceData;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RoleArgs {
    name: String,
    #[serde(default)]
    search_filter: String,
    #[serde(default)]
    indexes_allowed: Vec<String>,
    #[serde(default)]
    imported_roles: Vec<String>,
}

impl From<RoleArgs> for Role {
    fn from(args: RoleArgs) -> Self {
        Role {
            name: args.name,
            search_filter: args.search_filter,
            indexes_allowed: args.indexes_allowed,
            imported_roles: args.imported_roles,
        }
    }
}

pub struct RoleResource;

impl Resource for RoleResource {
    const TYPE_NAME: &'static str = "splunk_role";

    fn schema() -> Schema {
        Schema::v0()
            .with_attribute("name", Attribute::required_string().force_new())
            .with_attribute("search_filter", Attribute::optional_string())
            .with_attribute("indexes_allowed", Attribute::optional_string_list())
            .with_attribute("imported_roles", Attribute::optional_string_list())
    }

    async fn create(client: &SplunkClient, data: &mut ResourceData) -> Result<()> {
        let role = Role::from(data.extract::<RoleArgs>(Self::TYPE_NAME)?);
        client.create_role(&role).await?;
        data.set_id(role.name.as_str());
        debug!(id = %role.name, "Splunk role created");
        Self::read(client, data).await
    }

    async fn read(client: &SplunkClient, data: &mut ResourceData) -> Result<()> {
        let id = data.require_id(Self::TYPE_NAME)?.to_string();
        let role = client.get_role(&id).await?;
        debug!(%id, "Splunk role read");

        data.set_id(role.name.as_str());
        data.set("name", role.name);
        data.set("search_filter", role.search_filter);
        data.set("indexes_allowed", role.indexes_allowed);
        data.set("imported_roles", role.imported_roles);
        Ok(())
    }

    async fn update(client: &SplunkClient, data: &mut ResourceData) -> Result<()> {
        let id = data.require_id(Self::TYPE_NAME)?.to_string();
        let role = Role::from(data.extract::<RoleArgs>(Self::TYPE_NAME)?);
        client.update_role(&id, &role).await?;
        Self::read(client, data).await
    }

    async fn delete(client: &SplunkClient, data: &ResourceData) -> Result<()> {
        let id = data.require_id(Self::TYPE_NAME)?;
        client.delete_role(id).await?;
        Ok(())
    }
}
