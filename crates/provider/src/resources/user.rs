//! `splunk_user`: a Splunk login.
//!
//! The password is write-only. Read leaves whatever the bag holds, so a
//! changed password is only noticed through the declared value.

use secrecy::SecretString;
use serde::Deserialize;
use splunk_client::{SplunkClient, UserParams};
use tracing::debug;

use super::Resource;
use crate::error::Result;
use crate::schema::{Attribute, Schema};
use crate::state::ResourceData;

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct UserArgs {
    name: String,
    password: String,
    #[serde(default)]
    real_name: String,
    #[serde(default)]
    email: String,
    #[serde(default)]
    roles: Vec<String>,
}

impl From<UserArgs> for UserParams {
    fn from(args: UserArgs) -> Self {
        UserParams {
            name: args.name,
            password: SecretString::new(args.password.into()),
            real_name: args.real_name,
            email: args.email,
            roles: args.roles,
        }
    }
}

pub struct UserResource;

impl Resource for UserResource {
    const TYPE_NAME: &'static str = "splunk_user";

    fn schema() -> Schema {
        Schema::v0()
            .with_attribute("name", Attribute::required_string().force_new())
            .with_attribute("password", Attribute::required_string().sensitive())
            .with_attribute("real_name", Attribute::optional_string().computed())
            .with_attribute("email", Attribute::optional_string().computed())
            .with_attribute("roles", Attribute::optional_string_list().computed())
    }

    async fn create(client: &SplunkClient, data: &mut ResourceData) -> Result<()> {
        let params = UserParams::from(data.extract::<UserArgs>(Self::TYPE_NAME)?);
        client.create_user(&params).await?;
        data.set_id(params.name.as_str());
        debug!(id = %params.name, "Splunk user created");
        Self::read(client, data).await
    }

    async fn read(client: &SplunkClient, data: &mut ResourceData) -> Result<()> {
        let id = data.require_id(Self::TYPE_NAME)?.to_string();
        let user = client.get_user(&id).await?;
        debug!(%id, "Splunk user read");

        data.set_id(user.name.as_str());
        data.set("name", user.name);
        data.set("real_name", user.real_name);
        data.set("email", user.email);
        data.set("roles", user.roles);
        Ok(())
    }

    async fn update(client: &SplunkClient, data: &mut ResourceData) -> Result<()> {
        let id = data.require_id(Self::TYPE_NAME)?.to_string();
        let params = UserParams::from(data.extract::<UserArgs>(Self::TYPE_NAME)?);
        client
            .update_user(&id, &params, data.has_change("password"))
            .await?;
        Self::read(client, data).await
    }

    async fn delete(client: &SplunkClient, data: &ResourceData) -> Result<()> {
        let id = data.require_id(Self::TYPE_NAME)?;
        client.delete_user(id).await?;
        Ok(())
    }
}
