//! `splunk_saved_search`: a saved search and its ACL.
//!
//! `configuration` is keyed by Splunk's own setting names (`cron_schedule`,
//! `action.email.to`, ...). Keys that Splunk computes, such as
//! `qualifiedSearch`, are rejected.
//!
//! Read only refreshes the configuration keys already in the bag. After an
//! import, when the bag has no configuration yet, every writable setting that
//! is not at its zero value is adopted.

use serde::Deserialize;
use serde_json::{Map, Value, json};
use splunk_client::form::Encode;
use splunk_client::{Acl, FormEncode, Perms, SavedSearch, SavedSearchConfiguration, SplunkClient};
use tracing::debug;

use super::Resource;
use crate::error::{ProviderError, Result};
use crate::schema::{Attribute, Schema};
use crate::state::ResourceData;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct SavedSearchArgs {
    name: String,
    #[serde(default)]
    configuration: Map<String, Value>,
    #[serde(default)]
    acl: Option<AclArgs>,
}

/// The `acl` block. `read` and `write` are role names; `*` means everyone.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AclArgs {
    #[serde(default)]
    pub app: String,
    #[serde(default)]
    pub owner: String,
    #[serde(default)]
    pub sharing: String,
    #[serde(default)]
    pub read: Vec<String>,
    #[serde(default)]
    pub write: Vec<String>,
}

impl From<AclArgs> for Acl {
    fn from(args: AclArgs) -> Self {
        Acl {
            app: args.app,
            owner: args.owner,
            sharing: args.sharing,
            perms: Perms {
                read: args.read,
                write: args.write,
            },
            ..Default::default()
        }
    }
}

/// Server ACL for `tracked` keys, or all of it.
fn acl_attribute(acl: &Acl, tracked: Option<&Map<String, Value>>) -> Map<String, Value> {
    let fields = [
        ("app", json!(acl.app)),
        ("owner", json!(acl.owner)),
        ("sharing", json!(acl.sharing)),
        ("read", json!(acl.perms.read)),
        ("write", json!(acl.perms.write)),
    ];
    fields
        .into_iter()
        .filter(|(key, _)| tracked.is_none_or(|keys| keys.contains_key(*key)))
        .map(|(key, value)| (key.to_string(), value))
        .collect()
}

fn parse_configuration(settings: Map<String, Value>) -> Result<SavedSearchConfiguration> {
    if let Some(key) = settings
        .keys()
        .find(|k| !SavedSearchConfiguration::is_writable_form_field(k))
    {
        return Err(ProviderError::UnknownAttribute {
            resource: SavedSearchResource::TYPE_NAME,
            attribute: format!("configuration.{key}"),
        });
    }

    serde_json::from_value(Value::Object(settings)).map_err(|e| ProviderError::InvalidAttribute {
        resource: SavedSearchResource::TYPE_NAME,
        message: format!("configuration: {e}"),
    })
}

/// Server settings for `tracked` keys, or every non-zero writable setting.
fn configuration_attribute(
    configuration: &SavedSearchConfiguration,
    tracked: Option<&Map<String, Value>>,
) -> Map<String, Value> {
    let mut settings = Map::new();
    for tag in SavedSearchConfiguration::form_fields() {
        if tag.encode == Encode::Never {
            continue;
        }
        let value = (tag.get)(configuration);
        let keep = match tracked {
            Some(keys) => keys.contains_key(tag.name),
            None => !value.is_empty(),
        };
        if keep {
            settings.insert(tag.name.to_string(), value.into());
        }
    }
    settings
}

pub struct SavedSearchResource;

impl Resource for SavedSearchResource {
    const TYPE_NAME: &'static str = "splunk_saved_search";

    fn schema() -> Schema {
        Schema::v0()
            .with_attribute("name", Attribute::required_string().force_new())
            .with_attribute(
                "configuration",
                Attribute::optional_map()
                    .computed()
                    .with_description("Saved search settings keyed by Splunk setting name"),
            )
            .with_attribute(
                "acl",
                Attribute::optional_map()
                    .computed()
                    .with_description("app, owner, sharing, read and write"),
            )
    }

    async fn create(client: &SplunkClient, data: &mut ResourceData) -> Result<()> {
        let args: SavedSearchArgs = data.extract(Self::TYPE_NAME)?;
        let configuration = parse_configuration(args.configuration)?;

        client
            .create_saved_search(&SavedSearch::new(args.name.as_str(), configuration))
            .await?;
        data.set_id(args.name.as_str());
        debug!(id = %args.name, "Splunk saved search created");

        if let Some(acl) = args.acl {
            client
                .update_saved_search_acl(&args.name, &Acl::from(acl))
                .await?;
        }
        Self::read(client, data).await
    }

    async fn read(client: &SplunkClient, data: &mut ResourceData) -> Result<()> {
        let id = data.require_id(Self::TYPE_NAME)?.to_string();
        let search = client.get_saved_search(&id).await?;
        debug!(%id, "Splunk saved search read");

        let tracked = data.get("configuration").and_then(Value::as_object);
        let adopt_all = tracked.is_none();
        let settings = configuration_attribute(&search.configuration, tracked);

        let acl = match data.get("acl").and_then(Value::as_object) {
            Some(keys) => Some(acl_attribute(&search.acl, Some(keys))),
            None if adopt_all => Some(acl_attribute(&search.acl, None)),
            None => None,
        };
        if let Some(acl) = acl {
            data.set("acl", acl);
        }
        data.set("configuration", settings);
        data.set("name", search.name);
        Ok(())
    }

    async fn update(client: &SplunkClient, data: &mut ResourceData) -> Result<()> {
        let id = data.require_id(Self::TYPE_NAME)?.to_string();
        let args: SavedSearchArgs = data.extract(Self::TYPE_NAME)?;
        let configuration = parse_configuration(args.configuration)?;

        client.update_saved_search(&id, &configuration).await?;

        if let Some(acl) = args.acl
            && data.has_change("acl")
        {
            client.update_saved_search_acl(&id, &Acl::from(acl)).await?;
        }
        Self::read(client, data).await
    }

    async fn delete(client: &SplunkClient, data: &ResourceData) -> Result<()> {
        let id = data.require_id(Self::TYPE_NAME)?;
        client.delete_saved_search(id).await?;
        Ok(())
    }
}
