//! Provider entry points.
//!
//! Responsibilities:
//! - Turn the declared provider block into a shared [`SplunkClient`].
//! - Dispatch CRUD and import calls to the handler for a resource type name.
//! - Check attribute presence and force-new changes before any request is sent.
//!
//! Does NOT handle:
//! - Planning or diffing; the host decides which operation to call.
//! - Transport to the host process.

use serde_json::Value;
use splunk_client::{MetricsCollector, SplunkClient};
use splunk_config::{ConfigError, ConfigLoader, ProviderBlock, ProviderConfig};
use tracing::debug;

use crate::error::{ProviderError, Result};
use crate::resources::{Resource, RoleResource, SavedSearchResource, UserResource};
use crate::schema::{Attribute, ProviderSchema, Schema};
use crate::state::ResourceData;

/// Resource types served by this provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceType {
    SavedSearch,
    User,
    Role,
}

impl ResourceType {
    pub const ALL: [ResourceType; 3] = [
        ResourceType::SavedSearch,
        ResourceType::User,
        ResourceType::Role,
    ];

    pub fn parse(name: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == name)
            .ok_or_else(|| ProviderError::UnknownResourceType(name.to_string()))
    }

    pub fn name(self) -> &'static str {
        match self {
            ResourceType::SavedSearch => SavedSearchResource::TYPE_NAME,
            ResourceType::User => UserResource::TYPE_NAME,
            ResourceType::Role => RoleResource::TYPE_NAME,
        }
    }

    pub fn schema(self) -> Schema {
        match self {
            ResourceType::SavedSearch => SavedSearchResource::schema(),
            ResourceType::User => UserResource::schema(),
            ResourceType::Role => RoleResource::schema(),
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Operation {
    Create,
    Read,
    Update,
    Delete,
    Import,
}

async fn run<R: Resource>(
    client: &SplunkClient,
    operation: Operation,
    data: &mut ResourceData,
) -> Result<()> {
    match operation {
        Operation::Create => R::create(client, data).await,
        Operation::Read => R::read(client, data).await,
        Operation::Update => R::update(client, data).await,
        Operation::Delete => R::delete(client, data).await,
        Operation::Import => R::import(client, data).await,
    }
}

/// Splunk provider. Unusable until configured.
#[derive(Debug, Clone, Default)]
pub struct Provider {
    client: Option<SplunkClient>,
}

impl Provider {
    pub fn new() -> Self {
        Self::default()
    }

    /// A provider that uses an already built client.
    pub fn with_client(client: SplunkClient) -> Self {
        Self {
            client: Some(client),
        }
    }

    /// Schemas of the provider block and every resource type.
    pub fn schema() -> ProviderSchema {
        let provider = Schema::v0()
            .with_attribute(
                "url",
                Attribute::optional_string().with_description("URL endpoint for Splunk API"),
            )
            .with_attribute(
                "username",
                Attribute::optional_string()
                    .with_description("The username for Splunk API operations"),
            )
            .with_attribute(
                "password",
                Attribute::optional_string()
                    .sensitive()
                    .with_description("The password for Splunk API operations"),
            )
            .with_attribute(
                "insecure_skip_verify",
                Attribute::optional_bool().with_description("Ignore certificate on Splunk server"),
            );

        ResourceType::ALL.into_iter().fold(
            ProviderSchema::new().with_provider_config(provider),
            |schema, kind| schema.with_resource(kind.name(), kind.schema()),
        )
    }

    /// Configure from the declared provider block.
    ///
    /// Keys missing from the block fall back to `SPLUNK_URL`, `SPLUNK_USERNAME`,
    /// `SPLUNK_PASSWORD` and `SPLUNK_INSECURE`, after loading `.env`.
    /// `null` is treated as an empty block.
    pub fn configure(&mut self, block: Value) -> Result<()> {
        let block: ProviderBlock = if block.is_null() {
            ProviderBlock::default()
        } else {
            serde_json::from_value(block).map_err(|e| ConfigError::InvalidValue {
                var: "provider".to_string(),
                message: e.to_string(),
            })?
        };

        let config = ConfigLoader::new()
            .load_dotenv()?
            .with_block(block)
            .from_env()?
            .build()?;
        self.configure_with(&config)
    }

    /// Configure from an already validated configuration. Request metrics go
    /// to whatever `metrics` recorder the host installed.
    pub fn configure_with(&mut self, config: &ProviderConfig) -> Result<()> {
        let client = SplunkClient::builder()
            .from_config(config)
            .metrics(MetricsCollector::new())
            .build()?;
        debug!(url = %client.base_url(), "Provider client ready");
        self.client = Some(client);
        Ok(())
    }

    pub fn client(&self) -> Result<&SplunkClient> {
        self.client.as_ref().ok_or(ProviderError::NotConfigured)
    }

    /// Create from the planned attributes; returns the new state.
    pub async fn create(&self, type_name: &str, planned: Value) -> Result<Value> {
        let kind = ResourceType::parse(type_name)?;
        let mut data = ResourceData::from_state(kind.name(), planned)?;
        kind.schema().validate(kind.name(), data.attributes())?;
        self.dispatch(kind, Operation::Create, &mut data).await?;
        Ok(data.to_state())
    }

    /// Refresh a stored state from Splunk.
    pub async fn read(&self, type_name: &str, state: Value) -> Result<Value> {
        let kind = ResourceType::parse(type_name)?;
        let mut data = ResourceData::from_state(kind.name(), state)?;
        self.dispatch(kind, Operation::Read, &mut data).await?;
        Ok(data.to_state())
    }

    /// Apply the planned attributes over the prior state.
    ///
    /// # Errors
    /// Returns [`ProviderError::RequiresReplacement`] without contacting
    /// Splunk when a force-new attribute changed.
    pub async fn update(&self, type_name: &str, prior: Value, planned: Value) -> Result<Value> {
        let kind = ResourceType::parse(type_name)?;
        let prior = ResourceData::from_state(kind.name(), prior)?;
        let mut data = ResourceData::from_state(kind.name(), planned)?
            .with_prior(prior.attributes().clone());
        if data.id().is_none()
            && let Some(id) = prior.id()
        {
            data.set_id(id);
        }

        let schema = kind.schema();
        schema.validate(kind.name(), data.attributes())?;
        if let Some(attribute) = schema.force_new_attributes().find(|a| data.has_change(a)) {
            return Err(ProviderError::RequiresReplacement {
                resource: kind.name(),
                attribute: attribute.to_string(),
            });
        }

        self.dispatch(kind, Operation::Update, &mut data).await?;
        Ok(data.to_state())
    }

    pub async fn delete(&self, type_name: &str, state: Value) -> Result<()> {
        let kind = ResourceType::parse(type_name)?;
        let mut data = ResourceData::from_state(kind.name(), state)?;
        self.dispatch(kind, Operation::Delete, &mut data).await
    }

    /// Adopt an existing object by id; returns its state.
    pub async fn import(&self, type_name: &str, id: &str) -> Result<Value> {
        let kind = ResourceType::parse(type_name)?;
        let mut data = ResourceData::from_id(id);
        self.dispatch(kind, Operation::Import, &mut data).await?;
        Ok(data.to_state())
    }

    async fn dispatch(
        &self,
        kind: ResourceType,
        operation: Operation,
        data: &mut ResourceData,
    ) -> Result<()> {
        let client = self.client()?;
        debug!(resource = kind.name(), ?operation, id = ?data.id(), "Dispatching");
        match kind {
            ResourceType::SavedSearch => run::<SavedSearchResource>(client, operation, data).await,
            ResourceType::User => run::<UserResource>(client, operation, data).await,
            ResourceType::Role => run::<RoleResource>(client, operation, data).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_resource_type() {
        assert_eq!(
            ResourceType::parse("splunk_saved_search").unwrap(),
            ResourceType::SavedSearch
        );
        assert_eq!(ResourceType::parse("splunk_user").unwrap(), ResourceType::User);
        assert_eq!(ResourceType::parse("splunk_role").unwrap(), ResourceType::Role);
        assert!(matches!(
            ResourceType::parse("splunk_index"),
            Err(ProviderError::UnknownResourceType(name)) if name == "splunk_index"
        ));
    }

    #[test]
    fn test_schema_lists_every_resource() {
        let schema = Provider::schema();
        let names: Vec<_> = schema.resources.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["splunk_role", "splunk_saved_search", "splunk_user"]);
        assert!(schema.provider.attribute("password").unwrap().sensitive);
        assert!(
            schema
                .resource("splunk_user")
                .unwrap()
                .attribute("password")
                .unwrap()
                .sensitive
        );
    }

    #[test]
    fn test_every_resource_name_is_force_new() {
        for kind in ResourceType::ALL {
            let schema = kind.schema();
            assert!(schema.force_new_attributes().any(|a| a == "name"), "{kind:?}");
        }
    }

    #[tokio::test]
    async fn test_unconfigured_provider() {
        let provider = Provider::new();
        let err = provider
            .read("splunk_user", serde_json::json!({ "id": "jdoe" }))
            .await
            .unwrap_err();
        assert!(matches!(err, ProviderError::NotConfigured));
    }
}
