//! Declarative management of Splunk saved searches, users and roles.
//!
//! A host runtime configures a [`Provider`] with the declared provider block,
//! then calls `create`, `read`, `update`, `delete` or `import` with a resource
//! type name and a JSON property bag. Every mutation ends with a read, so the
//! returned state reflects what Splunk stored.
//!
//! ```ignore
//! use serde_json::json;
//! use splunk_provider::{Provider, init_logging};
//!
//! init_logging();
//! let mut provider = Provider::new();
//! provider.configure(json!({ "url": "https://localhost:8089" }))?;
//! let state = provider
//!     .create("splunk_role", json!({ "name": "ops", "search_filter": "index=ops" }))
//!     .await?;
//! ```

pub mod error;
pub mod logging;
pub mod provider;
pub mod resources;
pub mod schema;
pub mod state;

pub use error::{ProviderError, Result};
pub use logging::{init_logging, try_init_logging};
pub use provider::{Provider, ResourceType};
pub use resources::Resource;
pub use schema::{Attribute, AttributeType, ProviderSchema, Schema};
pub use state::ResourceData;
