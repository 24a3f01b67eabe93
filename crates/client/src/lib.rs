//! Splunk REST API client for managing saved searches, users and roles.
//!
//! Every call authenticates with basic auth and asks for JSON output. Write
//! endpoints take `application/x-www-form-urlencoded` bodies built by [`form`].

pub mod client;
pub mod endpoints;
pub mod error;
pub mod form;
pub mod lookup;
pub mod metrics;
pub mod models;
mod serde_helpers;

#[cfg(any(test, feature = "test-utils"))]
pub mod testing;

pub use client::SplunkClient;
pub use client::builder::SplunkClientBuilder;
pub use error::{ClientError, Result};
pub use form::{FormEncode, FormParams};
pub use metrics::{ErrorCategory, MetricsCollector};
pub use models::{
    Acl, AclFeed, Entry, Feed, HasLinks, Perms, Role, SavedSearch, SavedSearchConfiguration,
    User, UserParams,
};
