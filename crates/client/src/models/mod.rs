//! Data models for Splunk REST API responses and requests.

pub mod acl;
pub mod feed;
pub mod roles;
pub mod saved_searches;
pub mod users;

pub use acl::{Acl, AclFeed, Perms};
pub use feed::{Entry, Feed, HasLinks, Links, Message, MessageType, decode_feed};
pub use roles::{ROLE_DEFAULT_APP, Role};
pub use saved_searches::{DEFAULT_APP, SavedSearch, SavedSearchConfiguration};
pub use users::{User, UserParams};
