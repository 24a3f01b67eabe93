//! The Atom-style JSON envelope Splunk wraps around every REST response.
//!
//! Responsibilities:
//! - Model the feed, its entries, their links and server messages.
//! - Decode raw response bodies into typed feeds.
//!
//! Does NOT handle:
//! - Resource-specific content (see the sibling model modules).
//!
//! Invariants:
//! - Every envelope field is optional on the wire; absent fields decode to defaults.
//! - Unknown message types decode to [`MessageType::Unknown`].

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

use crate::error::{ClientError, Result};
use crate::models::acl::Acl;
use crate::serde_helpers::null_as_default;

/// Type of message from Splunk API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum MessageType {
    #[serde(rename = "ERROR")]
    Error,
    #[serde(rename = "WARN")]
    Warn,
    #[serde(rename = "INFO")]
    Info,
    #[serde(other)]
    #[default]
    Unknown,
}

impl fmt::Display for MessageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error => write!(f, "ERROR"),
            Self::Warn => write!(f, "WARN"),
            Self::Info => write!(f, "INFO"),
            Self::Unknown => write!(f, "UNKNOWN"),
        }
    }
}

/// A single server message.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Message {
    #[serde(rename = "type", default)]
    pub message_type: MessageType,
    #[serde(default)]
    pub text: String,
}

/// Named links (`alternate`, `list`, `edit`, `remove`, ...) to related endpoints.
pub type Links = HashMap<String, String>;

/// Anything carrying a link map.
pub trait HasLinks {
    fn links(&self) -> &Links;

    /// Path of the link with relation `rel`, if present.
    fn link(&self, rel: &str) -> Option<&str> {
        self.links().get(rel).map(String::as_str)
    }
}

/// Generic feed entry with untyped content.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Entry {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub updated: String,
    #[serde(default)]
    pub author: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub links: Links,
    #[serde(default, deserialize_with = "null_as_default")]
    pub content: serde_json::Map<String, serde_json::Value>,
    #[serde(default)]
    pub acl: Option<Acl>,
}

impl HasLinks for Entry {
    fn links(&self) -> &Links {
        &self.links
    }
}

/// Top-level response envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Feed<E = Entry> {
    #[serde(default, deserialize_with = "null_as_default")]
    pub links: Links,
    #[serde(default)]
    pub origin: String,
    #[serde(default)]
    pub updated: String,
    #[serde(default = "Vec::new")]
    pub entry: Vec<E>,
    #[serde(default = "Vec::new")]
    pub messages: Vec<Message>,
}

impl<E> Feed<E> {
    /// The first entry, or [`ClientError::EmptyFeed`] naming `what`.
    pub fn into_first(self, what: &str) -> Result<E> {
        self.entry
            .into_iter()
            .next()
            .ok_or_else(|| ClientError::EmptyFeed(what.to_string()))
    }

    pub fn first(&self) -> Option<&E> {
        self.entry.first()
    }

    /// Server messages of type `ERROR`.
    pub fn errors(&self) -> impl Iterator<Item = &Message> {
        self.messages
            .iter()
            .filter(|m| m.message_type == MessageType::Error)
    }
}

/// Decode a response body into a typed feed.
pub fn decode_feed<E: DeserializeOwned>(body: &[u8]) -> Result<Feed<E>> {
    serde_json::from_slice(body).map_err(|e| ClientError::InvalidResponse(e.to_string()))
}
