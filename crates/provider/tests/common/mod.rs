//! Common test utilities for provider integration tests.
//!
//! # Invariants
//! - Fixtures come from the client crate's `fixtures/` directory
//! - Every provider built here talks to a wiremock server as `admin`/`changeme`

use secrecy::SecretString;
use splunk_client::SplunkClient;

#[allow(unused_imports)]
pub use splunk_client::testing::load_fixture;
#[allow(unused_imports)]
pub use splunk_provider::{Provider, ProviderError};
#[allow(unused_imports)]
pub use wiremock::{Mock, MockServer, ResponseTemplate};

/// `Authorization` header value for `admin`/`changeme`.
#[allow(dead_code)]
pub const ADMIN_BASIC_AUTH: &str = "Basic YWRtaW46Y2hhbmdlbWU=";

/// Provider whose client points at `server`.
#[allow(dead_code)]
pub fn test_provider(server: &MockServer) -> Provider {
    let client = SplunkClient::builder()
        .base_url(server.uri())
        .username("admin".to_string())
        .password(SecretString::new("changeme".to_string().into()))
        .build()
        .expect("client should build against the mock server");
    Provider::with_client(client)
}

/// Every form value sent under `key` in `request`.
#[allow(dead_code)]
pub fn form_values(request: &wiremock::Request, key: &str) -> Vec<String> {
    url::form_urlencoded::parse(&request.body)
        .filter(|(k, _)| k == key)
        .map(|(_, v)| v.into_owned())
        .collect()
}

/// Requests received by `server` with the given method.
#[allow(dead_code)]
pub async fn requests_with_method(server: &MockServer, method: &str) -> Vec<wiremock::Request> {
    server
        .received_requests()
        .await
        .unwrap_or_default()
        .into_iter()
        .filter(|r| r.method.as_str() == method)
        .collect()
}
