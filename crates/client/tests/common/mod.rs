//! Common test utilities for integration tests.
//!
//! # Invariants
//! - Fixtures are loaded from the `fixtures/` directory relative to the crate root
//! - Every client built here points at a wiremock server with `admin`/`changeme`
//!
//! # What this does NOT handle
//! - Mock setup (use wiremock directly in tests)

use secrecy::SecretString;

#[allow(unused_imports)]
pub use splunk_client::testing::load_fixture;

#[allow(unused_imports)]
pub use splunk_client::{ClientError, SplunkClient};
#[allow(unused_imports)]
pub use wiremock::{Mock, MockServer, ResponseTemplate};

/// `Authorization` header value for `admin`/`changeme`.
#[allow(dead_code)]
pub const ADMIN_BASIC_AUTH: &str = "Basic YWRtaW46Y2hhbmdlbWU=";

/// Client authenticated as `admin`/`changeme` against `server`.
#[allow(dead_code)]
pub fn test_client(server: &MockServer) -> SplunkClient {
    SplunkClient::builder()
        .base_url(server.uri())
        .username("admin".to_string())
        .password(SecretString::new("changeme".to_string().into()))
        .build()
        .expect("client should build against the mock server")
}

/// Decoded `application/x-www-form-urlencoded` body of a received request.
#[allow(dead_code)]
pub fn form_pairs(request: &wiremock::Request) -> Vec<(String, String)> {
    url::form_urlencoded::parse(&request.body)
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect()
}

/// Every value sent under `key`.
#[allow(dead_code)]
pub fn form_values(request: &wiremock::Request, key: &str) -> Vec<String> {
    form_pairs(request)
        .into_iter()
        .filter(|(k, _)| k == key)
        .map(|(_, v)| v)
        .collect()
}
