//! Role endpoint tests.
//!
//! # Invariants
//! - Every create and update pins `defaultApp=search`
//! - List settings are sent as repeated keys
//! - Read faults when a required content field is missing

mod common;

use common::*;
use splunk_client::Role;
use wiremock::matchers::{method, path, query_param};

fn role() -> Role {
    Role {
        name: "ops".to_string(),
        search_filter: "host=web*".to_string(),
        indexes_allowed: vec!["main".to_string(), "web".to_string()],
        imported_roles: vec!["user".to_string()],
    }
}

#[tokio::test]
async fn test_create_role() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/services/authorization/roles"))
        .and(query_param("output_mode", "json"))
        .respond_with(ResponseTemplate::new(201).set_body_json(load_fixture("roles/get_role.json")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    client.create_role(&role()).await.unwrap();

    let requests = mock_server.received_requests().await.unwrap();
    let request = &requests[0];
    assert_eq!(form_values(request, "name"), vec!["ops"]);
    assert_eq!(form_values(request, "srchFilter"), vec!["host=web*"]);
    assert_eq!(form_values(request, "defaultApp"), vec!["search"]);
    assert_eq!(form_values(request, "srchIndexesAllowed"), vec!["main", "web"]);
    assert_eq!(form_values(request, "imported_roles"), vec!["user"]);
}

#[tokio::test]
async fn test_get_role() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/services/authorization/roles/ops"))
        .and(query_param("output_mode", "json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(load_fixture("roles/get_role.json")))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    assert_eq!(client.get_role("ops").await.unwrap(), role());
}

#[tokio::test]
async fn test_get_role_missing_indexes_is_lookup_fault() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/services/authorization/roles/ops"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(load_fixture("roles/get_role_missing_indexes.json")),
        )
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let err = client.get_role("ops").await.unwrap_err();
    assert!(
        matches!(err, ClientError::Lookup { ref pointer, .. } if pointer.ends_with("srchIndexesAllowed")),
        "got {err:?}"
    );
}

#[tokio::test]
async fn test_get_role_invalid_json() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/services/authorization/roles/ops"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>proxy error</html>"))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let err = client.get_role("ops").await.unwrap_err();
    assert!(matches!(err, ClientError::InvalidResponse(_)), "got {err:?}");
}

#[tokio::test]
async fn test_update_role_omits_name() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/services/authorization/roles/ops"))
        .respond_with(ResponseTemplate::new(200).set_body_json(load_fixture("roles/get_role.json")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    client.update_role("ops", &role()).await.unwrap();

    let requests = mock_server.received_requests().await.unwrap();
    let request = &requests[0];
    assert!(form_values(request, "name").is_empty());
    assert_eq!(form_values(request, "defaultApp"), vec!["search"]);
}

#[tokio::test]
async fn test_delete_role() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/services/authorization/roles/ops"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    client.delete_role("ops").await.unwrap();
}
