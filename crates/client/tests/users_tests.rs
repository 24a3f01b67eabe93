//! User endpoint tests.
//!
//! # Invariants
//! - Create always forces a password change on first login
//! - Update only forces a password change when asked to
//! - Read faults when a required content field is missing

mod common;

use common::*;
use secrecy::SecretString;
use splunk_client::UserParams;
use wiremock::matchers::{method, path, query_param};

fn params() -> UserParams {
    UserParams {
        name: "jdoe".to_string(),
        password: SecretString::new("Initial#Pass1".to_string().into()),
        real_name: "Jane Doe".to_string(),
        email: "jdoe@example.com".to_string(),
        roles: vec!["power".to_string(), "user".to_string()],
    }
}

#[tokio::test]
async fn test_create_user() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/services/authentication/users"))
        .and(query_param("output_mode", "json"))
        .respond_with(ResponseTemplate::new(201).set_body_json(load_fixture("users/get_user.json")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    client.create_user(&params()).await.unwrap();

    let requests = mock_server.received_requests().await.unwrap();
    let request = &requests[0];
    assert_eq!(form_values(request, "name"), vec!["jdoe"]);
    assert_eq!(form_values(request, "password"), vec!["Initial#Pass1"]);
    assert_eq!(form_values(request, "email"), vec!["jdoe@example.com"]);
    assert_eq!(form_values(request, "realname"), vec!["Jane Doe"]);
    assert_eq!(form_values(request, "force-change-pass"), vec!["true"]);
    assert_eq!(form_values(request, "roles"), vec!["power", "user"]);
}

#[tokio::test]
async fn test_get_user() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/services/authentication/users/jdoe"))
        .and(query_param("output_mode", "json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(load_fixture("users/get_user.json")))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let user = client.get_user("jdoe").await.unwrap();

    assert_eq!(user.name, "jdoe");
    assert_eq!(user.email, "jdoe@example.com");
    assert_eq!(user.real_name, "Jane Doe");
    assert_eq!(user.roles, vec!["power", "user"]);
}

#[tokio::test]
async fn test_get_user_missing_email_is_lookup_fault() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/services/authentication/users/jdoe"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(load_fixture("users/get_user_missing_email.json")),
        )
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let err = client.get_user("jdoe").await.unwrap_err();
    assert!(
        matches!(err, ClientError::Lookup { ref pointer, .. } if pointer == "/entry/0/content/email"),
        "got {err:?}"
    );
}

#[tokio::test]
async fn test_update_user_without_password_change() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/services/authentication/users/jdoe"))
        .respond_with(ResponseTemplate::new(200).set_body_json(load_fixture("users/get_user.json")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    client.update_user("jdoe", &params(), false).await.unwrap();

    let requests = mock_server.received_requests().await.unwrap();
    let request = &requests[0];
    assert!(form_values(request, "name").is_empty());
    assert!(form_values(request, "force-change-pass").is_empty());
    assert_eq!(form_values(request, "roles"), vec!["power", "user"]);
}

#[tokio::test]
async fn test_update_user_with_password_change() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/services/authentication/users/jdoe"))
        .respond_with(ResponseTemplate::new(200).set_body_json(load_fixture("users/get_user.json")))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    client.update_user("jdoe", &params(), true).await.unwrap();

    let requests = mock_server.received_requests().await.unwrap();
    assert_eq!(form_values(&requests[0], "force-change-pass"), vec!["true"]);
}

#[tokio::test]
async fn test_delete_user() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/services/authentication/users/jdoe"))
        .and(query_param("output_mode", "json"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    client.delete_user("jdoe").await.unwrap();
}

#[tokio::test]
async fn test_delete_missing_user_reports_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/services/authentication/users/ghost"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(load_fixture("errors/not_found.json")),
        )
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let err = client.delete_user("ghost").await.unwrap_err();
    assert!(err.is_not_found());
    assert!(err.to_string().contains("Could not find object"));
}
