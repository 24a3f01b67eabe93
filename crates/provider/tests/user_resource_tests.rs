//! `splunk_user` lifecycle tests.
//!
//! # Invariants
//! - The password is sent but never read back into state
//! - `force-change-pass` is only sent on update when the password changed

mod common;

use common::*;
use serde_json::json;
use wiremock::matchers::{method, path};

const ITEM: &str = "/services/authentication/users/jdoe";

async fn mount_read(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path(ITEM))
        .respond_with(ResponseTemplate::new(200).set_body_json(load_fixture("users/get_user.json")))
        .mount(server)
        .await;
}

async fn mount_update(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path(ITEM))
        .respond_with(ResponseTemplate::new(200).set_body_json(load_fixture("users/get_user.json")))
        .expect(1)
        .mount(server)
        .await;
}

fn state(password: &str) -> serde_json::Value {
    json!({
        "id": "jdoe",
        "name": "jdoe",
        "password": password,
        "real_name": "Jane Doe",
        "email": "jdoe@example.com",
        "roles": ["power", "user"]
    })
}

#[tokio::test]
async fn test_create_user() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/services/authentication/users"))
        .respond_with(ResponseTemplate::new(201).set_body_json(load_fixture("users/get_user.json")))
        .expect(1)
        .mount(&server)
        .await;
    mount_read(&server).await;

    let provider = test_provider(&server);
    let created = provider
        .create(
            "splunk_user",
            json!({ "name": "jdoe", "password": "Initial#Pass1", "roles": ["power", "user"] }),
        )
        .await
        .unwrap();

    assert_eq!(created["id"], "jdoe");
    assert_eq!(created["email"], "jdoe@example.com");
    assert_eq!(created["real_name"], "Jane Doe");
    assert_eq!(created["roles"], json!(["power", "user"]));
    assert_eq!(created["password"], "Initial#Pass1");

    let posts = requests_with_method(&server, "POST").await;
    assert_eq!(form_values(&posts[0], "force-change-pass"), vec!["true"]);
    assert_eq!(form_values(&posts[0], "roles"), vec!["power", "user"]);
}

#[tokio::test]
async fn test_create_requires_password() {
    let server = MockServer::start().await;
    Mock::given(wiremock::matchers::any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let provider = test_provider(&server);
    let err = provider
        .create("splunk_user", json!({ "name": "jdoe" }))
        .await
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "splunk_user: missing required attribute `password`"
    );
}

#[tokio::test]
async fn test_update_without_password_change() {
    let server = MockServer::start().await;
    mount_update(&server).await;
    mount_read(&server).await;

    let mut next = state("Initial#Pass1");
    next["email"] = json!("jane@example.com");

    let provider = test_provider(&server);
    provider
        .update("splunk_user", state("Initial#Pass1"), next)
        .await
        .unwrap();

    let posts = requests_with_method(&server, "POST").await;
    assert!(form_values(&posts[0], "force-change-pass").is_empty());
    assert_eq!(form_values(&posts[0], "email"), vec!["jane@example.com"]);
    assert!(form_values(&posts[0], "name").is_empty());
}

#[tokio::test]
async fn test_update_with_password_change() {
    let server = MockServer::start().await;
    mount_update(&server).await;
    mount_read(&server).await;

    let provider = test_provider(&server);
    let updated = provider
        .update("splunk_user", state("Initial#Pass1"), state("Rotated#Pass2"))
        .await
        .unwrap();

    let posts = requests_with_method(&server, "POST").await;
    assert_eq!(form_values(&posts[0], "force-change-pass"), vec!["true"]);
    assert_eq!(form_values(&posts[0], "password"), vec!["Rotated#Pass2"]);
    assert_eq!(updated["password"], "Rotated#Pass2");
}

#[tokio::test]
async fn test_read_missing_email_is_lookup_fault() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(ITEM))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(load_fixture("users/get_user_missing_email.json")),
        )
        .mount(&server)
        .await;

    let provider = test_provider(&server);
    let err = provider
        .read("splunk_user", state("x"))
        .await
        .unwrap_err();
    assert!(
        matches!(err, ProviderError::Client(splunk_client::ClientError::Lookup { .. })),
        "got {err:?}"
    );
}

#[tokio::test]
async fn test_read_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(ITEM))
        .respond_with(ResponseTemplate::new(404).set_body_json(load_fixture("errors/not_found.json")))
        .mount(&server)
        .await;

    let provider = test_provider(&server);
    let err = provider
        .read("splunk_user", state("x"))
        .await
        .unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_import_user() {
    let server = MockServer::start().await;
    mount_read(&server).await;

    let provider = test_provider(&server);
    let imported = provider.import("splunk_user", "jdoe").await.unwrap();

    assert_eq!(imported["id"], "jdoe");
    assert_eq!(imported["name"], "jdoe");
    assert!(imported.get("password").is_none());
}

#[tokio::test]
async fn test_delete_user() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path(ITEM))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let provider = test_provider(&server);
    provider
        .delete("splunk_user", state("x"))
        .await
        .unwrap();
}

#[tokio::test]
async fn test_delete_without_id() {
    let server = MockServer::start().await;
    let provider = test_provider(&server);
    let err = provider
        .delete("splunk_user", json!({ "name": "jdoe" }))
        .await
        .unwrap_err();
    assert!(matches!(err, ProviderError::MissingId { .. }));
}
