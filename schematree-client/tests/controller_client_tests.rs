//! Integration tests for the controller client against a wiremock server.
//!
//! The client is blocking, so every call runs inside
//! `tokio::task::spawn_blocking` while the mock server runs on the test
//! runtime.

use schematree_client::{ClientError, ControllerClient, ControllerConfig, FetchedSchema};
use schematree_model::SchemaPath;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const SWITCH_SCHEMA: &str = r#"{"nodeType": "LIST", "listElementSchemaNode": {"nodeType": "LIST_ELEMENT", "childNodes": {}}}"#;

async fn mount_login(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/api/v1/auth/login"))
        .and(body_json(json!({"user": "admin", "password": "secret"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "session_cookie": "tok-123",
            "error_message": ""
        })))
        .expect(1)
        .mount(server)
        .await;
}

async fn fetch(server: &MockServer, dotted: &'static str) -> Result<FetchedSchema, ClientError> {
    let config = ControllerConfig::new(server.uri(), "admin", "secret");
    tokio::task::spawn_blocking(move || {
        let client = ControllerClient::connect(&config)?;
        client.schema(&SchemaPath::from_dotted(dotted))
    })
    .await
    .expect("task")
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn fetch_schema_with_session_cookie() {
    let server = MockServer::start().await;
    mount_login(&server).await;

    Mock::given(method("GET"))
        .and(path("/api/v1/schema/controller/core/switch-config"))
        .and(header("cookie", "session_cookie=tok-123"))
        .respond_with(ResponseTemplate::new(200).set_body_string(SWITCH_SCHEMA))
        .expect(1)
        .mount(&server)
        .await;

    let fetched = fetch(&server, "controller.core.switch_config")
        .await
        .expect("fetch");

    assert_eq!(
        fetched.url,
        format!("{}/api/v1/schema/controller/core/switch-config", server.uri())
    );
    assert_eq!(fetched.body, SWITCH_SCHEMA);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn login_rejected_by_status() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/auth/login"))
        .respond_with(ResponseTemplate::new(401).set_body_string("bad credentials"))
        .expect(1)
        .mount(&server)
        .await;

    let err = fetch(&server, "controller").await.unwrap_err();
    match err {
        ClientError::Login { username, reason } => {
            assert_eq!(username, "admin");
            assert!(reason.contains("401"), "{reason}");
            assert!(reason.contains("bad credentials"), "{reason}");
        }
        other => panic!("expected login error, got {other:?}"),
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn login_rejected_in_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": false,
            "error_message": "User name or password is incorrect"
        })))
        .mount(&server)
        .await;

    let err = fetch(&server, "controller").await.unwrap_err();
    assert!(
        matches!(err, ClientError::Login { ref reason, .. } if reason == "User name or password is incorrect"),
        "{err:?}"
    );
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn login_without_cookie() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
        .mount(&server)
        .await;

    let err = fetch(&server, "controller").await.unwrap_err();
    assert!(matches!(err, ClientError::Login { .. }), "{err:?}");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn schema_not_found() {
    let server = MockServer::start().await;
    mount_login(&server).await;

    Mock::given(method("GET"))
        .and(path("/api/v1/schema/controller/no-such-thing"))
        .respond_with(ResponseTemplate::new(404).set_body_string("no such schema path"))
        .expect(1)
        .mount(&server)
        .await;

    let err = fetch(&server, "controller.no_such_thing").await.unwrap_err();
    match err {
        ClientError::Api {
            endpoint,
            status,
            body,
        } => {
            assert!(endpoint.ends_with("/api/v1/schema/controller/no-such-thing"));
            assert_eq!(status, 404);
            assert_eq!(body, "no such schema path");
        }
        other => panic!("expected api error, got {other:?}"),
    }
}

#[test]
fn unreachable_controller() {
    // Bind and release a port so nothing is listening on it.
    let port = std::net::TcpListener::bind("127.0.0.1:0")
        .and_then(|listener| listener.local_addr())
        .expect("bind")
        .port();

    let config = ControllerConfig::new(format!("http://127.0.0.1:{port}"), "admin", "secret");
    let err = ControllerClient::connect(&config).unwrap_err();
    assert!(matches!(err, ClientError::Http { .. }), "{err:?}");
}
