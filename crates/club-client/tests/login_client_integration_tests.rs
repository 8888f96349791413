//! Integration tests for the login client and flow using a wiremock endpoint

use club_auth::TokenValidator;
use club_client::{
    ClientError, HttpLoginClient, LoginApi, LoginError, LoginFlow, LoginForm, LoginState,
    messages,
};
use club_core::UserRole;
use club_session::{MemoryStorage, SessionProvider, SessionStorage};

use std::time::Duration;

use serde_json::json;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_json, header, method, path},
};

fn client(server: &MockServer) -> HttpLoginClient {
    HttpLoginClient::new(&server.uri(), "/api/login", Duration::from_secs(5)).unwrap()
}

fn form() -> LoginForm {
    LoginForm::new("test@example.com", "password123")
}

fn success_body() -> serde_json::Value {
    json!({
        "token": "fake-token",
        "user": {
            "id": "1",
            "name": "Test User",
            "email": "test@example.com",
            "role": "admin"
        }
    })
}

#[tokio::test]
async fn test_login_posts_json_credentials() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/login"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({
            "email": "test@example.com",
            "password": "password123"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(success_body()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let response = client(&mock_server).login(&form()).await.unwrap();

    assert_eq!(response.token, "fake-token");
    assert_eq!(response.user.role, UserRole::Admin);
}

#[tokio::test]
async fn test_login_non_success_status_is_rejection() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/login"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&mock_server)
        .await;

    let result = client(&mock_server).login(&form()).await;

    assert!(matches!(
        result,
        Err(ClientError::Rejected { status: 401, .. })
    ));
}

#[tokio::test]
async fn test_login_server_error_is_rejection() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/login"))
        .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
        .mount(&mock_server)
        .await;

    let result = client(&mock_server).login(&form()).await;

    assert!(result.unwrap_err().is_rejection());
}

#[tokio::test]
async fn test_login_malformed_success_body_is_json_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "token": "fake-token" })))
        .mount(&mock_server)
        .await;

    let result = client(&mock_server).login(&form()).await;

    assert!(matches!(result, Err(ClientError::Json { .. })));
}

#[tokio::test]
async fn test_login_timeout_is_http_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/login"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(success_body())
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&mock_server)
        .await;

    let client =
        HttpLoginClient::new(&mock_server.uri(), "/api/login", Duration::from_millis(200))
            .unwrap();
    let result = client.login(&form()).await;

    assert!(matches!(result, Err(ClientError::Http { .. })));
}

#[tokio::test]
async fn test_login_unreachable_server_is_http_error() {
    let client =
        HttpLoginClient::new("http://127.0.0.1:9", "/api/login", Duration::from_secs(2)).unwrap();

    let result = client.login(&form()).await;

    assert!(matches!(result, Err(ClientError::Http { .. })));
}

#[test]
fn test_login_url_trailing_slash_trimmed() {
    let client =
        HttpLoginClient::new("http://localhost:3000/", "/api/login", Duration::from_secs(1))
            .unwrap();

    assert_eq!(client.login_url, "http://localhost:3000/api/login");
}

// =============================================================================
// Flow end to end
// =============================================================================

#[tokio::test]
async fn test_flow_success_persists_record_and_redirects() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(success_body()))
        .mount(&mock_server)
        .await;

    let storage = MemoryStorage::new();
    let mut provider = SessionProvider::new(storage.clone(), TokenValidator::unverified(), "auth");
    provider.restore();
    let mut flow = LoginFlow::new(client(&mock_server), 6);

    let target = flow
        .submit(&form(), &mut provider, Some("/admin"))
        .await
        .unwrap();

    assert_eq!(target, "/admin");
    let raw = storage.get("auth").unwrap().unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(value["token"], "fake-token");
    assert!(provider.session().is_authenticated);
}

#[tokio::test]
async fn test_flow_rejection_shows_invalid_credentials() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/login"))
        .respond_with(ResponseTemplate::new(400))
        .mount(&mock_server)
        .await;

    let storage = MemoryStorage::new();
    let mut provider = SessionProvider::new(storage.clone(), TokenValidator::unverified(), "auth");
    provider.restore();
    let mut flow = LoginFlow::new(client(&mock_server), 6);

    let err = flow.submit(&form(), &mut provider, None).await.unwrap_err();

    assert!(matches!(err, LoginError::AuthFailure { .. }));
    assert_eq!(
        flow.state(),
        &LoginState::Failed {
            message: messages::INVALID_CREDENTIALS.to_string()
        }
    );
    assert!(storage.is_empty());
}

#[tokio::test]
async fn test_flow_network_failure_shows_server_unreachable() {
    let storage = MemoryStorage::new();
    let mut provider = SessionProvider::new(storage.clone(), TokenValidator::unverified(), "auth");
    provider.restore();
    let api =
        HttpLoginClient::new("http://127.0.0.1:9", "/api/login", Duration::from_secs(2)).unwrap();
    let mut flow = LoginFlow::new(api, 6);

    let err = flow.submit(&form(), &mut provider, None).await.unwrap_err();

    assert!(matches!(err, LoginError::Transport { .. }));
    assert_eq!(err.user_message(), messages::SERVER_UNREACHABLE);
    assert!(storage.is_empty());
    assert!(!provider.session().is_authenticated);
}
