//! End-to-end tests for the auth facade against a mock backend.

use std::time::Duration;

use orthowatch_core::api::{ApiClient, AuthApi};
use orthowatch_core::session::{Credentials, Role};
use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn sample_user() -> serde_json::Value {
    json!({
        "id": "u-42",
        "email": "s.patel@stmarys.example",
        "role": "SURGEON",
        "fullName": "Sanjay Patel"
    })
}

fn api_for(server: &MockServer) -> AuthApi {
    let client = ApiClient::new(&server.uri(), Some(Duration::from_secs(5))).unwrap();
    AuthApi::new(client)
}

#[tokio::test]
async fn login_returns_token_and_user() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/auth/login"))
        .and(body_partial_json(json!({
            "email": "s.patel@stmarys.example",
            "password": "hunter22"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "accessToken": "jwt-login",
            "user": sample_user()
        })))
        .mount(&server)
        .await;

    let api = api_for(&server);
    let result = api
        .login(&Credentials {
            email: "s.patel@stmarys.example".to_string(),
            password: "hunter22".to_string(),
        })
        .await
        .unwrap();

    assert_eq!(result.access_token, "jwt-login");
    assert_eq!(result.user.role, Role::Surgeon);
    assert_eq!(result.user.full_name, "Sanjay Patel");
}

#[tokio::test]
async fn bearer_header_follows_token_cell() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/auth/logout"))
        .and(header("Authorization", "Bearer jwt-current"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let api = api_for(&server);
    api.client().set_access_token(Some("jwt-current".to_string()));
    api.logout().await.unwrap();
}

#[tokio::test]
async fn refresh_cookie_round_trip() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/auth/login"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("Set-Cookie", "refresh=rt-1; HttpOnly; Path=/")
                .set_body_json(json!({
                    "accessToken": "jwt-1",
                    "user": sample_user()
                })),
        )
        .mount(&server)
        .await;
    // The refresh endpoint only answers when the cookie set at login
    // comes back with the request.
    Mock::given(method("POST"))
        .and(path("/v1/auth/refresh"))
        .and(header("Cookie", "refresh=rt-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "accessToken": "jwt-2",
            "user": sample_user()
        })))
        .expect(1)
        .mount(&server)
        .await;

    let api = api_for(&server);
    api.login(&Credentials {
        email: "s.patel@stmarys.example".to_string(),
        password: "hunter22".to_string(),
    })
    .await
    .unwrap();

    let refreshed = api.refresh().await.unwrap();
    assert_eq!(refreshed.access_token, "jwt-2");
}

#[tokio::test]
async fn expired_session_is_classified_unauthorized() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/auth/refresh"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({"message": "Refresh token expired"})),
        )
        .mount(&server)
        .await;

    let api = api_for(&server);
    let err = api.refresh().await.unwrap_err();
    assert!(err.is_unauthorized());
    assert_eq!(err.message, "Refresh token expired");
}

#[tokio::test]
async fn error_message_normalization_chain() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/auth/login"))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(json!({"error": "Validation failed"})),
        )
        .mount(&server)
        .await;

    let api = api_for(&server);
    let err = api
        .login(&Credentials {
            email: "x@y.example".to_string(),
            password: "123456".to_string(),
        })
        .await
        .unwrap_err();
    assert!(!err.is_unauthorized());
    assert_eq!(err.message, "Validation failed");
}

#[tokio::test]
async fn html_error_body_falls_back_to_generic_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/auth/login"))
        .respond_with(
            ResponseTemplate::new(502)
                .set_body_string("<html><body>Bad Gateway</body></html>"),
        )
        .mount(&server)
        .await;

    let api = api_for(&server);
    let err = api
        .login(&Credentials {
            email: "x@y.example".to_string(),
            password: "123456".to_string(),
        })
        .await
        .unwrap_err();
    assert_eq!(err.message, "An unexpected error occurred");
}

#[tokio::test]
async fn connection_failure_is_transport_error() {
    // Port 9 (discard) is reliably closed.
    let client = ApiClient::new("http://127.0.0.1:9", Some(Duration::from_secs(1))).unwrap();
    let api = AuthApi::new(client);

    let err = api.refresh().await.unwrap_err();
    assert!(!err.is_unauthorized());
    assert!(!err.message.is_empty());
}
