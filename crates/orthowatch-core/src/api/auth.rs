//! Typed auth endpoints.
//!
//! Thin facade over [`ApiClient`]: each call is one endpoint, one request
//! shape, one response shape. Session state is the caller's concern.

use tracing::info;

use super::client::ApiClient;
use super::error::ApiResult;
use crate::session::{AuthResult, Credentials};

const LOGIN_PATH: &str = "v1/auth/login";
const REFRESH_PATH: &str = "v1/auth/refresh";
const LOGOUT_PATH: &str = "v1/auth/logout";

/// Auth endpoint facade.
#[derive(Debug, Clone)]
pub struct AuthApi {
    client: ApiClient,
}

impl AuthApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Exchanges credentials for an access token and user profile.
    /// The server also sets the HttpOnly refresh cookie on this response.
    pub async fn login(&self, credentials: &Credentials) -> ApiResult<AuthResult> {
        let result: AuthResult = self.client.post_json(LOGIN_PATH, credentials).await?;
        info!(target: "orthowatch::auth", user = %result.user.email, "login succeeded");
        Ok(result)
    }

    /// Attempts to mint a fresh access token from the refresh cookie.
    /// No body: the cookie jar carries the credential.
    pub async fn refresh(&self) -> ApiResult<AuthResult> {
        self.client
            .post_json(REFRESH_PATH, &serde_json::json!({}))
            .await
    }

    /// Tells the server to revoke the refresh token. The response body is
    /// irrelevant; local teardown happens regardless of the outcome.
    pub async fn logout(&self) -> ApiResult<()> {
        self.client.post_empty(LOGOUT_PATH).await
    }

    /// The underlying transport, for token synchronization.
    pub fn client(&self) -> &ApiClient {
        &self.client
    }
}
