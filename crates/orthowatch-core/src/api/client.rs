//! Shared HTTP transport.
//!
//! One configured `reqwest::Client` for the whole process: persistent cookie
//! store (the refresh token lives in an HttpOnly cookie the rest of the code
//! never sees), request timeout from config, and bearer injection from a
//! shared token cell. Callers get normalized `ApiError`s; nothing here
//! performs navigation or touches session state.

use std::sync::{Arc, RwLock};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use super::error::{ApiError, ApiResult};
use super::USER_AGENT;

/// HTTP client with base URL, cookie jar, and bearer token injection.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
    access_token: Arc<RwLock<Option<String>>>,
}

impl ApiClient {
    /// Builds a client for the given API base URL.
    ///
    /// A trailing slash is enforced on the base so joins append instead of
    /// replacing the last path segment.
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self> {
        let mut base = base_url.trim().to_string();
        if !base.ends_with('/') {
            base.push('/');
        }
        let base_url =
            Url::parse(&base).with_context(|| format!("Invalid API base URL: {base_url}"))?;

        let mut builder = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .cookie_store(true);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().context("Failed to build HTTP client")?;

        Ok(Self {
            http,
            base_url,
            access_token: Arc::new(RwLock::new(None)),
        })
    }

    /// Replaces the bearer token attached to subsequent requests.
    /// `None` drops the Authorization header entirely.
    pub fn set_access_token(&self, token: Option<String>) {
        if let Ok(mut slot) = self.access_token.write() {
            *slot = token;
        }
    }

    /// Returns a copy of the current bearer token, if any.
    pub fn access_token(&self) -> Option<String> {
        self.access_token.read().ok().and_then(|slot| slot.clone())
    }

    /// POSTs a JSON body to a path relative to the base URL and parses the
    /// JSON response.
    pub async fn post_json<B, T>(&self, path: &str, body: &B) -> ApiResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self.post_raw(path, Some(body)).await?;
        response
            .json::<T>()
            .await
            .map_err(|err| ApiError::parse(format!("Failed to parse response: {err}")))
    }

    /// POSTs without a body and discards the response body.
    pub async fn post_empty(&self, path: &str) -> ApiResult<()> {
        self.post_raw::<()>(path, None).await?;
        Ok(())
    }

    async fn post_raw<B>(
        &self,
        path: &str,
        body: Option<&B>,
    ) -> ApiResult<reqwest::Response>
    where
        B: Serialize + ?Sized,
    {
        let url = self
            .base_url
            .join(path.trim_start_matches('/'))
            .map_err(|err| ApiError::parse(format!("Invalid request path {path}: {err}")))?;

        let mut request = self.http.post(url.clone());
        if let Some(token) = self.access_token() {
            request = request.bearer_auth(token);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        debug!(target: "orthowatch::api", %url, "POST");

        let response = request.send().await.map_err(|err| ApiError::transport(&err))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            debug!(target: "orthowatch::api", %url, status = status.as_u16(), "request failed");
            return Err(ApiError::from_status(status.as_u16(), &body));
        }

        Ok(response)
    }
}
