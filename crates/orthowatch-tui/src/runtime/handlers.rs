//! Effect handler implementations.
//!
//! Pure async functions that perform one API call and return the resulting
//! `UiEvent`. The runtime owns spawning and the task lifecycle.

use orthowatch_core::api::{ApiError, ApiErrorKind, AuthApi};
use orthowatch_core::session::Credentials;
use tokio_util::sync::CancellationToken;

use crate::events::UiEvent;

/// Silent session restore: mint an access token from the refresh cookie.
pub async fn bootstrap(api: AuthApi) -> UiEvent {
    UiEvent::BootstrapResult(api.refresh().await)
}

/// Login request. Honors cancellation from the reducer (Esc while
/// submitting); the cancelled result is gated out by task id anyway.
pub async fn login(
    api: AuthApi,
    credentials: Credentials,
    cancel: Option<CancellationToken>,
) -> UiEvent {
    let request = api.login(&credentials);
    let result = match cancel {
        Some(cancel) => {
            tokio::select! {
                () = cancel.cancelled() => {
                    Err(ApiError::new(ApiErrorKind::Transport, "Login cancelled"))
                }
                result = request => result,
            }
        }
        None => request.await,
    };
    UiEvent::LoginResult(result)
}

/// Logout request. Local teardown happens in the reducer regardless of the
/// outcome reported here.
pub async fn logout(api: AuthApi) -> UiEvent {
    UiEvent::LogoutResult(api.logout().await)
}
