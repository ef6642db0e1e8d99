//! # Authentication Endpoints
//!
//! Login, logout, and current-user lookup. Token persistence side effects
//! live here and in the transport's 401 handling; nothing else touches the
//! store.

use shared::{ApiResponse, AuthSession, AuthUser, LoginRequest};

use super::client::ApiClient;
use crate::core::error::Result;

/// Authenticate with email and password.
///
/// On success the session token is persisted to the injected store —
/// exactly one write. A 401 from bad credentials clears any stale token
/// via the transport's interceptor before the error propagates.
#[tracing::instrument(skip(client, password), fields(email = %email))]
pub async fn login(
    client: &ApiClient,
    email: &str,
    password: &str,
) -> Result<ApiResponse<AuthSession>> {
    tracing::info!("Attempting login");
    let start = std::time::Instant::now();

    let request = LoginRequest {
        email: email.to_string(),
        password: password.to_string(),
    };

    let result = client
        .post_envelope::<AuthSession, _>("/auth/login", &request)
        .await;

    match &result {
        Ok(envelope) => {
            client.tokens.store(&envelope.data.token);
            tracing::info!(
                duration_ms = start.elapsed().as_millis(),
                "Login successful"
            );
        }
        Err(e) => {
            tracing::warn!(
                error = %e,
                duration_ms = start.elapsed().as_millis(),
                "Login failed"
            );
        }
    }

    result
}

/// End the current session.
///
/// The local token is cleared before the network call is attempted, so
/// logout is effective locally regardless of server reachability. The
/// captured token still rides along so the server can invalidate the
/// session, and the network outcome propagates for callers that want it.
pub async fn logout(client: &ApiClient) -> Result<ApiResponse<()>> {
    let token = client.tokens.load();
    client.tokens.clear();
    tracing::info!("Cleared local session");

    let mut request = client.post_request("/auth/logout");
    if let Some(token) = token {
        request = request.bearer_auth(token);
    }
    client.execute::<()>(request).await
}

/// Fetch the currently authenticated user.
pub async fn me(client: &ApiClient) -> Result<ApiResponse<AuthUser>> {
    client.get_envelope("/auth/me", &[]).await
}
