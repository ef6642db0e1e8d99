//! # API Client
//!
//! Shared HTTP transport for the content API.

use std::sync::Arc;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use shared::{ApiResponse, ErrorBody};

use crate::auth::TokenStore;
use crate::core::config::ClientConfig;
use crate::core::error::{ApiError, Result};
use crate::core::service::ContentApi;

/// HTTP client for the content API.
///
/// One instance is configured once and shared; the underlying
/// `reqwest::Client` pools connections across calls. The token store is
/// injected so auth state never lives in a global.
pub struct ApiClient {
    pub(crate) http: Client,
    config: ClientConfig,
    pub(crate) tokens: Arc<dyn TokenStore>,
}

impl ApiClient {
    /// Create a client with the given configuration and token store.
    ///
    /// The transport sends and accepts JSON, includes cookies with every
    /// request, and times out after 10 seconds to prevent hung consumers.
    pub fn new(config: ClientConfig, tokens: Arc<dyn TokenStore>) -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let http = Client::builder()
            .timeout(std::time::Duration::from_secs(10))
            .default_headers(headers)
            .cookie_store(true)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            http,
            config,
            tokens,
        }
    }

    /// The configured base URL, without a trailing slash.
    pub fn base_url(&self) -> &str {
        self.config.base_url()
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url(), path)
    }

    /// GET `path` with the given query pairs and decode the envelope.
    pub(crate) async fn get_envelope<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<ApiResponse<T>> {
        let mut request = self.http.get(self.url(path));
        if !query.is_empty() {
            request = request.query(query);
        }
        self.execute(request).await
    }

    /// POST `body` as JSON to `path` and decode the envelope.
    pub(crate) async fn post_envelope<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<ApiResponse<T>> {
        self.execute(self.http.post(self.url(path)).json(body)).await
    }

    /// Build a bare POST request for `path`, bypassing the automatic
    /// bearer attachment. Used by logout, which clears the store before
    /// sending and carries the captured token explicitly.
    pub(crate) fn post_request(&self, path: &str) -> reqwest::RequestBuilder {
        self.http.post(self.url(path))
    }

    /// Attach the stored bearer token, send, and interpret the response.
    ///
    /// Single choke point for the auth interceptor: every 401 purges the
    /// token store before the rejection propagates, no matter which
    /// endpoint produced it.
    pub(crate) async fn execute<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<ApiResponse<T>> {
        let request = match self.tokens.load() {
            Some(token) => request.bearer_auth(token),
            None => request,
        };

        let response = request.send().await.map_err(|e| {
            tracing::error!(error = %e, "Request transport failure");
            ApiError::Network(e.to_string())
        })?;

        let status = response.status();

        if status == StatusCode::UNAUTHORIZED {
            self.tokens.clear();
            tracing::warn!("Received 401, cleared stored token");
            return Err(ApiError::AuthExpired);
        }

        if !status.is_success() {
            let body = response.json::<ErrorBody>().await.unwrap_or_default();
            let message = if body.message.is_empty() {
                status
                    .canonical_reason()
                    .unwrap_or("request failed")
                    .to_string()
            } else {
                body.message
            };
            tracing::warn!(status = status.as_u16(), message = %message, "Request rejected");
            return Err(ApiError::Http {
                status: status.as_u16(),
                message,
                errors: body.errors,
            });
        }

        response
            .json::<ApiResponse<T>>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
}

// Implement ContentApi trait for ApiClient
#[async_trait::async_trait]
impl ContentApi for ApiClient {
    async fn get_projects(
        &self,
        filters: &super::content::ProjectFilters,
    ) -> Result<ApiResponse<shared::PaginatedResponse<shared::Project>>> {
        super::content::get_projects(self, filters).await
    }

    async fn get_project(&self, slug: &str) -> Result<ApiResponse<shared::Project>> {
        super::content::get_project(self, slug).await
    }

    async fn get_blog_posts(
        &self,
        filters: &super::content::PostFilters,
    ) -> Result<ApiResponse<shared::PaginatedResponse<shared::BlogPost>>> {
        super::content::get_blog_posts(self, filters).await
    }

    async fn get_blog_post(&self, slug: &str) -> Result<ApiResponse<shared::BlogPost>> {
        super::content::get_blog_post(self, slug).await
    }

    async fn get_categories(&self) -> Result<ApiResponse<Vec<shared::Category>>> {
        super::content::get_categories(self).await
    }

    async fn get_tags(&self) -> Result<ApiResponse<Vec<shared::Tag>>> {
        super::content::get_tags(self).await
    }

    async fn get_team_members(&self) -> Result<ApiResponse<Vec<shared::TeamMember>>> {
        super::team::get_team_members(self).await
    }

    async fn get_partners(&self) -> Result<ApiResponse<Vec<shared::Partner>>> {
        super::team::get_partners(self).await
    }

    async fn get_stats(&self) -> Result<ApiResponse<shared::Stats>> {
        super::stats::get_stats(self).await
    }

    async fn submit_contact(
        &self,
        submission: &shared::ContactSubmission,
    ) -> Result<ApiResponse<shared::ContactReceipt>> {
        super::contact::submit_contact(self, submission).await
    }

    async fn login(&self, email: &str, password: &str) -> Result<ApiResponse<shared::AuthSession>> {
        super::auth::login(self, email, password).await
    }

    async fn logout(&self) -> Result<ApiResponse<()>> {
        super::auth::logout(self).await
    }

    async fn me(&self) -> Result<ApiResponse<shared::AuthUser>> {
        super::auth::me(self).await
    }

    async fn health_check(&self) -> Result<ApiResponse<shared::HealthStatus>> {
        super::stats::health_check(self).await
    }
}
