//! # Service Traits
//!
//! Traits for dependency injection, enabling better testability and modularity.

use async_trait::async_trait;
use shared::{
    ApiResponse, AuthSession, AuthUser, BlogPost, Category, ContactReceipt, ContactSubmission,
    HealthStatus, PaginatedResponse, Partner, Project, Stats, Tag, TeamMember,
};

use crate::core::error::Result;
use crate::services::api::content::{PostFilters, ProjectFilters};

/// Trait covering every operation of the typed content client.
///
/// This trait allows for dependency injection and mocking in tests: the
/// resource layer and presentation code depend on `Arc<dyn ContentApi>`
/// rather than the concrete [`crate::ApiClient`].
#[async_trait]
pub trait ContentApi: Send + Sync {
    /// List projects, filtered and paginated.
    async fn get_projects(
        &self,
        filters: &ProjectFilters,
    ) -> Result<ApiResponse<PaginatedResponse<Project>>>;

    /// Fetch a single project by slug.
    async fn get_project(&self, slug: &str) -> Result<ApiResponse<Project>>;

    /// List blog posts, filtered and paginated.
    async fn get_blog_posts(
        &self,
        filters: &PostFilters,
    ) -> Result<ApiResponse<PaginatedResponse<BlogPost>>>;

    /// Fetch a single blog post by slug.
    async fn get_blog_post(&self, slug: &str) -> Result<ApiResponse<BlogPost>>;

    /// List all project categories (unordered).
    async fn get_categories(&self) -> Result<ApiResponse<Vec<Category>>>;

    /// List all tags (unordered).
    async fn get_tags(&self) -> Result<ApiResponse<Vec<Tag>>>;

    /// List team members. The client does not sort; callers order by
    /// `order` ascending for display.
    async fn get_team_members(&self) -> Result<ApiResponse<Vec<TeamMember>>>;

    /// List partner organizations.
    async fn get_partners(&self) -> Result<ApiResponse<Vec<Partner>>>;

    /// Fetch aggregate site counters.
    async fn get_stats(&self) -> Result<ApiResponse<Stats>>;

    /// Submit the contact form. Validated client-side before any network
    /// call; zero HTTP requests are made for invalid input.
    async fn submit_contact(
        &self,
        submission: &ContactSubmission,
    ) -> Result<ApiResponse<ContactReceipt>>;

    /// Authenticate; on success the bearer token is persisted to the
    /// injected token store as a side effect.
    async fn login(&self, email: &str, password: &str) -> Result<ApiResponse<AuthSession>>;

    /// End the session. Always clears the local token, even when the
    /// network call fails.
    async fn logout(&self) -> Result<ApiResponse<()>>;

    /// Fetch the currently authenticated user.
    async fn me(&self) -> Result<ApiResponse<AuthUser>>;

    /// Liveness probe.
    async fn health_check(&self) -> Result<ApiResponse<HealthStatus>>;
}
