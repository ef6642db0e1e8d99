//! # Content Endpoints
//!
//! Projects, blog posts, and their taxonomies.

use shared::{ApiResponse, BlogPost, Category, PaginatedResponse, Project, Tag};

use super::client::ApiClient;
use crate::core::error::{ApiError, Result};

/// Filters for the project list endpoint.
///
/// Every field is optional; absent filters are omitted from the query
/// string entirely rather than sent as empty values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectFilters {
    pub category: Option<String>,
    pub tag: Option<String>,
    pub year: Option<u16>,
    pub search: Option<String>,
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

impl ProjectFilters {
    pub(crate) fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        if let Some(category) = &self.category {
            query.push(("category", category.clone()));
        }
        if let Some(tag) = &self.tag {
            query.push(("tag", tag.clone()));
        }
        if let Some(year) = self.year {
            query.push(("year", year.to_string()));
        }
        if let Some(search) = &self.search {
            query.push(("search", search.clone()));
        }
        if let Some(page) = self.page {
            query.push(("page", page.to_string()));
        }
        if let Some(per_page) = self.per_page {
            query.push(("per_page", per_page.to_string()));
        }
        query
    }
}

/// Filters for the blog post list endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostFilters {
    pub tag: Option<String>,
    pub search: Option<String>,
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

impl PostFilters {
    pub(crate) fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        if let Some(tag) = &self.tag {
            query.push(("tag", tag.clone()));
        }
        if let Some(search) = &self.search {
            query.push(("search", search.clone()));
        }
        if let Some(page) = self.page {
            query.push(("page", page.to_string()));
        }
        if let Some(per_page) = self.per_page {
            query.push(("per_page", per_page.to_string()));
        }
        query
    }
}

fn require_slug(slug: &str) -> Result<()> {
    if slug.trim().is_empty() {
        return Err(ApiError::Validation("slug must not be empty".to_string()));
    }
    Ok(())
}

/// List projects matching `filters`.
#[tracing::instrument(skip(client), fields(filters = ?filters))]
pub async fn get_projects(
    client: &ApiClient,
    filters: &ProjectFilters,
) -> Result<ApiResponse<PaginatedResponse<Project>>> {
    let start = std::time::Instant::now();

    let result = client
        .get_envelope::<PaginatedResponse<Project>>("/projects", &filters.to_query())
        .await;

    match &result {
        Ok(envelope) => {
            tracing::debug!(
                count = envelope.data.data.len(),
                total = envelope.data.total,
                page = envelope.data.current_page,
                duration_ms = start.elapsed().as_millis(),
                "Projects fetched"
            );
        }
        Err(e) => {
            tracing::warn!(
                error = %e,
                duration_ms = start.elapsed().as_millis(),
                "Project fetch failed"
            );
        }
    }

    result
}

/// Fetch a single project by slug.
pub async fn get_project(client: &ApiClient, slug: &str) -> Result<ApiResponse<Project>> {
    require_slug(slug)?;
    client
        .get_envelope(&format!("/projects/{}", slug), &[])
        .await
}

/// List blog posts matching `filters`.
pub async fn get_blog_posts(
    client: &ApiClient,
    filters: &PostFilters,
) -> Result<ApiResponse<PaginatedResponse<BlogPost>>> {
    client.get_envelope("/posts", &filters.to_query()).await
}

/// Fetch a single blog post by slug.
pub async fn get_blog_post(client: &ApiClient, slug: &str) -> Result<ApiResponse<BlogPost>> {
    require_slug(slug)?;
    client.get_envelope(&format!("/posts/{}", slug), &[]).await
}

/// List all project categories. The response order is whatever the server
/// sent; ordering is presentation's responsibility.
pub async fn get_categories(client: &ApiClient) -> Result<ApiResponse<Vec<Category>>> {
    client.get_envelope("/categories", &[]).await
}

/// List all tags.
pub async fn get_tags(client: &ApiClient) -> Result<ApiResponse<Vec<Tag>>> {
    client.get_envelope("/tags", &[]).await
}
