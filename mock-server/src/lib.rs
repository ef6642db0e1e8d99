//! # Mock Content API
//!
//! Axum server implementing the content API surface consumed by
//! `site-client`, backed by a canned catalog. Used two ways:
//!
//! - as a binary (`cargo run -p mock-server`) for local development
//! - as a library from integration tests, which bind it to a random port
//!   via [`run`]
//!
//! Response shapes match the production envelope exactly:
//! `{success, data, message, errors}`, with list payloads nested in the
//! pagination envelope.

pub mod data;

use std::collections::HashSet;
use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::header::AUTHORIZATION;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::{Duration, Utc};
use serde::Deserialize;
use shared::{
    ApiResponse, AuthSession, AuthUser, BlogPost, Category, ContactReceipt, ContactSubmission,
    HealthStatus, PaginatedResponse, Partner, Project, Stats, Tag, TeamMember,
};
use tokio::net::TcpListener;
use tokio::sync::RwLock;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use uuid::Uuid;

/// Demo credentials accepted by `/auth/login`.
pub const DEMO_EMAIL: &str = "ada@novaterra.example";
pub const DEMO_PASSWORD: &str = "demo-password";

type Rejection = (StatusCode, Json<ApiResponse<()>>);

#[derive(Clone)]
pub struct AppState {
    catalog: Arc<data::Catalog>,
    sessions: Arc<RwLock<HashSet<String>>>,
}

/// Build the router with a freshly seeded catalog.
pub fn app() -> Router {
    let state = AppState {
        catalog: Arc::new(data::Catalog::seed()),
        sessions: Arc::new(RwLock::new(HashSet::new())),
    };

    let api = Router::new()
        .route("/health", get(health))
        .route("/stats", get(stats))
        .route("/projects", get(list_projects))
        .route("/projects/:slug", get(get_project))
        .route("/posts", get(list_posts))
        .route("/posts/:slug", get(get_post))
        .route("/categories", get(categories))
        .route("/tags", get(tags))
        .route("/team", get(team))
        .route("/partners", get(partners))
        .route("/contact", post(submit_contact))
        .route("/auth/login", post(login))
        .route("/auth/logout", post(logout))
        .route("/auth/me", get(me));

    Router::new()
        .nest("/api/v1", api)
        .layer(TraceLayer::new_for_http())
        // Development server: the real deployment pins origins at the edge
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Serve on an already-bound listener. Tests bind to port 0 and pass the
/// listener in, mirroring production startup in `main.rs`.
pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

fn not_found(what: &str) -> Rejection {
    (
        StatusCode::NOT_FOUND,
        Json(ApiResponse::error(format!("{} not found", what), None)),
    )
}

fn unauthorized() -> Rejection {
    (
        StatusCode::UNAUTHORIZED,
        Json(ApiResponse::error("Unauthenticated", None)),
    )
}

fn bearer(headers: &HeaderMap) -> Option<String> {
    headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(str::to_string)
}

fn paginate<T: Clone>(items: &[T], page: u32, per_page: u32) -> PaginatedResponse<T> {
    let per_page = per_page.clamp(1, 100);
    let total = items.len() as u64;
    let last_page = ((total.max(1) + per_page as u64 - 1) / per_page as u64) as u32;
    let page = page.clamp(1, last_page);
    let start = ((page - 1) * per_page) as usize;
    let data = items
        .iter()
        .skip(start)
        .take(per_page as usize)
        .cloned()
        .collect();

    PaginatedResponse {
        data,
        current_page: page,
        last_page,
        per_page,
        total,
    }
}

// ==================== CONTENT ====================

#[derive(Debug, Deserialize)]
struct ProjectQuery {
    category: Option<String>,
    tag: Option<String>,
    year: Option<u16>,
    search: Option<String>,
    page: Option<u32>,
    per_page: Option<u32>,
}

async fn list_projects(
    State(state): State<AppState>,
    Query(query): Query<ProjectQuery>,
) -> Json<ApiResponse<PaginatedResponse<Project>>> {
    let matches: Vec<Project> = state
        .catalog
        .projects
        .iter()
        .filter(|p| match &query.category {
            Some(slug) => p.categories.iter().any(|c| &c.slug == slug),
            None => true,
        })
        .filter(|p| match &query.tag {
            Some(slug) => p.tags.iter().any(|t| &t.slug == slug),
            None => true,
        })
        .filter(|p| match query.year {
            Some(year) => p.year == year,
            None => true,
        })
        .filter(|p| match &query.search {
            Some(needle) => {
                let needle = needle.to_lowercase();
                p.title.to_lowercase().contains(&needle)
                    || p.excerpt.to_lowercase().contains(&needle)
            }
            None => true,
        })
        .cloned()
        .collect();

    tracing::debug!(matched = matches.len(), "Project list query");

    Json(ApiResponse::ok(paginate(
        &matches,
        query.page.unwrap_or(1),
        query.per_page.unwrap_or(10),
    )))
}

async fn get_project(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<ApiResponse<Project>>, Rejection> {
    state
        .catalog
        .projects
        .iter()
        .find(|p| p.slug == slug)
        .cloned()
        .map(|p| Json(ApiResponse::ok(p)))
        .ok_or_else(|| not_found("Project"))
}

#[derive(Debug, Deserialize)]
struct PostQuery {
    tag: Option<String>,
    search: Option<String>,
    page: Option<u32>,
    per_page: Option<u32>,
}

async fn list_posts(
    State(state): State<AppState>,
    Query(query): Query<PostQuery>,
) -> Json<ApiResponse<PaginatedResponse<BlogPost>>> {
    let matches: Vec<BlogPost> = state
        .catalog
        .posts
        .iter()
        .filter(|p| match &query.tag {
            Some(slug) => p.tags.iter().any(|t| &t.slug == slug),
            None => true,
        })
        .filter(|p| match &query.search {
            Some(needle) => {
                let needle = needle.to_lowercase();
                p.title.to_lowercase().contains(&needle)
                    || p.excerpt.to_lowercase().contains(&needle)
            }
            None => true,
        })
        .cloned()
        .collect();

    Json(ApiResponse::ok(paginate(
        &matches,
        query.page.unwrap_or(1),
        query.per_page.unwrap_or(10),
    )))
}

async fn get_post(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<ApiResponse<BlogPost>>, Rejection> {
    state
        .catalog
        .posts
        .iter()
        .find(|p| p.slug == slug)
        .cloned()
        .map(|p| Json(ApiResponse::ok(p)))
        .ok_or_else(|| not_found("Post"))
}

async fn categories(State(state): State<AppState>) -> Json<ApiResponse<Vec<Category>>> {
    Json(ApiResponse::ok(state.catalog.categories.clone()))
}

async fn tags(State(state): State<AppState>) -> Json<ApiResponse<Vec<Tag>>> {
    Json(ApiResponse::ok(state.catalog.tags.clone()))
}

async fn team(State(state): State<AppState>) -> Json<ApiResponse<Vec<TeamMember>>> {
    // Served in insertion order deliberately; display ordering is the
    // caller's responsibility.
    Json(ApiResponse::ok(state.catalog.team.clone()))
}

async fn partners(State(state): State<AppState>) -> Json<ApiResponse<Vec<Partner>>> {
    Json(ApiResponse::ok(state.catalog.partners.clone()))
}

// ==================== STATS / HEALTH ====================

async fn stats(State(state): State<AppState>) -> Json<ApiResponse<Stats>> {
    Json(ApiResponse::ok(state.catalog.stats()))
}

async fn health() -> Json<ApiResponse<HealthStatus>> {
    Json(ApiResponse::ok(HealthStatus {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: Utc::now(),
    }))
}

// ==================== CONTACT ====================

async fn submit_contact(
    Json(submission): Json<ContactSubmission>,
) -> Result<Json<ApiResponse<ContactReceipt>>, Rejection> {
    let mut errors = serde_json::Map::new();
    if submission.name.trim().is_empty() {
        errors.insert("name".to_string(), "Name is required".into());
    }
    if !submission.email.contains('@') {
        errors.insert("email".to_string(), "Invalid email address".into());
    }
    if submission.subject.trim().is_empty() {
        errors.insert("subject".to_string(), "Subject is required".into());
    }
    if submission.message.trim().is_empty() {
        errors.insert("message".to_string(), "Message is required".into());
    }

    if !errors.is_empty() {
        return Err((
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ApiResponse::error(
                "Submission rejected",
                Some(serde_json::Value::Object(errors)),
            )),
        ));
    }

    let reference_id = format!("NV-{}", &Uuid::new_v4().simple().to_string()[..8]);
    tracing::info!(reference_id = %reference_id, "Contact submission received");

    Ok(Json(ApiResponse::ok_with_message(
        ContactReceipt {
            reference_id,
            message: "Thanks for reaching out. We will reply within two business days."
                .to_string(),
        },
        "Submission received",
    )))
}

// ==================== AUTH ====================

async fn login(
    State(state): State<AppState>,
    Json(request): Json<shared::LoginRequest>,
) -> Result<Json<ApiResponse<AuthSession>>, Rejection> {
    if request.email != DEMO_EMAIL || request.password != DEMO_PASSWORD {
        tracing::warn!(email = %request.email, "Rejected login");
        return Err(unauthorized());
    }

    let token = format!("demo-{}", Uuid::new_v4().simple());
    state.sessions.write().await.insert(token.clone());

    Ok(Json(ApiResponse::ok_with_message(
        AuthSession {
            user: demo_user(),
            token,
            expires_at: Utc::now() + Duration::hours(24),
        },
        "Login successful",
    )))
}

async fn logout(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Json<ApiResponse<()>> {
    if let Some(token) = bearer(&headers) {
        state.sessions.write().await.remove(&token);
    }
    Json(ApiResponse::ok_with_message((), "Logged out"))
}

async fn me(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<ApiResponse<AuthUser>>, Rejection> {
    let token = bearer(&headers).ok_or_else(unauthorized)?;
    if !state.sessions.read().await.contains(&token) {
        return Err(unauthorized());
    }
    Ok(Json(ApiResponse::ok(demo_user())))
}

fn demo_user() -> AuthUser {
    AuthUser {
        id: 1,
        name: "Ada Okafor".to_string(),
        email: DEMO_EMAIL.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paginate_splits_pages() {
        let items: Vec<u32> = (1..=23).collect();
        let page = paginate(&items, 1, 10);
        assert_eq!(page.data.len(), 10);
        assert_eq!(page.last_page, 3);
        assert_eq!(page.total, 23);

        let last = paginate(&items, 3, 10);
        assert_eq!(last.data, vec![21, 22, 23]);
    }

    #[test]
    fn paginate_clamps_out_of_range_page() {
        let items: Vec<u32> = (1..=5).collect();
        let page = paginate(&items, 99, 10);
        assert_eq!(page.current_page, 1);
        assert_eq!(page.data.len(), 5);
    }

    #[test]
    fn paginate_handles_empty_input() {
        let items: Vec<u32> = Vec::new();
        let page = paginate(&items, 1, 10);
        assert!(page.data.is_empty());
        assert_eq!(page.last_page, 1);
        assert_eq!(page.total, 0);
    }
}
