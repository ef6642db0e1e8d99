//! # Typed Resource Wrappers
//!
//! Thin per-resource constructors over [`Resource`]. Each pairs one client
//! operation with one state machine; all lifecycle logic lives in the
//! generic primitive.

use std::sync::Arc;

use shared::{BlogPost, Category, PaginatedResponse, Project, Stats, TeamMember};

use super::machine::{FallbackPolicy, Resource, ResourceState};
use crate::core::service::ContentApi;
use crate::services::api::content::{PostFilters, ProjectFilters};

/// Project list with filter-driven reloads.
pub struct ProjectsResource {
    api: Arc<dyn ContentApi>,
    inner: Resource<PaginatedResponse<Project>>,
}

impl ProjectsResource {
    pub fn new(api: Arc<dyn ContentApi>) -> Self {
        Self {
            api,
            inner: Resource::new(),
        }
    }

    /// Opt into offline demo mode with an explicit sample dataset.
    pub fn with_fallback(api: Arc<dyn ContentApi>, sample: PaginatedResponse<Project>) -> Self {
        Self {
            api,
            inner: Resource::with_fallback(FallbackPolicy::Sample(sample)),
        }
    }

    /// (Re)load with the given filters. A newer call supersedes any
    /// in-flight one.
    pub fn load(&self, filters: ProjectFilters) {
        let api = Arc::clone(&self.api);
        self.inner.load(async move {
            api.get_projects(&filters).await.map(|envelope| envelope.data)
        });
    }

    pub fn state(&self) -> ResourceState<PaginatedResponse<Project>> {
        self.inner.state()
    }

    pub fn subscribe(&self) -> async_channel::Receiver<()> {
        self.inner.subscribe()
    }
}

/// Blog post list with filter-driven reloads.
pub struct PostsResource {
    api: Arc<dyn ContentApi>,
    inner: Resource<PaginatedResponse<BlogPost>>,
}

impl PostsResource {
    pub fn new(api: Arc<dyn ContentApi>) -> Self {
        Self {
            api,
            inner: Resource::new(),
        }
    }

    pub fn load(&self, filters: PostFilters) {
        let api = Arc::clone(&self.api);
        self.inner.load(async move {
            api.get_blog_posts(&filters).await.map(|envelope| envelope.data)
        });
    }

    pub fn state(&self) -> ResourceState<PaginatedResponse<BlogPost>> {
        self.inner.state()
    }

    pub fn subscribe(&self) -> async_channel::Receiver<()> {
        self.inner.subscribe()
    }
}

/// Category listing (no inputs).
pub struct CategoriesResource {
    api: Arc<dyn ContentApi>,
    inner: Resource<Vec<Category>>,
}

impl CategoriesResource {
    pub fn new(api: Arc<dyn ContentApi>) -> Self {
        Self {
            api,
            inner: Resource::new(),
        }
    }

    pub fn load(&self) {
        let api = Arc::clone(&self.api);
        self.inner
            .load(async move { api.get_categories().await.map(|envelope| envelope.data) });
    }

    pub fn state(&self) -> ResourceState<Vec<Category>> {
        self.inner.state()
    }

    pub fn subscribe(&self) -> async_channel::Receiver<()> {
        self.inner.subscribe()
    }
}

/// Team listing. Arrives unsorted; order for display with
/// `shared::utils::sort_by_display_order`.
pub struct TeamResource {
    api: Arc<dyn ContentApi>,
    inner: Resource<Vec<TeamMember>>,
}

impl TeamResource {
    pub fn new(api: Arc<dyn ContentApi>) -> Self {
        Self {
            api,
            inner: Resource::new(),
        }
    }

    /// Opt into offline demo mode with an explicit sample roster.
    pub fn with_fallback(api: Arc<dyn ContentApi>, sample: Vec<TeamMember>) -> Self {
        Self {
            api,
            inner: Resource::with_fallback(FallbackPolicy::Sample(sample)),
        }
    }

    pub fn load(&self) {
        let api = Arc::clone(&self.api);
        self.inner
            .load(async move { api.get_team_members().await.map(|envelope| envelope.data) });
    }

    pub fn state(&self) -> ResourceState<Vec<TeamMember>> {
        self.inner.state()
    }

    pub fn subscribe(&self) -> async_channel::Receiver<()> {
        self.inner.subscribe()
    }
}

/// Aggregate site counters.
pub struct StatsResource {
    api: Arc<dyn ContentApi>,
    inner: Resource<Stats>,
}

impl StatsResource {
    pub fn new(api: Arc<dyn ContentApi>) -> Self {
        Self {
            api,
            inner: Resource::new(),
        }
    }

    /// Opt into offline demo mode with an explicit sample snapshot.
    pub fn with_fallback(api: Arc<dyn ContentApi>, sample: Stats) -> Self {
        Self {
            api,
            inner: Resource::with_fallback(FallbackPolicy::Sample(sample)),
        }
    }

    pub fn load(&self) {
        let api = Arc::clone(&self.api);
        self.inner
            .load(async move { api.get_stats().await.map(|envelope| envelope.data) });
    }

    pub fn state(&self) -> ResourceState<Stats> {
        self.inner.state()
    }

    pub fn subscribe(&self) -> async_channel::Receiver<()> {
        self.inner.subscribe()
    }
}
