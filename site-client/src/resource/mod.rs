//! # Resource Layer
//!
//! Bridge between the typed client and the rendering layer. One generic
//! request-lifecycle state machine replaces the per-resource boilerplate a
//! hook-per-endpoint design would duplicate.
//!
//! ## State Machine
//!
//! ```text
//! Idle ──load()──> Loading ──ok──────> Ready(T)
//!                     │
//!                     └────err──────> Failed(ApiError)
//!                                      (or Ready(sample) with an opt-in
//!                                       fallback policy)
//! ```
//!
//! ## Stale Responses
//!
//! Each `load` bumps a generation counter; a completion whose generation is
//! no longer current is discarded. Rapid dependency changes (a user typing
//! in a search box) therefore always settle on the last-issued input, even
//! when an earlier request's response arrives later.
//!
//! ## Modules
//!
//! - **[`machine`]**: [`Resource`], [`ResourceState`], [`FallbackPolicy`]
//! - **[`typed`]**: Per-resource convenience wrappers over the primitive
//! - **[`sample`]**: Canned dataset for the opt-in offline demo fallback

pub mod machine;
pub mod sample;
pub mod typed;

pub use machine::{FallbackPolicy, Resource, ResourceState};
pub use typed::{
    CategoriesResource, PostsResource, ProjectsResource, StatsResource, TeamResource,
};
