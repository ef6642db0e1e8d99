//! # Site Content API Client - Library Root
//!
//! Typed data-access layer for the Novaterra marketing site. This crate is
//! the only code path that knows the content API's REST paths and DTO
//! shapes; presentation code goes through it exclusively.
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │              site-client (this crate)                  │
//! ├────────────────────────────────────────────────────────┤
//! │  resource   - Request-lifecycle state machine          │
//! │  services   - Typed REST methods per API area          │
//! │  auth       - Token store + bearer interceptor         │
//! │  core       - Errors, config, service trait            │
//! │  utils      - Pre-flight form validation               │
//! └────────────────────────────────────────────────────────┘
//!          │ HTTP/JSON (reqwest)
//!          ▼
//! ┌─────────────────────┐
//! │  Content API        │
//! │  (/api/v1, remote)  │
//! └─────────────────────┘
//! ```
//!
//! ## Module Structure
//!
//! - **core**: Foundational abstractions
//!   - `error`: the [`ApiError`] taxonomy and `Result<T>` alias
//!   - `config`: environment-driven [`ClientConfig`]
//!   - `service`: the [`ContentApi`] trait for dependency injection
//!
//! - **auth**: Injected token storage
//!   - [`TokenStore`] trait plus in-memory and file-backed implementations
//!   - The transport attaches `Authorization: Bearer` from the store and
//!     purges it on HTTP 401
//!
//! - **services**: The typed client
//!   - `api::client`: shared [`ApiClient`] transport
//!   - `api::{content, team, stats, contact, auth}`: one module per API area
//!
//! - **resource**: Consumer layer
//!   - [`Resource`]: generic Idle → Loading → Ready/Failed state machine
//!     with a stale-response generation guard
//!   - Typed wrappers per resource plus an opt-in sample-data fallback
//!
//! - **utils**: Input validation performed before any network call
//!
//! ## Error Handling
//!
//! All fallible operations return [`ApiError`], which keeps network
//! failures, HTTP rejections, auth expiry, and pre-flight validation
//! distinguishable so callers can choose the right recovery UX.
//!
//! ## Testing
//!
//! Unit tests live in `#[cfg(test)]` modules next to the code; the
//! integration suite in `tests/` boots the workspace mock server on a
//! random port and drives this client over real HTTP.

pub mod auth;
pub mod core;
pub mod resource;
pub mod services;
pub mod utils;

// Re-export commonly used types for convenience
pub use auth::{FileTokenStore, MemoryTokenStore, TokenStore};
pub use resource::{FallbackPolicy, Resource, ResourceState};
pub use self::core::{ApiError, ClientConfig, ContentApi, Result};
pub use services::api::ApiClient;
