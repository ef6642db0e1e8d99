//! # Core Abstractions
//!
//! Core traits, configuration, and error types for the client.
//!
//! ## Modules
//!
//! - **[`error`]**: The [`ApiError`] taxonomy and `Result<T>` alias
//! - **[`config`]**: Environment-driven [`ClientConfig`]
//! - **[`service`]**: The [`ContentApi`] trait for dependency injection
//!
//! ## Dependency Injection
//!
//! The service trait enables swapping the real client for a test double:
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use site_client::{ApiClient, ClientConfig, ContentApi, MemoryTokenStore};
//!
//! // In production: use the real implementation
//! let api: Arc<dyn ContentApi> = Arc::new(ApiClient::new(
//!     ClientConfig::from_env(),
//!     Arc::new(MemoryTokenStore::new()),
//! ));
//! ```

pub mod config;
pub mod error;
pub mod service;

// Re-export commonly used types for convenience
pub use config::ClientConfig;
pub use error::{ApiError, Result};
pub use service::ContentApi;
