//! # Shared Data Transfer Objects Library
//!
//! This library defines the contract between the site client and the content
//! API. All DTOs use JSON serialization via `serde` for API communication.
//!
//! ## Structure
//!
//! - **[`envelope`]**: Response wrappers present on every endpoint
//!   - **[`envelope::ApiResponse`]**: `{success, data, message, errors}`
//!   - **[`envelope::PaginatedResponse`]**: list payload with paging fields
//! - **[`dto`]**: Data Transfer Objects for API communication
//!   - **[`dto::content`]**: Projects, categories, tags, media
//!   - **[`dto::blog`]**: Blog posts
//!   - **[`dto::team`]**: Team members and partners
//!   - **[`dto::stats`]**: Aggregate site counters
//!   - **[`dto::contact`]**: Contact form submission and receipt
//!   - **[`dto::auth`]**: Login, session, and health-check DTOs
//! - **[`utils`]**: Shared helper functions
//!   - **[`utils::sort_by_display_order`]**: Presentation-side team ordering
//!   - **[`utils::display_avatar`]**: Generated-avatar fallback
//!
//! ## Wire Format
//!
//! All DTOs serialize to JSON using the default `serde` behavior:
//! - Field names use **snake_case** in Rust, which maps to **snake_case** in JSON by default
//! - Optional fields are omitted from JSON when `None` (using `#[serde(skip_serializing_if = "Option::is_none")]`)
//! - Timestamps are RFC 3339 strings via `chrono::DateTime<Utc>`
//! - All structs implement both `Serialize` and `Deserialize` for bidirectional communication
//!
//! ## Addressing Invariant
//!
//! Projects and blog posts are externally addressed by `slug`, never by
//! numeric `id`. The `id` field exists on the wire but no read path may use
//! it as a key.

pub mod dto;
pub mod envelope;
pub mod utils;

// Re-export commonly used types for convenience
// Note: Wildcard re-exports are used here since shared is a DTO library
// where all exports are meant to be public API
pub use dto::*;
pub use envelope::*;
pub use utils::*;
