//! # Data Transfer Objects (DTOs)
//!
//! This module contains all data structures exchanged with the content API.
//!
//! ## Module Organization
//!
//! - [`content`] - Projects, categories, tags, and media
//! - [`blog`] - Blog posts
//! - [`team`] - Team members and partners
//! - [`stats`] - Aggregate site counters
//! - [`contact`] - Contact form submission and receipt
//! - [`auth`] - Login, session, and health-check DTOs
//!
//! ## Serialization Format
//!
//! All DTOs use `serde_json` for JSON serialization:
//!
//! - **Field naming**: snake_case (default serde behavior)
//! - **Optional fields**: Omitted when `None` using `#[serde(skip_serializing_if = "Option::is_none")]`
//! - **Enums**: Serialize to lowercase strings using `#[serde(rename_all = "lowercase")]`
//! - **All types**: Implement both `Serialize` and `Deserialize`
//!
//! ## Example JSON Communication
//!
//! ```text
//! GET /api/v1/projects/harvest-vision
//!
//! HTTP/1.1 200 OK
//! Content-Type: application/json
//!
//! {
//!   "success": true,
//!   "data": {
//!     "id": 1,
//!     "title": "Harvest Vision",
//!     "slug": "harvest-vision",
//!     "status": "published",
//!     ...
//!   },
//!   "message": ""
//! }
//! ```

pub mod auth;
pub mod blog;
pub mod contact;
pub mod content;
pub mod stats;
pub mod team;

pub use auth::*;
pub use blog::*;
pub use contact::*;
pub use content::*;
pub use stats::*;
pub use team::*;
