//! # Content API Client Module
//!
//! HTTP client for the site's content API. Handles projects, blog posts,
//! taxonomies, team, stats, contact submissions, and authentication.
//!
//! ## Module Structure
//!
//! ```text
//! api/
//! ├── mod.rs      - Module exports and documentation
//! ├── client.rs   - ApiClient struct and shared transport
//! ├── content.rs  - Projects, posts, categories, tags (+ filters)
//! ├── team.rs     - Team members and partners
//! ├── stats.rs    - Aggregate counters and health check
//! ├── contact.rs  - Contact form submission
//! └── auth.rs     - Login, logout, current user
//! ```
//!
//! ## Transport Behavior
//!
//! Every request flows through the same path in `client.rs`: the stored
//! bearer token (if any) is attached, a 401 response purges that token and
//! surfaces [`crate::ApiError::AuthExpired`], any other non-2xx status
//! surfaces the server's own message, and transport failures surface as
//! [`crate::ApiError::Network`].

pub mod auth;
pub mod client;
pub mod contact;
pub mod content;
pub mod stats;
pub mod team;

pub use client::ApiClient;
pub use content::{PostFilters, ProjectFilters};
