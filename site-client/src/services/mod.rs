//! # Services Module
//!
//! External service integrations for the site client. The only integration
//! here is the content API; everything the presentation layer renders flows
//! through it.
//!
//! ```text
//! services/
//! └── api/     - Typed HTTP client for the content API
//!               (projects, posts, taxonomies, team, stats, contact, auth)
//! ```

pub mod api;
