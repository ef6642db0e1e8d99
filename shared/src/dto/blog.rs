use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::content::{PublishStatus, Tag};

/// A blog post as returned by the content API.
///
/// Addressed by `slug` like projects; `content` carries rendered rich HTML.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BlogPost {
    pub id: u64,
    pub title: String,
    pub slug: String,
    pub excerpt: String,
    /// Rich HTML body, rendered as-is by the presentation layer.
    pub content: String,
    pub banner_image_url: String,
    /// Estimated reading time in whole minutes.
    pub reading_time: u16,
    pub status: PublishStatus,
    pub featured: bool,
    pub view_count: u64,
    pub tags: Vec<Tag>,
    pub published_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
