use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Publication state of a project or post.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PublishStatus {
    Published,
    Draft,
}

/// One label/value pair in a project's ordered metrics list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct KeyMetric {
    pub label: String,
    pub value: String,
}

/// A media attachment on a project (image or video URL).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MediaItem {
    pub id: u64,
    pub url: String,
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
}

/// Project taxonomy entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Category {
    pub id: u64,
    pub name: String,
    pub slug: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_count: Option<u32>,
}

/// Free-form taxonomy entry shared by projects and posts.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Tag {
    pub id: u64,
    pub name: String,
    pub slug: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post_count: Option<u32>,
}

/// A case-study project as returned by the content API.
///
/// `slug` is the only externally addressable key for read paths; `id` is
/// never used to fetch a project.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Project {
    pub id: u64,
    pub title: String,
    pub slug: String,
    pub excerpt: String,
    /// Rich-text body, rendered as-is by the presentation layer.
    pub description: String,
    pub banner_image_url: String,
    pub client: String,
    pub year: u16,
    pub location: String,
    /// Ordered list; the server controls the order, the client preserves it.
    pub key_metrics: Vec<KeyMetric>,
    pub tech_stack: Vec<String>,
    pub status: PublishStatus,
    pub featured: bool,
    pub view_count: u64,
    pub categories: Vec<Category>,
    pub tags: Vec<Tag>,
    pub media: Vec<MediaItem>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn publish_status_uses_lowercase_wire_form() {
        assert_eq!(
            serde_json::to_string(&PublishStatus::Published).unwrap(),
            r#""published""#
        );
        let status: PublishStatus = serde_json::from_str(r#""draft""#).unwrap();
        assert_eq!(status, PublishStatus::Draft);
    }

    #[test]
    fn media_caption_omitted_when_none() {
        let media = MediaItem {
            id: 1,
            url: "https://cdn.example.com/a.jpg".to_string(),
            kind: "image".to_string(),
            caption: None,
        };
        let json = serde_json::to_value(&media).unwrap();
        assert!(json.get("caption").is_none());
    }
}
