use serde::{Deserialize, Serialize};

/// A team member profile.
///
/// `avatar` may be an empty string, in which case the presentation layer
/// falls back to a generated avatar (see `utils::display_avatar`). `order`
/// is the ascending display sort key; the API does not guarantee any
/// ordering on the wire, and the client deliberately does not sort either —
/// sorting is the caller's responsibility.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TeamMember {
    pub id: u64,
    pub name: String,
    pub title: String,
    pub bio: String,
    pub avatar: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter_url: Option<String>,
    pub order: i32,
}

/// A partner organization shown on the site.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Partner {
    pub id: u64,
    pub name: String,
    pub logo_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website_url: Option<String>,
}
