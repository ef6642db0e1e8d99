//! # Shared Utility Functions
//!
//! Presentation-side helpers used across the site client and tooling.
//!
//! ## Team Display
//!
//! The API returns team members unsorted and the client layer is forbidden
//! from sorting them; callers order for display with
//! [`sort_by_display_order`] (ascending `order`, ties keep wire order).
//!
//! ## Avatars
//!
//! Members without an uploaded avatar get a generated one:
//!
//! ```rust
//! use shared::dto::team::TeamMember;
//! use shared::utils::display_avatar;
//!
//! let member = TeamMember {
//!     id: 1,
//!     name: "Ada Okafor".to_string(),
//!     title: "CTO".to_string(),
//!     bio: String::new(),
//!     avatar: String::new(),
//!     linkedin_url: None,
//!     twitter_url: None,
//!     order: 1,
//! };
//! assert_eq!(
//!     display_avatar(&member),
//!     "https://ui-avatars.com/api/?name=Ada+Okafor"
//! );
//! ```

use crate::dto::team::TeamMember;

/// Sort team members for display: ascending `order`, ties broken by the
/// order they arrived in (stable sort).
pub fn sort_by_display_order(members: &mut [TeamMember]) {
    members.sort_by_key(|m| m.order);
}

/// Resolve the avatar URL to display for a member.
///
/// Returns the uploaded avatar when present, otherwise a generated-avatar
/// URL derived from the member's name.
pub fn display_avatar(member: &TeamMember) -> String {
    if member.avatar.is_empty() {
        generated_avatar_url(&member.name)
    } else {
        member.avatar.clone()
    }
}

/// Build a generated-avatar URL for a display name.
///
/// Spaces become `+` per the avatar service's query convention; names are
/// otherwise passed through unmodified.
pub fn generated_avatar_url(name: &str) -> String {
    let encoded = name.split_whitespace().collect::<Vec<_>>().join("+");
    format!("https://ui-avatars.com/api/?name={}", encoded)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn member(id: u64, name: &str, order: i32) -> TeamMember {
        TeamMember {
            id,
            name: name.to_string(),
            title: String::new(),
            bio: String::new(),
            avatar: String::new(),
            linkedin_url: None,
            twitter_url: None,
            order,
        }
    }

    #[test]
    fn test_sort_by_display_order() {
        let mut members = vec![member(1, "C", 3), member(2, "A", 1), member(3, "B", 2)];
        sort_by_display_order(&mut members);
        let names: Vec<_> = members.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, ["A", "B", "C"]);
    }

    #[test]
    fn test_sort_preserves_wire_order_on_ties() {
        let mut members = vec![member(1, "first", 5), member(2, "second", 5), member(3, "third", 1)];
        sort_by_display_order(&mut members);
        let ids: Vec<_> = members.iter().map(|m| m.id).collect();
        assert_eq!(ids, [3, 1, 2]);
    }

    #[test]
    fn test_display_avatar_prefers_upload() {
        let mut m = member(1, "Ada Okafor", 1);
        m.avatar = "https://cdn.example.com/ada.jpg".to_string();
        assert_eq!(display_avatar(&m), "https://cdn.example.com/ada.jpg");
    }

    #[test]
    fn test_generated_avatar_url() {
        assert_eq!(
            generated_avatar_url("Ada Okafor"),
            "https://ui-avatars.com/api/?name=Ada+Okafor"
        );
        assert_eq!(
            generated_avatar_url("Cher"),
            "https://ui-avatars.com/api/?name=Cher"
        );
    }
}
