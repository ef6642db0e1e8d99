//! # Team Endpoints
//!
//! Team member and partner listings.

use shared::{ApiResponse, Partner, TeamMember};

use super::client::ApiClient;
use crate::core::error::Result;

/// List team members.
///
/// Members arrive in server order; callers sort by `order` ascending for
/// display (see `shared::utils::sort_by_display_order`).
pub async fn get_team_members(client: &ApiClient) -> Result<ApiResponse<Vec<TeamMember>>> {
    client.get_envelope("/team", &[]).await
}

/// List partner organizations.
pub async fn get_partners(client: &ApiClient) -> Result<ApiResponse<Vec<Partner>>> {
    client.get_envelope("/partners", &[]).await
}
