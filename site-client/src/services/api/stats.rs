//! # Stats and Health Endpoints

use shared::{ApiResponse, HealthStatus, Stats};

use super::client::ApiClient;
use crate::core::error::Result;

/// Fetch aggregate site counters for the home page.
pub async fn get_stats(client: &ApiClient) -> Result<ApiResponse<Stats>> {
    client.get_envelope("/stats", &[]).await
}

/// Liveness probe against `/health`.
pub async fn health_check(client: &ApiClient) -> Result<ApiResponse<HealthStatus>> {
    client.get_envelope("/health", &[]).await
}
