use serde::{Deserialize, Serialize};

/// Aggregate site counters shown on the home page.
///
/// Read-only snapshot with no identity; the server recomputes it on demand.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Stats {
    pub total_projects: u32,
    /// Tonnes of CO2 saved across deployed installations.
    pub co2_saved: f64,
    pub partner_count: u32,
    pub years_experience: u32,
}
