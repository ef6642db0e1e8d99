//! # Sample Dataset
//!
//! Canned content for the opt-in offline demo fallback
//! ([`super::machine::FallbackPolicy::Sample`]). Nothing substitutes this
//! data unless a caller explicitly asks for it; real fetch failures
//! otherwise surface as failures.

use chrono::Utc;
use once_cell::sync::Lazy;
use shared::{
    Category, KeyMetric, PaginatedResponse, Project, PublishStatus, Stats, Tag, TeamMember,
};

static SAMPLE_PROJECTS: Lazy<Vec<Project>> = Lazy::new(|| {
    vec![
        sample_project(
            1,
            "Harvest Vision",
            "harvest-vision",
            "Drone-based crop monitoring for a 4,000-hectare orchard cooperative.",
            "AgriCo Cooperative",
            2024,
            "Valencia, Spain",
            "agriculture",
            "Agriculture",
        ),
        sample_project(
            2,
            "Metro Pulse",
            "metro-pulse",
            "Adaptive traffic signal control across 120 intersections.",
            "City of Rotterdam",
            2023,
            "Rotterdam, Netherlands",
            "smart-cities",
            "Smart Cities",
        ),
        sample_project(
            3,
            "LineGuard",
            "lineguard",
            "Autonomous visual inspection for high-speed bottling lines.",
            "Borealis Beverages",
            2024,
            "Oslo, Norway",
            "industrial",
            "Industrial Automation",
        ),
    ]
});

#[allow(clippy::too_many_arguments)]
fn sample_project(
    id: u64,
    title: &str,
    slug: &str,
    excerpt: &str,
    client: &str,
    year: u16,
    location: &str,
    category_slug: &str,
    category_name: &str,
) -> Project {
    let now = Utc::now();
    Project {
        id,
        title: title.to_string(),
        slug: slug.to_string(),
        excerpt: excerpt.to_string(),
        description: format!("<p>{}</p>", excerpt),
        banner_image_url: format!("https://cdn.novaterra.example/{}/banner.jpg", slug),
        client: client.to_string(),
        year,
        location: location.to_string(),
        key_metrics: vec![KeyMetric {
            label: "Deployment time".to_string(),
            value: "6 weeks".to_string(),
        }],
        tech_stack: vec!["Computer vision".to_string(), "Edge inference".to_string()],
        status: PublishStatus::Published,
        featured: id == 1,
        view_count: 0,
        categories: vec![Category {
            id,
            name: category_name.to_string(),
            slug: category_slug.to_string(),
            project_count: None,
        }],
        tags: vec![Tag {
            id,
            name: "Robotics".to_string(),
            slug: "robotics".to_string(),
            post_count: None,
        }],
        media: Vec::new(),
        created_at: now,
        updated_at: now,
    }
}

/// One page of sample projects, shaped like a real list response.
pub fn sample_projects() -> PaginatedResponse<Project> {
    let data = SAMPLE_PROJECTS.clone();
    let total = data.len() as u64;
    PaginatedResponse {
        data,
        current_page: 1,
        last_page: 1,
        per_page: 10,
        total,
    }
}

/// Sample aggregate counters.
pub fn sample_stats() -> Stats {
    Stats {
        total_projects: 3,
        co2_saved: 1250.0,
        partner_count: 8,
        years_experience: 6,
    }
}

/// Sample team roster.
pub fn sample_team() -> Vec<TeamMember> {
    vec![
        TeamMember {
            id: 1,
            name: "Ada Okafor".to_string(),
            title: "Chief Technology Officer".to_string(),
            bio: "Leads the perception and autonomy teams.".to_string(),
            avatar: String::new(),
            linkedin_url: None,
            twitter_url: None,
            order: 2,
        },
        TeamMember {
            id: 2,
            name: "Marta Jensen".to_string(),
            title: "Chief Executive Officer".to_string(),
            bio: "Founded the company after a decade in precision agriculture.".to_string(),
            avatar: String::new(),
            linkedin_url: None,
            twitter_url: None,
            order: 1,
        },
    ]
}
