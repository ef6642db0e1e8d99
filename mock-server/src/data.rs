//! # Canned Catalog
//!
//! In-memory content served by the mock API. Slugs and taxonomy here are
//! stable so integration tests can address entities deterministically.

use chrono::{TimeZone, Utc};
use shared::{
    BlogPost, Category, KeyMetric, MediaItem, Partner, Project, PublishStatus, Stats, Tag,
    TeamMember,
};

/// Everything the mock API serves.
pub struct Catalog {
    pub projects: Vec<Project>,
    pub posts: Vec<BlogPost>,
    pub categories: Vec<Category>,
    pub tags: Vec<Tag>,
    pub team: Vec<TeamMember>,
    pub partners: Vec<Partner>,
}

impl Catalog {
    pub fn seed() -> Self {
        let categories = vec![
            category(1, "Agriculture", "agriculture"),
            category(2, "Smart Cities", "smart-cities"),
            category(3, "Industrial Automation", "industrial"),
        ];
        let tags = vec![
            tag(1, "Computer Vision", "computer-vision"),
            tag(2, "Drones", "drones"),
            tag(3, "Edge AI", "edge-ai"),
            tag(4, "Lidar", "lidar"),
        ];

        let projects = vec![
            project(
                1,
                "Harvest Vision",
                "harvest-vision",
                "Drone-based crop monitoring for a 4,000-hectare orchard cooperative.",
                "AgriCo Cooperative",
                2024,
                "Valencia, Spain",
                true,
                &categories[0],
                &[&tags[0], &tags[1]],
            ),
            project(
                2,
                "Metro Pulse",
                "metro-pulse",
                "Adaptive traffic signal control across 120 intersections.",
                "City of Rotterdam",
                2023,
                "Rotterdam, Netherlands",
                true,
                &categories[1],
                &[&tags[3]],
            ),
            project(
                3,
                "LineGuard",
                "lineguard",
                "Autonomous visual inspection for high-speed bottling lines.",
                "Borealis Beverages",
                2024,
                "Oslo, Norway",
                false,
                &categories[2],
                &[&tags[0], &tags[2]],
            ),
            project(
                4,
                "Vineyard Sentinel",
                "vineyard-sentinel",
                "Early mildew detection with autonomous ground rovers.",
                "Duero Estates",
                2022,
                "Valladolid, Spain",
                false,
                &categories[0],
                &[&tags[0], &tags[2]],
            ),
            project(
                5,
                "Curb Insight",
                "curb-insight",
                "City-wide curbside occupancy analytics from municipal fleets.",
                "City of Ghent",
                2024,
                "Ghent, Belgium",
                false,
                &categories[1],
                &[&tags[0], &tags[3]],
            ),
        ];

        let posts = vec![
            post(
                1,
                "Why Orchards Are the Perfect Robotics Testbed",
                "orchards-robotics-testbed",
                "Row structure, repeat visits, and measurable yield make orchards ideal.",
                7,
                &[&tags[1], &tags[0]],
            ),
            post(
                2,
                "Edge Inference on Solar Power",
                "edge-inference-solar",
                "Running perception models on strictly budgeted watts.",
                9,
                &[&tags[2]],
            ),
            post(
                3,
                "What Traffic Lights Learn Overnight",
                "traffic-lights-overnight",
                "Off-peak hours are when adaptive signal plans earn their keep.",
                5,
                &[&tags[3]],
            ),
        ];

        let team = vec![
            member(1, "Ada Okafor", "Chief Technology Officer", 2),
            member(2, "Marta Jensen", "Chief Executive Officer", 1),
            member(3, "Pieter Van Dam", "Head of Deployments", 3),
            member(4, "Lucia Ferreira", "Lead Perception Engineer", 3),
        ];

        let partners = vec![
            partner(1, "AgriCo Cooperative"),
            partner(2, "City of Rotterdam"),
            partner(3, "Borealis Beverages"),
        ];

        Self {
            projects,
            posts,
            categories,
            tags,
            team,
            partners,
        }
    }

    /// Counters derived from the catalog plus fixed marketing figures.
    pub fn stats(&self) -> Stats {
        Stats {
            total_projects: self.projects.len() as u32,
            co2_saved: 1250.0,
            partner_count: self.partners.len() as u32,
            years_experience: 6,
        }
    }
}

fn category(id: u64, name: &str, slug: &str) -> Category {
    Category {
        id,
        name: name.to_string(),
        slug: slug.to_string(),
        project_count: None,
    }
}

fn tag(id: u64, name: &str, slug: &str) -> Tag {
    Tag {
        id,
        name: name.to_string(),
        slug: slug.to_string(),
        post_count: None,
    }
}

#[allow(clippy::too_many_arguments)]
fn project(
    id: u64,
    title: &str,
    slug: &str,
    excerpt: &str,
    client: &str,
    year: u16,
    location: &str,
    featured: bool,
    category: &Category,
    tags: &[&Tag],
) -> Project {
    let created = Utc
        .with_ymd_and_hms(2024, 1, 1, 0, 0, 0)
        .single()
        .unwrap_or_else(Utc::now);
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
        key_metrics: vec![
            KeyMetric {
                label: "Deployment time".to_string(),
                value: "6 weeks".to_string(),
            },
            KeyMetric {
                label: "Coverage".to_string(),
                value: "24/7".to_string(),
            },
        ],
        tech_stack: vec!["Computer vision".to_string(), "Edge inference".to_string()],
        status: PublishStatus::Published,
        featured,
        view_count: id * 137,
        categories: vec![category.clone()],
        tags: tags.iter().map(|t| (*t).clone()).collect(),
        media: vec![MediaItem {
            id,
            url: format!("https://cdn.novaterra.example/{}/gallery-1.jpg", slug),
            kind: "image".to_string(),
            caption: None,
        }],
        created_at: created,
        updated_at: created,
    }
}

fn post(id: u64, title: &str, slug: &str, excerpt: &str, reading_time: u16, tags: &[&Tag]) -> BlogPost {
    let published = Utc
        .with_ymd_and_hms(2024, 6, 1, 9, 0, 0)
        .single()
        .unwrap_or_else(Utc::now);
    BlogPost {
        id,
        title: title.to_string(),
        slug: slug.to_string(),
        excerpt: excerpt.to_string(),
        content: format!("<p>{}</p>", excerpt),
        banner_image_url: format!("https://cdn.novaterra.example/blog/{}.jpg", slug),
        reading_time,
        status: PublishStatus::Published,
        featured: id == 1,
        view_count: id * 41,
        tags: tags.iter().map(|t| (*t).clone()).collect(),
        published_at: published,
        created_at: published,
        updated_at: published,
    }
}

fn member(id: u64, name: &str, title: &str, order: i32) -> TeamMember {
    TeamMember {
        id,
        name: name.to_string(),
        title: title.to_string(),
        bio: format!("{} at Novaterra.", title),
        avatar: String::new(),
        linkedin_url: Some(format!(
            "https://linkedin.com/in/{}",
            name.to_lowercase().replace(' ', "-")
        )),
        twitter_url: None,
        order,
    }
}

fn partner(id: u64, name: &str) -> Partner {
    Partner {
        id,
        name: name.to_string(),
        logo_url: format!("https://cdn.novaterra.example/partners/{}.svg", id),
        website_url: None,
    }
}
