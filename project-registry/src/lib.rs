use log::debug;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Summary fields shown on a listing card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectSummary {
    pub slug: String,
    pub title: String,
    pub tagline: String,
    pub cover_image: String,
}

/// Full record shown on a detail page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectDetails {
    pub slug: String,
    pub title: String,
    pub tagline: String,
    pub cover_image: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub gallery: Vec<String>,
}

impl ProjectDetails {
    pub fn summary(&self) -> ProjectSummary {
        ProjectSummary {
            slug: self.slug.clone(),
            title: self.title.clone(),
            tagline: self.tagline.clone(),
            cover_image: self.cover_image.clone(),
        }
    }
}

/// The compiled-in catalog, in display order.
pub fn catalog() -> Vec<ProjectDetails> {
    vec![
        ProjectDetails {
            slug: "flowerave".into(),
            title: "FLOWERAVE".into(),
            tagline: "microservice mesh // qr-sync".into(),
            cover_image: "/imgs/bg-1.jpg".into(),
            description: "Microservice-driven retail ecosystem for festival merch. Enables \
                          QR-synced loyalty tracking with on-site kiosks and instant restock \
                          telemetry."
                .into(),
            technologies: vec![
                "fastapi".into(),
                "postgresql".into(),
                "redis streams".into(),
                "kafka".into(),
                "docker".into(),
                "grafana".into(),
            ],
            gallery: vec![
                "/imgs/bg-1.jpg".into(),
                "/imgs/flowerave.jpg".into(),
                "/imgs/shide.png".into(),
            ],
        },
        ProjectDetails {
            slug: "skanyshi".into(),
            title: "SKANYSHI".into(),
            tagline: "collectible map layer // yandex maps".into(),
            cover_image: "/imgs/bg-2.png".into(),
            description: "Gamified collectible layer above Yandex Maps with AR treasure hunts \
                          and NFC check-ins for offline venues and pop-up stores."
                .into(),
            technologies: vec![
                "fastapi".into(),
                "geoalchemy".into(),
                "s3".into(),
                "yandex maps sdk".into(),
                "celery".into(),
            ],
            gallery: vec![
                "/imgs/bg-2.png".into(),
                "/imgs/profile.png".into(),
                "/imgs/bg-1.jpg".into(),
            ],
        },
        ProjectDetails {
            slug: "coreapi".into(),
            title: "COREAPI".into(),
            tagline: "orchestration core // fintech platform".into(),
            cover_image: "/imgs/shide.png".into(),
            description: "Modular API core for fintech orchestration: handles auth federation, \
                          idempotent webhooks, streaming analytics, and zero-downtime deploys."
                .into(),
            technologies: vec![
                "python".into(),
                "asyncio".into(),
                "fastapi".into(),
                "kubernetes".into(),
                "clickhouse".into(),
                "otel".into(),
            ],
            gallery: vec![
                "/imgs/shide.png".into(),
                "/imgs/profile.png".into(),
                "/imgs/bg-2.png".into(),
            ],
        },
    ]
}

/// Placeholder served for every identifier the catalog does not know.
pub fn default_project() -> ProjectDetails {
    ProjectDetails {
        slug: "flowerave".into(),
        title: "UNKNOWN".into(),
        tagline: "portfolio placeholder".into(),
        cover_image: "/imgs/bg-1.jpg".into(),
        description: "This project is still brewing in the underground lab. Check back soon \
                      for more signal."
            .into(),
        technologies: vec!["python".into(), "fastapi".into(), "redis".into()],
        gallery: vec!["/imgs/bg-1.jpg".into(), "/imgs/bg-2.png".into()],
    }
}

struct Registry {
    order: Vec<String>,
    by_slug: BTreeMap<String, ProjectDetails>,
    fallback: ProjectDetails,
}

static REGISTRY: Lazy<Registry> = Lazy::new(|| {
    let records = catalog();
    let order = records.iter().map(|p| p.slug.clone()).collect();
    let by_slug = records.into_iter().map(|p| (p.slug.clone(), p)).collect();
    Registry {
        order,
        by_slug,
        fallback: default_project(),
    }
});

/// Resolves a routing identifier to a project record.
///
/// Matching is case-insensitive. An absent, empty, or unknown identifier is
/// not an error: the placeholder record is returned instead.
pub fn resolve(identifier: Option<&str>) -> ProjectDetails {
    let Some(raw) = identifier else {
        return REGISTRY.fallback.clone();
    };

    let normalized = raw.trim().to_ascii_lowercase();
    if normalized.is_empty() {
        return REGISTRY.fallback.clone();
    }

    match REGISTRY.by_slug.get(&normalized) {
        Some(project) => project.clone(),
        None => {
            debug!("no project registered for `{normalized}`, serving placeholder");
            REGISTRY.fallback.clone()
        }
    }
}

/// Listing-view projections, in catalog order.
pub fn summaries() -> Vec<ProjectSummary> {
    REGISTRY
        .order
        .iter()
        .filter_map(|slug| REGISTRY.by_slug.get(slug))
        .map(ProjectDetails::summary)
        .collect()
}

/// Known slugs in catalog order.
pub fn slugs() -> Vec<String> {
    REGISTRY.order.clone()
}
