use serde::{Deserialize, Serialize};

// Category keys as the audit provider spells them
pub const PERFORMANCE: &str = "performance";
pub const SEO: &str = "seo";
pub const ACCESSIBILITY: &str = "accessibility";
pub const BEST_PRACTICES: &str = "best-practices";
pub const PWA: &str = "pwa";

pub const ALL_CATEGORIES: [&str; 5] = [PERFORMANCE, SEO, ACCESSIBILITY, BEST_PRACTICES, PWA];

// pub struct for the five category scores, each in [0, 1] when present
#[derive(Debug, Deserialize, Serialize, Clone, Copy, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CategoryScores {
    pub performance: Option<f64>,
    pub seo: Option<f64>,
    pub accessibility: Option<f64>,
    pub best_practices: Option<f64>,
    pub pwa: Option<f64>,
}
