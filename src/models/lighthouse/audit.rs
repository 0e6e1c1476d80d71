use serde::{Deserialize, Serialize};

// Audit ids for the Core Web Vitals
pub const FIRST_CONTENTFUL_PAINT: &str = "first-contentful-paint";
pub const LARGEST_CONTENTFUL_PAINT: &str = "largest-contentful-paint";
pub const CUMULATIVE_LAYOUT_SHIFT: &str = "cumulative-layout-shift";
pub const SPEED_INDEX: &str = "speed-index";
pub const TOTAL_BLOCKING_TIME: &str = "total-blocking-time";

/// A failing numeric audit surfaced to the caller.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Recommendation {
    pub title: Option<String>,
    pub description: Option<String>,
    pub score: f64,
}

/// The `lighthouseResult` object as returned by the audit provider.
///
/// Kept as untyped JSON: any key may be missing at any depth, and accessors
/// treat a wrong-typed node the same as an absent one.
pub type RawAuditDocument = serde_json::Value;
