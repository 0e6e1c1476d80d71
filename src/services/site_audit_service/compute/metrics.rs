use crate::models::lighthouse::audit::{
    CUMULATIVE_LAYOUT_SHIFT, FIRST_CONTENTFUL_PAINT, LARGEST_CONTENTFUL_PAINT, SPEED_INDEX,
    TOTAL_BLOCKING_TIME,
};
use crate::models::{NormalizedMetrics, RawAuditDocument};
use crate::services::site_audit_service::extract::{extract_numeric, project_category_scores};

/// Rounds through the exact decimal expansion of `value`, ties to even.
pub fn round_to(value: f64, places: usize) -> f64 {
    format!("{:.*}", places, value)
        .parse::<f64>()
        .unwrap_or(value)
}

/// Category scores plus Core Web Vitals for one audit document.
///
/// CLS is the only field with a non-null default: missing becomes `0`, and the
/// value is rounded to two decimals. Everything else passes through untouched.
pub fn aggregate(document: &RawAuditDocument) -> NormalizedMetrics {
    let cls = extract_numeric(document, CUMULATIVE_LAYOUT_SHIFT).unwrap_or(0.0);

    NormalizedMetrics {
        categories: project_category_scores(document),
        fcp: extract_numeric(document, FIRST_CONTENTFUL_PAINT),
        lcp: extract_numeric(document, LARGEST_CONTENTFUL_PAINT),
        cls: round_to(cls, 2),
        speed_index: extract_numeric(document, SPEED_INDEX),
        tbt: extract_numeric(document, TOTAL_BLOCKING_TIME),
    }
}
