use crate::models::lighthouse::audit::Recommendation;
use crate::models::lighthouse::metrics::NormalizedMetrics;
use crate::models::lighthouse::rating::MetricRatings;
use serde::{Deserialize, Serialize};

/// Body returned by `POST /lighthouse`: the metrics flattened at top level
/// plus recommendations and, when synthesis is enabled, the AI summary.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct LighthouseReport {
    #[serde(flatten)]
    pub metrics: NormalizedMetrics,
    pub ratings: MetricRatings,
    pub recommendations: Vec<Recommendation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ai_insights: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ai_insights_error: Option<String>,
}
