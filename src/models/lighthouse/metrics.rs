use crate::models::lighthouse::category::CategoryScores;
use serde::{Deserialize, Serialize};

/// Flat, stable-shaped summary of one audit run.
///
/// Missing values serialize as `null`, except `cls` which defaults to `0`.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedMetrics {
    #[serde(flatten)]
    pub categories: CategoryScores,
    pub fcp: Option<f64>,
    pub lcp: Option<f64>,
    pub cls: f64,
    pub speed_index: Option<f64>,
    pub tbt: Option<f64>,
}

impl NormalizedMetrics {
    pub fn performance(&self) -> Option<f64> {
        self.categories.performance
    }

    pub fn seo(&self) -> Option<f64> {
        self.categories.seo
    }

    pub fn accessibility(&self) -> Option<f64> {
        self.categories.accessibility
    }

    pub fn best_practices(&self) -> Option<f64> {
        self.categories.best_practices
    }

    pub fn pwa(&self) -> Option<f64> {
        self.categories.pwa
    }
}
