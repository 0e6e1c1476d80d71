use crate::models::lighthouse::metrics::NormalizedMetrics;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum Rating {
    Good,
    NeedsImprovement,
    Poor,
}

impl Rating {
    /// Lower-is-better metric against its good / needs-improvement ceilings.
    fn at_most(value: f64, good: f64, needs_improvement: f64) -> Rating {
        if value <= good {
            Rating::Good
        } else if value <= needs_improvement {
            Rating::NeedsImprovement
        } else {
            Rating::Poor
        }
    }

    /// Higher-is-better category score in [0, 1].
    pub fn for_score(score: f64) -> Rating {
        if score >= 0.9 {
            Rating::Good
        } else if score >= 0.5 {
            Rating::NeedsImprovement
        } else {
            Rating::Poor
        }
    }

    pub fn for_cls(cls: f64) -> Rating {
        Rating::at_most(cls, 0.1, 0.25)
    }

    /// FCP, LCP and Speed Index share the same millisecond thresholds.
    pub fn for_paint_ms(ms: f64) -> Rating {
        Rating::at_most(ms, 2000.0, 4000.0)
    }

    pub fn for_tbt_ms(ms: f64) -> Rating {
        Rating::at_most(ms, 200.0, 600.0)
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MetricRatings {
    pub performance: Option<Rating>,
    pub seo: Option<Rating>,
    pub accessibility: Option<Rating>,
    pub best_practices: Option<Rating>,
    pub pwa: Option<Rating>,
    pub fcp: Option<Rating>,
    pub lcp: Option<Rating>,
    pub cls: Option<Rating>,
    pub speed_index: Option<Rating>,
    pub tbt: Option<Rating>,
}

impl From<&NormalizedMetrics> for MetricRatings {
    fn from(metrics: &NormalizedMetrics) -> Self {
        MetricRatings {
            performance: metrics.performance().map(Rating::for_score),
            seo: metrics.seo().map(Rating::for_score),
            accessibility: metrics.accessibility().map(Rating::for_score),
            best_practices: metrics.best_practices().map(Rating::for_score),
            pwa: metrics.pwa().map(Rating::for_score),
            fcp: metrics.fcp.map(Rating::for_paint_ms),
            lcp: metrics.lcp.map(Rating::for_paint_ms),
            cls: Some(Rating::for_cls(metrics.cls)),
            speed_index: metrics.speed_index.map(Rating::for_paint_ms),
            tbt: metrics.tbt.map(Rating::for_tbt_ms),
        }
    }
}
