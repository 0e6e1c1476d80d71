pub mod audit;
pub mod category;
pub mod metrics;
pub mod rating;
pub mod report;
pub mod strategy;

pub use audit::{RawAuditDocument, Recommendation};
pub use category::CategoryScores;
pub use metrics::NormalizedMetrics;
pub use rating::{MetricRatings, Rating};
pub use report::LighthouseReport;
pub use strategy::Strategy;
