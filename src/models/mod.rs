// src/models/mod.rs

pub mod api;
pub mod app;
pub mod lighthouse;
pub mod meta;

pub use api::{AnalyzeMetrics, AnalyzeResponse, MetaAnalysisResponse, ParamsRunLighthouse, ParamsUrl};
pub use app::AppState;
pub use lighthouse::{
    CategoryScores, LighthouseReport, MetricRatings, NormalizedMetrics, RawAuditDocument, Rating,
    Recommendation, Strategy,
};
pub use meta::{KeyPhraseDocument, MetadataBundle};
