pub mod insight_service;
pub mod meta_service;
pub mod site_audit_service;

pub use insight_service::{OpenAIClient, RecommendationSynthesizer, TextGenerator};
pub use meta_service::{KeyPhraseAnalyzer, KeyPhraseProvider, MetadataExtractor, TextAnalyticsClient};
pub use site_audit_service::{
    aggregate, extract_numeric, filter_recommendations, project_category_scores, run_lighthouse,
    AuditReportProvider, PageSpeedClient,
};
