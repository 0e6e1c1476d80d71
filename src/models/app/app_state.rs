use crate::config::AppConfig;
use crate::errors::AppError;
use crate::models::lighthouse::Strategy;
use crate::services::{
    AuditReportProvider, KeyPhraseAnalyzer, KeyPhraseProvider, MetadataExtractor, OpenAIClient,
    PageSpeedClient, RecommendationSynthesizer, TextAnalyticsClient, TextGenerator,
};
use log::{info, warn};
use reqwest::Client;
use std::sync::Arc;

/// Provider clients shared by every request. Built once in `main`.
#[derive(Clone)]
pub struct AppState {
    pub audit_provider: Arc<dyn AuditReportProvider>,
    pub default_strategy: Strategy,
    /// `None` when AI insights are disabled.
    pub synthesizer: Option<Arc<RecommendationSynthesizer>>,
    pub metadata_extractor: Arc<MetadataExtractor>,
    /// `None` when no phrase-extraction credentials are configured.
    pub key_phrase_analyzer: Option<Arc<KeyPhraseAnalyzer>>,
}

impl AppState {
    /// Wires every provider client from configuration.
    pub fn from_config(config: &AppConfig) -> Result<Self, AppError> {
        let http = Client::builder()
            .build()
            .map_err(|e| AppError::Config(format!("Failed to build HTTP client: {}", e)))?;

        let synthesizer = config.insights.as_ref().map(|insights| {
            info!("AI insights enabled with model {}", insights.model);
            let generator: Arc<dyn TextGenerator> =
                Arc::new(OpenAIClient::new(http.clone(), insights));
            Arc::new(RecommendationSynthesizer::new(generator))
        });

        let key_phrase_analyzer = match &config.text_analytics {
            Some(text_analytics) => {
                let provider: Arc<dyn KeyPhraseProvider> =
                    Arc::new(TextAnalyticsClient::new(http.clone(), text_analytics));
                Some(Arc::new(KeyPhraseAnalyzer::new(provider)))
            }
            None => {
                warn!("Text Analytics is not configured, /analyze-meta will be unavailable");
                None
            }
        };

        Ok(AppState {
            audit_provider: Arc::new(PageSpeedClient::new(http, &config.pagespeed)),
            default_strategy: config.pagespeed.strategy,
            synthesizer,
            metadata_extractor: Arc::new(MetadataExtractor::new(
                config.meta_accept_invalid_certs,
            )?),
            key_phrase_analyzer,
        })
    }
}
