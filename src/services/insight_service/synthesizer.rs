use crate::errors::AppError;
use crate::models::NormalizedMetrics;
use crate::services::insight_service::provider::{ChatMessage, SamplingParams, TextGenerator};
use log::{debug, info};
use std::sync::Arc;

fn render(value: Option<f64>) -> String {
    match value {
        Some(v) => v.to_string(),
        None => "null".to_string(),
    }
}

/// Deterministic prompt for the summary. Missing values render as `null`.
pub fn render_prompt(metrics: &NormalizedMetrics) -> String {
    format!(
        "You are a web performance consultant. Based on the following Lighthouse results, \
write 3 to 5 short bullet points with the most important improvements, highest impact first.

Performance score: {}
SEO score: {}
Accessibility score: {}
Largest Contentful Paint (ms): {}
First Contentful Paint (ms): {}
Cumulative Layout Shift: {}
Speed Index (ms): {}
Total Blocking Time (ms): {}",
        render(metrics.performance()),
        render(metrics.seo()),
        render(metrics.accessibility()),
        render(metrics.lcp),
        render(metrics.fcp),
        metrics.cls,
        render(metrics.speed_index),
        render(metrics.tbt),
    )
}

pub struct RecommendationSynthesizer {
    generator: Arc<dyn TextGenerator>,
    sampling: SamplingParams,
}

impl RecommendationSynthesizer {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self {
            generator,
            sampling: SamplingParams::default(),
        }
    }

    /// Every provider failure comes back as `AppError::Synthesis`.
    pub async fn synthesize(&self, metrics: &NormalizedMetrics) -> Result<String, AppError> {
        let prompt = render_prompt(metrics);
        debug!("Synthesis prompt: {}", prompt);

        let messages = [ChatMessage::user(&prompt)];
        match self.generator.complete(&messages, &self.sampling).await {
            Ok(text) => {
                info!("AI insights generated with {}", self.generator.model_name());
                Ok(text.trim().to_string())
            }
            Err(AppError::Synthesis(message)) => Err(AppError::Synthesis(message)),
            Err(e) => Err(AppError::Synthesis(e.to_string())),
        }
    }
}
