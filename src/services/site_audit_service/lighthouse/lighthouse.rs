use crate::errors::AppError;
use crate::models::{LighthouseReport, MetricRatings, Strategy};
use crate::services::insight_service::RecommendationSynthesizer;
use crate::services::site_audit_service::compute::{aggregate, filter_recommendations};
use crate::services::site_audit_service::lighthouse::pagespeed::AuditReportProvider;
use log::{info, warn};

/// One audit round trip, normalized.
///
/// Synthesis runs after the metrics are built and never fails the report:
/// a provider error lands in `ai_insights_error` instead.
pub async fn run_lighthouse(
    provider: &dyn AuditReportProvider,
    synthesizer: Option<&RecommendationSynthesizer>,
    url: &str,
    strategy: Strategy,
) -> Result<LighthouseReport, AppError> {
    let document = provider.fetch_report(url, strategy).await?;

    let metrics = aggregate(&document);
    let recommendations = filter_recommendations(&document);
    info!(
        "Audit for {} normalized, {} recommendations",
        url,
        recommendations.len()
    );

    let (ai_insights, ai_insights_error) = match synthesizer {
        Some(synthesizer) => match synthesizer.synthesize(&metrics).await {
            Ok(text) => (Some(text), None),
            Err(e) => {
                warn!("AI insights unavailable for {}: {}", url, e);
                (None, Some(e.to_string()))
            }
        },
        None => (None, None),
    };

    Ok(LighthouseReport {
        ratings: MetricRatings::from(&metrics),
        metrics,
        recommendations,
        ai_insights,
        ai_insights_error,
    })
}
