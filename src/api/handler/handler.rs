use crate::errors::AppError;
use crate::models::api::params::required;
use crate::models::{AnalyzeMetrics, AnalyzeResponse, ParamsUrl};
use axum::Json;
use serde_json::{json, Value};

pub async fn health_handler() -> Json<Value> {
    Json(json!({ "status": "ok", "service": "webpulse" }))
}

/// Canned engagement summary. Nothing here is computed or model-generated.
pub async fn analyze_handler(
    Json(params): Json<ParamsUrl>,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let url = required(params.url).ok_or_else(|| AppError::missing("URL"))?;

    Ok(Json(AnalyzeResponse {
        insight: format!(
            "AI Insight: {} has a healthy engagement rate and is mobile optimized.",
            url
        ),
        metrics: AnalyzeMetrics {
            name: url,
            visits: 742,
            bounce_rate: 28,
        },
    }))
}
