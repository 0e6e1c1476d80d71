use crate::errors::AppError;
use crate::models::api::params::required;
use crate::models::{AppState, MetaAnalysisResponse, ParamsUrl};
use axum::{extract::State, Json};
use log::info;
use std::sync::Arc;

pub async fn analyze_meta_handler(
    State(state): State<Arc<AppState>>,
    Json(params): Json<ParamsUrl>,
) -> Result<Json<MetaAnalysisResponse>, AppError> {
    let url = required(params.url).ok_or_else(|| AppError::missing("URL"))?;
    let analyzer = state
        .key_phrase_analyzer
        .as_ref()
        .ok_or_else(|| AppError::Config("Key phrase extraction is not configured".into()))?;
    info!("Started meta analysis for url: {}", url);

    let meta_tags = state.metadata_extractor.extract_metadata(&url).await?;
    let key_phrases = analyzer.extract_key_phrases(&meta_tags.documents()).await?;

    Ok(Json(MetaAnalysisResponse {
        meta_tags,
        key_phrases,
    }))
}
