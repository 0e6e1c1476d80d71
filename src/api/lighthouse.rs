use crate::errors::AppError;
use crate::models::api::params::required;
use crate::models::{AppState, LighthouseReport, ParamsRunLighthouse};
use crate::services::run_lighthouse;
use axum::{extract::State, Json};
use log::info;
use std::sync::Arc;

pub async fn run_lighthouse_handler(
    State(state): State<Arc<AppState>>,
    Json(params): Json<ParamsRunLighthouse>,
) -> Result<Json<LighthouseReport>, AppError> {
    let url = required(params.url).ok_or_else(|| AppError::missing("URL"))?;
    let strategy = params.strategy.unwrap_or(state.default_strategy);
    info!("Started run lighthouse handler for url: {}", url);

    let report = run_lighthouse(
        state.audit_provider.as_ref(),
        state.synthesizer.as_deref(),
        &url,
        strategy,
    )
    .await?;

    Ok(Json(report))
}
