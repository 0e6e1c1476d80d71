// src/api/mod.rs

pub mod handler;
pub mod lighthouse;
pub mod meta;

pub use handler::{analyze_handler, health_handler};
pub use lighthouse::run_lighthouse_handler;
pub use meta::analyze_meta_handler;

use crate::models::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/analyze", post(analyze_handler))
        .route("/lighthouse", post(run_lighthouse_handler))
        .route("/analyze-meta", post(analyze_meta_handler))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
