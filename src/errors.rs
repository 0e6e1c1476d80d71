use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    MissingInput(String),

    #[error("{service} request failed with status {status}")]
    Upstream {
        service: &'static str,
        status: u16,
        details: String,
    },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Synthesis failed: {0}")]
    Synthesis(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl AppError {
    pub fn missing(field: &str) -> Self {
        AppError::MissingInput(format!("No {} provided", field))
    }

    fn status_code(&self) -> StatusCode {
        match self {
            AppError::MissingInput(_) => StatusCode::BAD_REQUEST,
            // Only upstream client/server errors pass through as-is
            AppError::Upstream { status, .. } => StatusCode::from_u16(*status)
                .ok()
                .filter(|code| code.as_u16() >= 400)
                .unwrap_or(StatusCode::BAD_GATEWAY),
            AppError::Config(_) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::Network(_) | AppError::Synthesis(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = match &self {
            AppError::Upstream { details, .. } => json!({
                "error": self.to_string(),
                "details": details,
            }),
            _ => json!({ "error": self.to_string() }),
        };

        (status, Json(body)).into_response()
    }
}
