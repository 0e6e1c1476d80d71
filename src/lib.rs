pub mod api;
pub mod config;
pub mod errors;
pub mod models;
pub mod services;
pub mod utils;

pub use api::build_router;
pub use config::AppConfig;
pub use errors::AppError;
pub use models::AppState;
