pub mod handler;

pub use handler::{analyze_handler, health_handler};
