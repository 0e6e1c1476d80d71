pub mod metrics;
pub mod recommendations;

pub use metrics::aggregate;
pub use recommendations::filter_recommendations;
