// src/services/site_audit_service/mod.rs

pub mod compute;
pub mod extract;
pub mod lighthouse;

pub use compute::{aggregate, filter_recommendations};
pub use extract::{extract_numeric, project_category_scores};
pub use lighthouse::{run_lighthouse, AuditReportProvider, PageSpeedClient};
