pub mod lighthouse;
pub mod pagespeed;

pub use lighthouse::run_lighthouse;
pub use pagespeed::{AuditReportProvider, PageSpeedClient};
