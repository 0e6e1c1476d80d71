pub mod fields;

pub use fields::{extract_numeric, project_category_scores};
