use crate::models::{RawAuditDocument, Recommendation};
use crate::services::site_audit_service::extract::fields::{lookup, number_at, str_at};
use log::debug;
use serde_json::Value;

pub const NUMERIC_DISPLAY_MODE: &str = "numeric";

/// Numeric audits scored below 1, in document order.
///
/// An audit without a score counts as perfect and is skipped. Duplicate
/// titles are kept.
pub fn filter_recommendations(document: &RawAuditDocument) -> Vec<Recommendation> {
    let audits = match lookup(document, &["audits"]) {
        Some(Value::Object(audits)) => audits,
        Some(Value::Null) | None => return Vec::new(),
        Some(_) => {
            debug!("'audits' is not an object, no recommendations extracted");
            return Vec::new();
        }
    };

    audits.values().filter_map(to_recommendation).collect()
}

fn to_recommendation(audit: &Value) -> Option<Recommendation> {
    if str_at(audit, &["scoreDisplayMode"]) != Some(NUMERIC_DISPLAY_MODE) {
        return None;
    }

    let score = number_at(audit, &["score"]).unwrap_or(1.0);
    if score >= 1.0 {
        return None;
    }

    Some(Recommendation {
        title: str_at(audit, &["title"]).map(str::to_string),
        description: str_at(audit, &["description"]).map(str::to_string),
        score,
    })
}
