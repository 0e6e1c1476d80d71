use crate::models::lighthouse::category::{ACCESSIBILITY, BEST_PRACTICES, PERFORMANCE, PWA, SEO};
use crate::models::{CategoryScores, RawAuditDocument};
use log::debug;
use serde_json::Value;

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Walks `path` through nested objects.
///
/// An absent key resolves to `None` silently. A node of the wrong type also
/// resolves to `None`, but is logged so shape drift upstream stays visible.
pub fn lookup<'a>(document: &'a Value, path: &[&str]) -> Option<&'a Value> {
    let mut current = document;
    for key in path {
        current = match current {
            Value::Object(map) => map.get(*key)?,
            Value::Null => return None,
            other => {
                debug!(
                    "Expected object before '{}' in {:?}, found {}",
                    key,
                    path,
                    kind(other)
                );
                return None;
            }
        };
    }
    Some(current)
}

pub fn number_at(document: &Value, path: &[&str]) -> Option<f64> {
    match lookup(document, path)? {
        Value::Number(n) => n.as_f64(),
        Value::Null => None,
        other => {
            debug!("Expected number at {:?}, found {}", path, kind(other));
            None
        }
    }
}

pub fn str_at<'a>(document: &'a Value, path: &[&str]) -> Option<&'a str> {
    match lookup(document, path)? {
        Value::String(s) => Some(s.as_str()),
        Value::Null => None,
        other => {
            debug!("Expected string at {:?}, found {}", path, kind(other));
            None
        }
    }
}

/// `audits[field_id].numericValue`, or `None` if any link is missing.
pub fn extract_numeric(document: &RawAuditDocument, field_id: &str) -> Option<f64> {
    number_at(document, &["audits", field_id, "numericValue"])
}

pub fn category_score(document: &RawAuditDocument, category: &str) -> Option<f64> {
    number_at(document, &["categories", category, "score"])
}

pub fn project_category_scores(document: &RawAuditDocument) -> CategoryScores {
    CategoryScores {
        performance: category_score(document, PERFORMANCE),
        seo: category_score(document, SEO),
        accessibility: category_score(document, ACCESSIBILITY),
        best_practices: category_score(document, BEST_PRACTICES),
        pwa: category_score(document, PWA),
    }
}
