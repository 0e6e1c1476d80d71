use crate::models::lighthouse::Strategy;
use crate::models::meta::MetadataBundle;
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Debug, Default)]
pub struct ParamsUrl {
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Deserialize, Debug, Default)]
pub struct ParamsRunLighthouse {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub strategy: Option<Strategy>,
}

/// Returns the trimmed value when present and non-blank.
pub fn required(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeMetrics {
    pub name: String,
    pub visits: u32,
    pub bounce_rate: u32,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct AnalyzeResponse {
    pub insight: String,
    pub metrics: AnalyzeMetrics,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct MetaAnalysisResponse {
    pub meta_tags: MetadataBundle,
    pub key_phrases: Vec<Vec<String>>,
}
