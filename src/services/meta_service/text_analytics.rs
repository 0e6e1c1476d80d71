use crate::config::TextAnalyticsConfig;
use crate::errors::AppError;
use crate::models::KeyPhraseDocument;
use crate::services::meta_service::key_phrases::KeyPhraseProvider;
use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

const KEY_PHRASES_PATH: &str = "/text/analytics/v3.1/keyPhrases";

#[derive(Serialize)]
struct InputDocument<'a> {
    id: String,
    language: &'a str,
    text: &'a str,
}

#[derive(Serialize)]
struct KeyPhrasesRequest<'a> {
    documents: Vec<InputDocument<'a>>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
struct DocumentResult {
    id: String,
    #[serde(default)]
    key_phrases: Vec<String>,
}

#[derive(Deserialize, Debug, Default)]
struct DocumentError {
    id: String,
}

#[derive(Deserialize, Debug, Default)]
struct KeyPhrasesResponse {
    #[serde(default)]
    documents: Vec<DocumentResult>,
    #[serde(default)]
    errors: Vec<DocumentError>,
}

/// Azure-style Text Analytics key-phrase endpoint.
pub struct TextAnalyticsClient {
    client: Client,
    endpoint: String,
    api_key: String,
    language: String,
}

impl TextAnalyticsClient {
    pub fn new(client: Client, config: &TextAnalyticsConfig) -> Self {
        Self {
            client,
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            language: "en".to_string(),
        }
    }
}

// Results and errors come back keyed by id; lay them out in input order
fn align(count: usize, response: KeyPhrasesResponse) -> Vec<KeyPhraseDocument> {
    let mut by_id: HashMap<String, Vec<String>> = response
        .documents
        .into_iter()
        .map(|doc| (doc.id, doc.key_phrases))
        .collect();
    for error in &response.errors {
        debug!("Text Analytics reported an error for document {}", error.id);
        by_id.remove(&error.id);
    }

    (0..count)
        .map(|index| match by_id.remove(&index.to_string()) {
            Some(key_phrases) => KeyPhraseDocument {
                key_phrases,
                is_error: false,
            },
            None => KeyPhraseDocument {
                key_phrases: Vec::new(),
                is_error: true,
            },
        })
        .collect()
}

#[async_trait]
impl KeyPhraseProvider for TextAnalyticsClient {
    async fn extract_key_phrases(
        &self,
        documents: &[String],
    ) -> Result<Vec<KeyPhraseDocument>, AppError> {
        let request = KeyPhrasesRequest {
            documents: documents
                .iter()
                .enumerate()
                .map(|(index, text)| InputDocument {
                    id: index.to_string(),
                    language: &self.language,
                    text,
                })
                .collect(),
        };

        let response = self
            .client
            .post(format!("{}{}", self.endpoint, KEY_PHRASES_PATH))
            .header("Ocp-Apim-Subscription-Key", &self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| AppError::Network(format!("Text Analytics request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let details = response.text().await.unwrap_or_default();
            return Err(AppError::Upstream {
                service: "Text Analytics",
                status: status.as_u16(),
                details,
            });
        }

        let body: KeyPhrasesResponse = response.json().await.map_err(|e| {
            AppError::Network(format!("Failed to parse Text Analytics response: {}", e))
        })?;

        Ok(align(documents.len(), body))
    }
}
