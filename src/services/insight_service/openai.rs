use crate::config::InsightsConfig;
use crate::errors::AppError;
use crate::services::insight_service::provider::{ChatMessage, SamplingParams, TextGenerator};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::{json, Value};

/// OpenAI-compatible chat completions client.
pub struct OpenAIClient {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl OpenAIClient {
    pub fn new(client: Client, config: &InsightsConfig) -> Self {
        Self {
            client,
            api_key: config.api_key.clone(),
            model: config.model.clone(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl TextGenerator for OpenAIClient {
    async fn complete(
        &self,
        messages: &[ChatMessage],
        sampling: &SamplingParams,
    ) -> Result<String, AppError> {
        let body = json!({
            "model": self.model,
            "messages": messages,
            "temperature": sampling.temperature,
            "top_p": sampling.top_p,
            "frequency_penalty": sampling.frequency_penalty,
            "max_tokens": sampling.max_tokens,
        });

        let resp = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&body)
            .send()
            .await
            .map_err(|e| AppError::Network(format!("OpenAI request failed: {}", e)))?;

        let status = resp.status();
        if !status.is_success() {
            let details = resp.text().await.unwrap_or_default();
            return Err(AppError::Upstream {
                service: "OpenAI",
                status: status.as_u16(),
                details,
            });
        }

        let data: Value = resp
            .json()
            .await
            .map_err(|e| AppError::Network(format!("Failed to parse OpenAI response: {}", e)))?;

        data["choices"][0]["message"]["content"]
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| AppError::Synthesis("No content in OpenAI response".into()))
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}
