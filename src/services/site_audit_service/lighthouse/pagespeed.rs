use crate::config::PageSpeedConfig;
use crate::errors::AppError;
use crate::models::lighthouse::category::ALL_CATEGORIES;
use crate::models::{RawAuditDocument, Strategy};
use async_trait::async_trait;
use log::info;
use reqwest::Client;
use serde_json::Value;

/// Source of raw audit documents for a URL.
#[async_trait]
pub trait AuditReportProvider: Send + Sync {
    /// Runs one audit and returns the `lighthouseResult` object
    /// (`Value::Null` when the provider omits it).
    async fn fetch_report(&self, url: &str, strategy: Strategy)
        -> Result<RawAuditDocument, AppError>;
}

pub struct PageSpeedClient {
    client: Client,
    api_key: String,
    api_url: String,
}

impl PageSpeedClient {
    pub fn new(client: Client, config: &PageSpeedConfig) -> Self {
        Self {
            client,
            api_key: config.api_key.clone(),
            api_url: config.api_url.clone(),
        }
    }
}

#[async_trait]
impl AuditReportProvider for PageSpeedClient {
    async fn fetch_report(
        &self,
        url: &str,
        strategy: Strategy,
    ) -> Result<RawAuditDocument, AppError> {
        let mut query = vec![
            ("url", url),
            ("strategy", strategy.as_str()),
            ("key", self.api_key.as_str()),
        ];
        query.extend(ALL_CATEGORIES.iter().map(|category| ("category", *category)));

        info!("Requesting {} audit for {}", strategy, url);
        let response = self
            .client
            .get(&self.api_url)
            .query(&query)
            .send()
            .await
            .map_err(|e| AppError::Network(format!("Lighthouse API request failed: {}", e)))?;

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            let details = response.text().await.unwrap_or_default();
            return Err(AppError::Upstream {
                service: "Lighthouse API",
                status: status.as_u16(),
                details,
            });
        }

        let mut data: Value = response
            .json()
            .await
            .map_err(|e| AppError::Network(format!("Invalid Lighthouse API response: {}", e)))?;

        Ok(data
            .get_mut("lighthouseResult")
            .map(Value::take)
            .unwrap_or(Value::Null))
    }
}
