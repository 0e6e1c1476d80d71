use crate::errors::AppError;
use crate::models::Strategy;
use dotenv::dotenv;
use std::env;

pub const DEFAULT_PAGESPEED_API_URL: &str =
    "https://www.googleapis.com/pagespeedonline/v5/runPagespeed";
pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_OPENAI_MODEL: &str = "gpt-4o-mini";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: String,
    pub pagespeed: PageSpeedConfig,
    pub insights: Option<InsightsConfig>,
    pub text_analytics: Option<TextAnalyticsConfig>,
    /// Skip TLS certificate validation when fetching pages for metadata.
    pub meta_accept_invalid_certs: bool,
}

#[derive(Debug, Clone)]
pub struct PageSpeedConfig {
    pub api_key: String,
    pub api_url: String,
    pub strategy: Strategy,
}

#[derive(Debug, Clone)]
pub struct InsightsConfig {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
}

#[derive(Debug, Clone)]
pub struct TextAnalyticsConfig {
    pub endpoint: String,
    pub api_key: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, AppError> {
        dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup so tests don't touch the process env.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let require = |key: &str| {
            get(key).ok_or_else(|| {
                AppError::Config(format!("{} environment variable not set", key))
            })
        };

        let strategy = match get("AUDIT_STRATEGY") {
            Some(raw) => raw.parse::<Strategy>().map_err(AppError::Config)?,
            None => Strategy::default(),
        };

        let pagespeed = PageSpeedConfig {
            api_key: require("PAGESPEED_API_KEY")?,
            api_url: get("PAGESPEED_API_URL")
                .unwrap_or_else(|| DEFAULT_PAGESPEED_API_URL.to_string()),
            strategy,
        };

        let insights = if parse_flag(get("ENABLE_AI_INSIGHTS").as_deref())? {
            Some(InsightsConfig {
                api_key: require("OPENAI_API_KEY")?,
                base_url: get("OPENAI_BASE_URL")
                    .unwrap_or_else(|| DEFAULT_OPENAI_BASE_URL.to_string()),
                model: get("OPENAI_MODEL").unwrap_or_else(|| DEFAULT_OPENAI_MODEL.to_string()),
            })
        } else {
            None
        };

        let text_analytics = match (get("TEXT_ANALYTICS_ENDPOINT"), get("TEXT_ANALYTICS_KEY")) {
            (Some(endpoint), Some(api_key)) => Some(TextAnalyticsConfig { endpoint, api_key }),
            (None, None) => None,
            _ => {
                return Err(AppError::Config(
                    "TEXT_ANALYTICS_ENDPOINT and TEXT_ANALYTICS_KEY must be set together".into(),
                ))
            }
        };

        Ok(AppConfig {
            bind_addr: get("BIND_ADDR").unwrap_or_else(|| "0.0.0.0:5000".to_string()),
            pagespeed,
            insights,
            text_analytics,
            meta_accept_invalid_certs: parse_flag(get("META_ACCEPT_INVALID_CERTS").as_deref())?,
        })
    }
}

fn parse_flag(raw: Option<&str>) -> Result<bool, AppError> {
    match raw.map(|v| v.trim().to_ascii_lowercase()) {
        None => Ok(false),
        Some(v) => match v.as_str() {
            "1" | "true" | "yes" | "on" => Ok(true),
            "0" | "false" | "no" | "off" => Ok(false),
            other => Err(AppError::Config(format!("invalid boolean flag: {}", other))),
        },
    }
}
