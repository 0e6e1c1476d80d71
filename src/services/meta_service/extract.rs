use crate::errors::AppError;
use crate::models::meta::{MetadataBundle, NO_DESCRIPTION, NO_KEYWORDS, NO_TITLE};
use log::{info, warn};
use reqwest::Client;
use scraper::{Html, Selector};

/// Fetches a page and pulls title, description and keywords out of its HTML.
pub struct MetadataExtractor {
    client: Client,
}

impl MetadataExtractor {
    /// `accept_invalid_certs` disables TLS certificate validation for page fetches.
    pub fn new(accept_invalid_certs: bool) -> Result<Self, AppError> {
        if accept_invalid_certs {
            warn!("TLS certificate validation is disabled for metadata fetches");
        }
        let client = Client::builder()
            .danger_accept_invalid_certs(accept_invalid_certs)
            .build()
            .map_err(|e| AppError::Config(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self { client })
    }

    pub async fn extract_metadata(&self, url: &str) -> Result<MetadataBundle, AppError> {
        info!("Fetching {} for metadata", url);
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| AppError::Network(format!("Failed to fetch {}: {}", url, e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::Upstream {
                service: "Page fetch",
                status: status.as_u16(),
                details: format!("Failed to fetch the URL: {}", url),
            });
        }

        let html = response
            .text()
            .await
            .map_err(|e| AppError::Network(format!("Failed to read body of {}: {}", url, e)))?;

        Ok(parse_metadata(&html))
    }
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn title_text(document: &Html) -> Option<String> {
    let Ok(selector) = Selector::parse("title") else {
        return None;
    };
    document
        .select(&selector)
        .next()
        .and_then(|el| non_empty(&el.text().collect::<String>()))
}

// `<meta name=...>` lookup; the name comparison ignores ASCII case.
// A matching element without usable content yields an empty string.
fn meta_content(document: &Html, name: &str) -> Option<String> {
    let Ok(selector) = Selector::parse("meta[name]") else {
        return None;
    };
    document
        .select(&selector)
        .find(|el| {
            el.value()
                .attr("name")
                .is_some_and(|n| n.trim().eq_ignore_ascii_case(name))
        })
        .map(|el| el.value().attr("content").unwrap_or_default().trim().to_string())
}

pub fn parse_metadata(html: &str) -> MetadataBundle {
    let document = Html::parse_document(html);

    MetadataBundle {
        title: title_text(&document).unwrap_or_else(|| NO_TITLE.to_string()),
        description: meta_content(&document, "description")
            .unwrap_or_else(|| NO_DESCRIPTION.to_string()),
        keywords: meta_content(&document, "keywords").unwrap_or_else(|| NO_KEYWORDS.to_string()),
    }
}
