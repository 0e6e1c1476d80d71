use async_trait::async_trait;
use axum::body::Body;
use axum::http::StatusCode;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};
use tower::ServiceExt;
use webpulse::errors::AppError;
use webpulse::models::{AppState, KeyPhraseDocument, RawAuditDocument, Strategy};
use webpulse::services::insight_service::{ChatMessage, SamplingParams};
use webpulse::services::{
    AuditReportProvider, KeyPhraseAnalyzer, KeyPhraseProvider, MetadataExtractor,
    RecommendationSynthesizer, TextGenerator,
};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

struct CannedAudit {
    result: Result<RawAuditDocument, u16>,
    strategies: Mutex<Vec<Strategy>>,
}

impl CannedAudit {
    fn ok(document: Value) -> Arc<Self> {
        Arc::new(Self {
            result: Ok(document),
            strategies: Mutex::new(Vec::new()),
        })
    }

    fn failing(status: u16) -> Arc<Self> {
        Arc::new(Self {
            result: Err(status),
            strategies: Mutex::new(Vec::new()),
        })
    }
}

#[async_trait]
impl AuditReportProvider for CannedAudit {
    async fn fetch_report(
        &self,
        _url: &str,
        strategy: Strategy,
    ) -> Result<RawAuditDocument, AppError> {
        self.strategies.lock().unwrap().push(strategy);
        match &self.result {
            Ok(doc) => Ok(doc.clone()),
            Err(status) => Err(AppError::Upstream {
                service: "Lighthouse API",
                status: *status,
                details: "backend exploded".into(),
            }),
        }
    }
}

struct FixedText(Option<&'static str>);

#[async_trait]
impl TextGenerator for FixedText {
    async fn complete(
        &self,
        _messages: &[ChatMessage],
        _sampling: &SamplingParams,
    ) -> Result<String, AppError> {
        match self.0 {
            Some(text) => Ok(text.to_string()),
            None => Err(AppError::Network("connection refused".into())),
        }
    }

    fn model_name(&self) -> &str {
        "fixed"
    }
}

struct SecondErrored;

#[async_trait]
impl KeyPhraseProvider for SecondErrored {
    async fn extract_key_phrases(
        &self,
        documents: &[String],
    ) -> Result<Vec<KeyPhraseDocument>, AppError> {
        Ok(documents
            .iter()
            .enumerate()
            .map(|(i, text)| KeyPhraseDocument {
                key_phrases: if i == 1 { Vec::new() } else { vec![text.clone()] },
                is_error: i == 1,
            })
            .collect())
    }
}

fn canned_document() -> Value {
    json!({
        "requestedUrl": "https://example.com/",
        "categories": {
            "performance": { "score": 0.63 },
            "seo": { "score": 0.9 },
            "accessibility": { "score": 0.88 },
            "best-practices": { "score": 1.0 },
            "pwa": { "score": null }
        },
        "audits": {
            "first-contentful-paint": {
                "scoreDisplayMode": "numeric", "score": 0.4,
                "title": "First Contentful Paint", "description": "FCP marks the first paint.",
                "numericValue": 2450.7
            },
            "cumulative-layout-shift": {
                "scoreDisplayMode": "numeric", "score": 1, "numericValue": 0.0456
            },
            "render-blocking-resources": {
                "scoreDisplayMode": "numeric", "score": 0.5,
                "title": "Eliminate render-blocking resources", "description": "Inline critical CSS."
            },
            "viewport": { "scoreDisplayMode": "binary", "score": 0 },
            "diagnostics": { "scoreDisplayMode": "informative", "score": null }
        }
    })
}

fn state_with(audit: Arc<CannedAudit>, synthesizer: Option<Arc<dyn TextGenerator>>) -> AppState {
    AppState {
        audit_provider: audit,
        default_strategy: Strategy::Desktop,
        synthesizer: synthesizer.map(|g| Arc::new(RecommendationSynthesizer::new(g))),
        metadata_extractor: Arc::new(MetadataExtractor::new(false).unwrap()),
        key_phrase_analyzer: Some(Arc::new(KeyPhraseAnalyzer::new(Arc::new(SecondErrored)))),
    }
}

fn app(state: AppState) -> axum::Router {
    webpulse::build_router(Arc::new(state))
}

fn post(uri: &str, body: Value) -> axum::http::Request<Body> {
    axum::http::Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap()
}

async fn response_json(response: axum::http::Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes)
        .unwrap_or_else(|e| panic!("JSON parse error: {}. Body: {:?}", e, String::from_utf8_lossy(&bytes)))
}

#[tokio::test]
async fn test_health_endpoint() {
    let state = state_with(CannedAudit::ok(json!({})), None);
    let req = axum::http::Request::builder()
        .uri("/health")
        .body(Body::empty())
        .unwrap();
    let response = app(state).oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response_json(response).await["status"], "ok");
}

#[tokio::test]
async fn test_lighthouse_end_to_end() {
    let audit = CannedAudit::ok(canned_document());
    let state = state_with(audit.clone(), None);

    let response = app(state)
        .oneshot(post("/lighthouse", json!({ "url": "https://example.com" })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    assert_eq!(body["performance"], json!(0.63));
    assert_eq!(body["seo"], json!(0.9));
    assert_eq!(body["bestPractices"], json!(1.0));
    assert_eq!(body["pwa"], Value::Null);
    assert_eq!(body["fcp"], json!(2450.7));
    assert_eq!(body["lcp"], Value::Null);
    assert_eq!(body["cls"], json!(0.05));
    assert_eq!(body["ratings"]["performance"], "needs-improvement");

    let recommendations = body["recommendations"].as_array().unwrap();
    assert_eq!(recommendations.len(), 2);
    assert_eq!(recommendations[0]["title"], "First Contentful Paint");
    assert_eq!(recommendations[0]["score"], json!(0.4));
    assert_eq!(recommendations[1]["description"], "Inline critical CSS.");

    assert!(body.get("aiInsights").is_none());
    assert_eq!(*audit.strategies.lock().unwrap(), vec![Strategy::Desktop]);
}

#[tokio::test]
async fn test_lighthouse_honours_requested_strategy() {
    let audit = CannedAudit::ok(json!({}));
    let state = state_with(audit.clone(), None);

    let response = app(state)
        .oneshot(post(
            "/lighthouse",
            json!({ "url": "https://example.com", "strategy": "mobile" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    assert_eq!(body["cls"], json!(0.0));
    assert_eq!(body["recommendations"], json!([]));
    assert_eq!(*audit.strategies.lock().unwrap(), vec![Strategy::Mobile]);
}

#[tokio::test]
async fn test_lighthouse_with_ai_insights() {
    let generator: Arc<dyn TextGenerator> = Arc::new(FixedText(Some("  - Defer offscreen images  ")));
    let state = state_with(CannedAudit::ok(canned_document()), Some(generator));

    let response = app(state)
        .oneshot(post("/lighthouse", json!({ "url": "https://example.com" })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    assert_eq!(body["aiInsights"], "- Defer offscreen images");
    assert!(body.get("aiInsightsError").is_none());
}

#[tokio::test]
async fn test_lighthouse_survives_synthesis_failure() {
    let generator: Arc<dyn TextGenerator> = Arc::new(FixedText(None));
    let state = state_with(CannedAudit::ok(canned_document()), Some(generator));

    let response = app(state)
        .oneshot(post("/lighthouse", json!({ "url": "https://example.com" })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    assert_eq!(body["performance"], json!(0.63));
    assert!(body.get("aiInsights").is_none());
    assert!(body["aiInsightsError"]
        .as_str()
        .unwrap()
        .contains("connection refused"));
}

#[tokio::test]
async fn test_lighthouse_upstream_failure_keeps_status() {
    let state = state_with(CannedAudit::failing(500), None);

    let response = app(state)
        .oneshot(post("/lighthouse", json!({ "url": "https://example.com" })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = response_json(response).await;
    assert_eq!(
        body["error"],
        "Lighthouse API request failed with status 500"
    );
    assert_eq!(body["details"], "backend exploded");
}

#[tokio::test]
async fn test_missing_url_is_rejected() {
    for uri in ["/analyze", "/lighthouse", "/analyze-meta"] {
        let state = state_with(CannedAudit::ok(json!({})), None);
        let response = app(state).oneshot(post(uri, json!({}))).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "route {}", uri);
        assert_eq!(response_json(response).await["error"], "No URL provided");
    }
}

#[tokio::test]
async fn test_analyze_returns_canned_insight() {
    let state = state_with(CannedAudit::ok(json!({})), None);
    let response = app(state)
        .oneshot(post("/analyze", json!({ "url": "https://example.com" })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    assert_eq!(
        body["insight"],
        "AI Insight: https://example.com has a healthy engagement rate and is mobile optimized."
    );
    assert_eq!(body["metrics"]["visits"], 742);
    assert_eq!(body["metrics"]["bounceRate"], 28);
}

#[tokio::test]
async fn test_analyze_meta_drops_errored_phrases() {
    let page = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"<html><head><title>Acme</title>
               <meta name="description" content="Widgets"></head><body></body></html>"#,
        ))
        .mount(&page)
        .await;

    let state = state_with(CannedAudit::ok(json!({})), None);
    let response = app(state)
        .oneshot(post("/analyze-meta", json!({ "url": format!("{}/", page.uri()) })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    assert_eq!(
        body["meta_tags"],
        json!({ "title": "Acme", "description": "Widgets", "keywords": "No keywords" })
    );
    assert_eq!(body["key_phrases"], json!([["Acme"], ["No keywords"]]));
}

#[tokio::test]
async fn test_analyze_meta_surfaces_fetch_status() {
    let page = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&page)
        .await;

    let state = state_with(CannedAudit::ok(json!({})), None);
    let response = app(state)
        .oneshot(post("/analyze-meta", json!({ "url": page.uri() })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_analyze_meta_without_key_phrase_provider() {
    let mut state = state_with(CannedAudit::ok(json!({})), None);
    state.key_phrase_analyzer = None;

    let response = app(state)
        .oneshot(post("/analyze-meta", json!({ "url": "https://example.com" })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
}
