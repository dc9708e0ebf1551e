//! reqwest implementation of [`SummarizerGateway`]
//!
//! Wire protocol:
//!
//! ```text
//! POST {api_url}/summarize
//! Content-Type: application/json
//! {"text": "...", "model": "..."}
//!
//! 2xx     {"summary": "<markdown>"}
//! non-2xx {"error": "<reason>"}
//! ```

use crate::config::FileApiConfig;
use async_trait::async_trait;
use pareto_application::{GatewayError, SummarizerGateway};
use pareto_domain::{SubmissionRequest, SubmissionResult, SummaryResponseBody, preview};
use std::time::Duration;
use tracing::{debug, info, warn};

/// Path appended to the configured base URL
const SUMMARIZE_PATH: &str = "summarize";

/// Gateway posting submissions to `{api_url}/summarize`
pub struct HttpSummarizerGateway {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpSummarizerGateway {
    /// Create a gateway without a request timeout
    pub fn new(api_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: Self::endpoint_for(api_url),
        }
    }

    /// Create a gateway whose requests fail with [`GatewayError::Timeout`]
    /// after `timeout`
    pub fn with_timeout(api_url: &str, timeout: Duration) -> Result<Self, GatewayError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| GatewayError::Transport(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            endpoint: Self::endpoint_for(api_url),
        })
    }

    /// Create a gateway from the `[api]` configuration section
    pub fn from_config(config: &FileApiConfig) -> Result<Self, GatewayError> {
        let gateway = match config.timeout() {
            Some(timeout) => Self::with_timeout(&config.url, timeout)?,
            None => Self::new(&config.url),
        };
        info!("HttpSummarizerGateway initialized for {}", gateway.endpoint);
        Ok(gateway)
    }

    /// Full URL requests are posted to
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn endpoint_for(api_url: &str) -> String {
        format!("{}/{}", api_url.trim().trim_end_matches('/'), SUMMARIZE_PATH)
    }
}

fn transport_error(e: reqwest::Error) -> GatewayError {
    if e.is_timeout() {
        GatewayError::Timeout
    } else {
        GatewayError::Transport(format!("Failed to reach summarization backend: {}", e))
    }
}

#[async_trait]
impl SummarizerGateway for HttpSummarizerGateway {
    async fn summarize(
        &self,
        request: &SubmissionRequest,
    ) -> Result<SubmissionResult, GatewayError> {
        debug!("POST {} (model {})", self.endpoint, request.model);

        let response = self
            .client
            .post(&self.endpoint)
            .json(request)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        let body = response.bytes().await.map_err(transport_error)?;

        let parsed: SummaryResponseBody = serde_json::from_slice(&body).map_err(|e| {
            warn!(
                "Non-JSON response ({}): {}",
                status.as_u16(),
                preview(&String::from_utf8_lossy(&body), 120)
            );
            GatewayError::MalformedResponse(format!("HTTP {}: {}", status.as_u16(), e))
        })?;

        if !status.is_success() {
            debug!("Backend answered {}", status);
        }

        Ok(SubmissionResult::from_body(status.is_success(), parsed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        Json, Router,
        http::{HeaderMap, StatusCode},
        response::IntoResponse,
        routing::post,
    };
    use pareto_domain::{FALLBACK_ERROR_MESSAGE, ModelId, SubmissionText};
    use serde_json::{Value, json};
    use std::sync::{Arc, Mutex};

    async fn spawn_backend(app: Router) -> String {
        let listener = tokio::net::TcpListener::bind(("127.0.0.1", 0)).await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        format!("http://{}/api", addr)
    }

    fn sample_request(model: &str) -> SubmissionRequest {
        let text = SubmissionText::parse(&"The borrow checker enforces aliasing rules. ".repeat(3))
            .unwrap();
        SubmissionRequest::new(text, ModelId::resolve(model))
    }

    #[test]
    fn test_endpoint_joins_path() {
        assert_eq!(
            HttpSummarizerGateway::new("http://localhost:5000/api").endpoint(),
            "http://localhost:5000/api/summarize"
        );
        assert_eq!(
            HttpSummarizerGateway::new("http://localhost:5000/api/").endpoint(),
            "http://localhost:5000/api/summarize"
        );
    }

    #[tokio::test]
    async fn test_success_posts_json_and_returns_summary() {
        let seen: Arc<Mutex<Option<(Value, String)>>> = Arc::new(Mutex::new(None));
        let recorder = seen.clone();
        let app = Router::new().route(
            "/api/summarize",
            post(move |headers: HeaderMap, Json(body): Json<Value>| {
                let recorder = recorder.clone();
                async move {
                    let content_type = headers
                        .get("content-type")
                        .and_then(|v| v.to_str().ok())
                        .unwrap_or_default()
                        .to_string();
                    *recorder.lock().unwrap() = Some((body, content_type));
                    Json(json!({"summary": "## Key points\n- one"}))
                }
            }),
        );
        let gateway = HttpSummarizerGateway::new(&spawn_backend(app).await);

        let result = gateway.summarize(&sample_request("")).await.unwrap();

        assert_eq!(
            result,
            SubmissionResult::Success {
                summary: "## Key points\n- one".to_string()
            }
        );
        let (body, content_type) = seen.lock().unwrap().clone().unwrap();
        assert_eq!(content_type, "application/json");
        assert_eq!(body["model"], "google/gemini-flash-1.5");
        assert_eq!(body["text"], sample_request("").text.as_str());
    }

    #[tokio::test]
    async fn test_missing_summary_is_empty_success() {
        let app = Router::new().route("/api/summarize", post(|| async { Json(json!({})) }));
        let gateway = HttpSummarizerGateway::new(&spawn_backend(app).await);

        let result = gateway.summarize(&sample_request("x/y")).await.unwrap();

        assert_eq!(
            result,
            SubmissionResult::Success {
                summary: String::new()
            }
        );
    }

    #[tokio::test]
    async fn test_error_status_uses_error_field() {
        let app = Router::new().route(
            "/api/summarize",
            post(|| async {
                (
                    StatusCode::PAYLOAD_TOO_LARGE,
                    Json(json!({"error": "bad input"})),
                )
            }),
        );
        let gateway = HttpSummarizerGateway::new(&spawn_backend(app).await);

        let result = gateway.summarize(&sample_request("")).await.unwrap();

        assert_eq!(
            result,
            SubmissionResult::Failure {
                error: "bad input".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_error_status_without_message_uses_fallback() {
        let app = Router::new().route(
            "/api/summarize",
            post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({}))) }),
        );
        let gateway = HttpSummarizerGateway::new(&spawn_backend(app).await);

        let result = gateway.summarize(&sample_request("")).await.unwrap();

        assert_eq!(
            result,
            SubmissionResult::Failure {
                error: FALLBACK_ERROR_MESSAGE.to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_non_json_body_is_malformed() {
        let app = Router::new().route(
            "/api/summarize",
            post(|| async { (StatusCode::BAD_GATEWAY, "<html>upstream down</html>").into_response() }),
        );
        let gateway = HttpSummarizerGateway::new(&spawn_backend(app).await);

        let err = gateway.summarize(&sample_request("")).await.unwrap_err();

        assert!(matches!(err, GatewayError::MalformedResponse(ref m) if m.starts_with("HTTP 502")));
    }

    #[tokio::test]
    async fn test_unknown_route_is_reported_not_crashed() {
        let app = Router::new();
        let gateway = HttpSummarizerGateway::new(&spawn_backend(app).await);

        // axum's default 404 has an empty body
        let err = gateway.summarize(&sample_request("")).await.unwrap_err();
        assert!(matches!(err, GatewayError::MalformedResponse(_)));
    }

    #[tokio::test]
    async fn test_connection_refused_is_transport_error() {
        let listener = std::net::TcpListener::bind(("127.0.0.1", 0)).unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let gateway = HttpSummarizerGateway::new(&format!("http://{}/api", addr));
        let err = gateway.summarize(&sample_request("")).await.unwrap_err();

        assert!(matches!(err, GatewayError::Transport(_)));
    }

    #[tokio::test]
    async fn test_slow_backend_times_out() {
        let app = Router::new().route(
            "/api/summarize",
            post(|| async {
                tokio::time::sleep(Duration::from_secs(5)).await;
                Json(json!({"summary": "late"}))
            }),
        );
        let url = spawn_backend(app).await;
        let gateway = HttpSummarizerGateway::with_timeout(&url, Duration::from_millis(100)).unwrap();

        let err = gateway.summarize(&sample_request("")).await.unwrap_err();

        assert!(matches!(err, GatewayError::Timeout));
    }

    #[test]
    fn test_from_config_respects_url() {
        let config = FileApiConfig {
            url: "https://example.com/api/".to_string(),
            timeout_seconds: Some(30),
        };
        let gateway = HttpSummarizerGateway::from_config(&config).unwrap();
        assert_eq!(gateway.endpoint(), "https://example.com/api/summarize");
    }
}
