//! OpenAI-compatible chat-completions gateway
//!
//! Posts to `{base_url}/v1/chat/completions` with bearer authentication and
//! returns the content of the first choice.

use crate::config::FileOpenAiConfig;
use async_trait::async_trait;
use ryg_application::ports::llm_gateway::{CompletionRequest, GatewayError, LlmGateway};
use ryg_domain::Message;
use serde::{Deserialize, Serialize};
use tracing::debug;

const COMPLETIONS_PATH: &str = "/v1/chat/completions";

/// Longest error body kept in a [`GatewayError::HttpStatus`]
const MAX_ERROR_BODY: usize = 512;

/// [`LlmGateway`] for OpenAI and compatible endpoints
pub struct OpenAiGateway {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl OpenAiGateway {
    pub fn new(base_url: impl Into<String>, api_key: Option<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url, api_key)
    }

    pub fn with_client(
        client: reqwest::Client,
        base_url: impl Into<String>,
        api_key: Option<String>,
    ) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.filter(|key| !key.trim().is_empty()),
        }
    }

    /// Build from the `[providers.openai]` section, resolving the key from
    /// the environment.
    pub fn from_config(config: &FileOpenAiConfig) -> Self {
        Self::new(config.base_url.clone(), config.resolve_api_key())
    }

    pub fn endpoint(&self) -> String {
        format!("{}{}", self.base_url, COMPLETIONS_PATH)
    }
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: &'a [Message],
    max_tokens: u32,
    temperature: f32,
}

impl<'a> From<&'a CompletionRequest> for ChatRequest<'a> {
    fn from(request: &'a CompletionRequest) -> Self {
        Self {
            model: &request.model,
            messages: &request.messages,
            max_tokens: request.max_tokens,
            temperature: request.temperature,
        }
    }
}

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Deserialize)]
struct ChatMessage {
    #[serde(default)]
    content: Option<String>,
}

fn map_transport_error(e: reqwest::Error) -> GatewayError {
    if e.is_timeout() {
        GatewayError::Timeout
    } else if e.is_decode() {
        GatewayError::InvalidResponse(e.to_string())
    } else {
        GatewayError::ConnectionError(e.to_string())
    }
}

#[async_trait]
impl LlmGateway for OpenAiGateway {
    fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    async fn complete(&self, request: &CompletionRequest) -> Result<String, GatewayError> {
        let api_key = self.api_key.as_deref().ok_or_else(|| {
            GatewayError::MissingCredential("no API key for the completions endpoint".to_string())
        })?;

        debug!("POST {} (model {})", self.endpoint(), request.model);

        let response = self
            .client
            .post(self.endpoint())
            .bearer_auth(api_key)
            .json(&ChatRequest::from(request))
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            let mut body = response.text().await.unwrap_or_default();
            if body.len() > MAX_ERROR_BODY {
                let mut cut = MAX_ERROR_BODY;
                while !body.is_char_boundary(cut) {
                    cut -= 1;
                }
                body.truncate(cut);
            }
            return Err(GatewayError::HttpStatus {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: ChatResponse = response.json().await.map_err(map_transport_error)?;

        parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|content| !content.trim().is_empty())
            .ok_or_else(|| GatewayError::InvalidResponse("no content in first choice".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{Json, Router, http::HeaderMap, http::StatusCode, routing::post};
    use serde_json::{Value, json};

    /// Serve `router` on an ephemeral port and return its base URL
    async fn serve(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{}", addr)
    }

    fn request() -> CompletionRequest {
        CompletionRequest {
            model: "gpt-4o".to_string(),
            messages: vec![Message::system("Judge."), Message::user("True")],
            temperature: 0.0,
            max_tokens: 10,
        }
    }

    #[tokio::test]
    async fn test_returns_first_choice_and_sends_expected_body() {
        let router = Router::new().route(
            COMPLETIONS_PATH,
            post(|headers: HeaderMap, Json(body): Json<Value>| async move {
                if headers.get("authorization").and_then(|v| v.to_str().ok())
                    != Some("Bearer sk-test")
                {
                    return (StatusCode::UNAUTHORIZED, Json(json!({"error": "bad key"})));
                }
                assert_eq!(body["model"], "gpt-4o");
                assert_eq!(body["max_tokens"], 10);
                assert_eq!(body["messages"][0]["role"], "system");
                assert_eq!(body["messages"][1]["content"], "True");
                (
                    StatusCode::OK,
                    Json(json!({"choices": [{"message": {"role": "assistant", "content": "Caution"}}]})),
                )
            }),
        );
        let base = serve(router).await;

        let gateway = OpenAiGateway::new(format!("{}/", base), Some("sk-test".to_string()));
        assert_eq!(gateway.complete(&request()).await.unwrap(), "Caution");
    }

    #[tokio::test]
    async fn test_non_success_status_is_reported() {
        let router = Router::new().route(
            COMPLETIONS_PATH,
            post(|| async { (StatusCode::TOO_MANY_REQUESTS, "slow down") }),
        );
        let base = serve(router).await;

        let gateway = OpenAiGateway::new(base, Some("sk-test".to_string()));
        match gateway.complete(&request()).await {
            Err(GatewayError::HttpStatus { status, body }) => {
                assert_eq!(status, 429);
                assert_eq!(body, "slow down");
            }
            other => panic!("expected HttpStatus, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_empty_choices_are_invalid() {
        let router = Router::new().route(
            COMPLETIONS_PATH,
            post(|| async { Json(json!({"choices": []})) }),
        );
        let base = serve(router).await;

        let gateway = OpenAiGateway::new(base, Some("sk-test".to_string()));
        assert!(matches!(
            gateway.complete(&request()).await,
            Err(GatewayError::InvalidResponse(_))
        ));
    }

    #[tokio::test]
    async fn test_unparseable_body_is_invalid() {
        let router = Router::new().route(COMPLETIONS_PATH, post(|| async { "not json" }));
        let base = serve(router).await;

        let gateway = OpenAiGateway::new(base, Some("sk-test".to_string()));
        assert!(matches!(
            gateway.complete(&request()).await,
            Err(GatewayError::InvalidResponse(_))
        ));
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_a_connection_error() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let gateway = OpenAiGateway::new(format!("http://{}", addr), Some("sk-test".to_string()));
        assert!(matches!(
            gateway.complete(&request()).await,
            Err(GatewayError::ConnectionError(_))
        ));
    }

    #[tokio::test]
    async fn test_missing_key_is_reported_without_a_request() {
        let gateway = OpenAiGateway::new("http://127.0.0.1:9", Some("   ".to_string()));
        assert!(!gateway.is_configured());
        assert!(matches!(
            gateway.complete(&request()).await,
            Err(GatewayError::MissingCredential(_))
        ));
    }

    #[test]
    fn test_endpoint_strips_trailing_slash() {
        let gateway = OpenAiGateway::new("https://api.openai.com/", None);
        assert_eq!(
            gateway.endpoint(),
            "https://api.openai.com/v1/chat/completions"
        );
    }
}
