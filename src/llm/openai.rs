use super::http_client::build_provider_client_with_timeout;
use super::scrub::sanitize_api_error;
use super::traits::TextGenerator;
use super::types::{GenerationFailure, GenerationRequest};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

const OPENAI_CHAT_COMPLETIONS_URL: &str = "https://api.openai.com/v1/chat/completions";

pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";
pub const DEFAULT_TEMPERATURE: f64 = 0.7;

// ─── Wire types ──────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<Message>,
    temperature: f64,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct Message {
    role: &'static str,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

// ─── Generator ───────────────────────────────────────────────────────────────

/// OpenAI chat-completions text generator.
pub struct OpenAiGenerator {
    /// Pre-computed `"Bearer <key>"` header value (avoids `format!` per request).
    cached_auth_header: String,
    client: Client,
    endpoint: String,
    model: String,
    temperature: f64,
}

impl OpenAiGenerator {
    pub fn new(api_key: &str, model: &str, temperature: f64, timeout: Duration) -> Self {
        Self {
            cached_auth_header: format!("Bearer {api_key}"),
            client: build_provider_client_with_timeout(timeout),
            endpoint: OPENAI_CHAT_COMPLETIONS_URL.to_string(),
            model: model.to_string(),
            temperature,
        }
    }

    /// Point at an OpenAI-compatible endpoint (self-hosted gateways, tests).
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    fn build_request(&self, request: &GenerationRequest) -> ChatRequest {
        ChatRequest {
            model: self.model.clone(),
            messages: vec![
                Message {
                    role: "system",
                    content: request.system_prompt.clone(),
                },
                Message {
                    role: "user",
                    content: request.user_prompt.clone(),
                },
            ],
            temperature: self.temperature,
            max_tokens: request.max_tokens,
        }
    }

    fn classify_send_error(error: &reqwest::Error) -> GenerationFailure {
        if error.is_timeout() {
            GenerationFailure::Timeout {
                provider: "OpenAI".into(),
            }
        } else {
            GenerationFailure::Transport {
                provider: "OpenAI".into(),
                message: sanitize_api_error(&error.to_string()),
            }
        }
    }

    async fn classify_error_response(response: reqwest::Response) -> GenerationFailure {
        let status = response.status();
        match status.as_u16() {
            401 => GenerationFailure::Auth {
                provider: "OpenAI".into(),
            },
            429 => GenerationFailure::RateLimited {
                provider: "OpenAI".into(),
            },
            code if status.is_server_error() => GenerationFailure::Server {
                provider: "OpenAI".into(),
                status: code,
            },
            code => {
                let body = response.text().await.unwrap_or_default();
                GenerationFailure::Transport {
                    provider: "OpenAI".into(),
                    message: format!("status {code}: {}", sanitize_api_error(&body)),
                }
            }
        }
    }

    async fn call_api(&self, request: &GenerationRequest) -> Result<String, GenerationFailure> {
        let response = self
            .client
            .post(&self.endpoint)
            .header("Authorization", &self.cached_auth_header)
            .json(&self.build_request(request))
            .send()
            .await
            .map_err(|e| Self::classify_send_error(&e))?;

        if !response.status().is_success() {
            return Err(Self::classify_error_response(response).await);
        }

        let chat_response: ChatResponse =
            response
                .json()
                .await
                .map_err(|_| GenerationFailure::Malformed {
                    provider: "OpenAI".into(),
                })?;

        chat_response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .map(|text| text.trim().to_string())
            .filter(|text| !text.is_empty())
            .ok_or(GenerationFailure::Malformed {
                provider: "OpenAI".into(),
            })
    }
}

impl TextGenerator for OpenAiGenerator {
    fn name(&self) -> &str {
        "openai"
    }

    fn generate<'a>(
        &'a self,
        request: &'a GenerationRequest,
    ) -> Pin<Box<dyn Future<Output = Result<String, GenerationFailure>> + Send + 'a>> {
        Box::pin(async move { self.call_api(request).await })
    }
}
