use std::time::Duration;

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use crate::{
    config::{CompletionProvider, Config},
    constants::prompts::SYSTEM_PROMPT,
    models::domain::CompletionRequest,
};

const MAX_ERROR_BODY_CHARS: usize = 500;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompletionError {
    #[error("Missing completion API key in configuration")]
    MissingCredentials,

    #[error("Completion service timed out after {after_secs}s")]
    UpstreamTimeout { after_secs: u64 },

    #[error("Completion service error{}: {message}", status_suffix(.status))]
    UpstreamError {
        status: Option<u16>,
        message: String,
    },

    #[error("Completion service returned no text")]
    EmptyResponse,
}

fn status_suffix(status: &Option<u16>) -> String {
    status
        .map(|code| format!(" (status {})", code))
        .unwrap_or_default()
}

/// The one upstream capability the rest of the crate depends on.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CompletionClient: Send + Sync {
    async fn complete(&self, request: CompletionRequest) -> Result<String, CompletionError>;
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct ChatCompletionBody<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct GeminiPart<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
struct GeminiContent<'a> {
    parts: Vec<GeminiPart<'a>>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiGenerationConfig {
    temperature: f32,
    max_output_tokens: u32,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiBody<'a> {
    system_instruction: GeminiContent<'a>,
    contents: Vec<GeminiContent<'a>>,
    generation_config: GeminiGenerationConfig,
}

/// `reqwest`-backed client for the configured upstream provider.
pub struct HttpCompletionClient {
    http: reqwest::Client,
    base_url: String,
    model: String,
    api_key: Option<SecretString>,
    provider: CompletionProvider,
    timeout: Duration,
}

impl HttpCompletionClient {
    pub fn new(config: &Config) -> Result<Self, CompletionError> {
        let http = reqwest::Client::builder()
            .timeout(config.completion_timeout())
            .build()
            .map_err(|e| CompletionError::UpstreamError {
                status: None,
                message: format!("Failed to build HTTP client: {}", e),
            })?;

        Ok(Self {
            http,
            base_url: config.completion_api_url.trim_end_matches('/').to_string(),
            model: config.completion_model.clone(),
            api_key: config.completion_api_key.clone(),
            provider: config.completion_provider,
            timeout: config.completion_timeout(),
        })
    }

    fn build_request(&self, api_key: &str, request: &CompletionRequest) -> reqwest::RequestBuilder {
        match self.provider {
            CompletionProvider::Chat => self
                .http
                .post(format!("{}/chat/completions", self.base_url))
                .bearer_auth(api_key)
                .json(&ChatCompletionBody {
                    model: &self.model,
                    messages: vec![
                        ChatMessage {
                            role: "system",
                            content: SYSTEM_PROMPT,
                        },
                        ChatMessage {
                            role: "user",
                            content: &request.prompt_text,
                        },
                    ],
                    temperature: request.temperature,
                    max_tokens: request.max_output_tokens,
                }),
            CompletionProvider::Gemini => self
                .http
                .post(format!(
                    "{}/models/{}:generateContent",
                    self.base_url, self.model
                ))
                .query(&[("key", api_key)])
                .json(&GeminiBody {
                    system_instruction: GeminiContent {
                        parts: vec![GeminiPart {
                            text: SYSTEM_PROMPT,
                        }],
                    },
                    contents: vec![GeminiContent {
                        parts: vec![GeminiPart {
                            text: &request.prompt_text,
                        }],
                    }],
                    generation_config: GeminiGenerationConfig {
                        temperature: request.temperature,
                        max_output_tokens: request.max_output_tokens,
                    },
                }),
        }
    }

    fn transport_error(&self, err: reqwest::Error) -> CompletionError {
        if err.is_timeout() {
            CompletionError::UpstreamTimeout {
                after_secs: self.timeout.as_secs(),
            }
        } else {
            CompletionError::UpstreamError {
                status: err.status().map(|s| s.as_u16()),
                message: err.to_string(),
            }
        }
    }
}

#[async_trait]
impl CompletionClient for HttpCompletionClient {
    async fn complete(&self, request: CompletionRequest) -> Result<String, CompletionError> {
        let api_key = self
            .api_key
            .as_ref()
            .ok_or(CompletionError::MissingCredentials)?;

        log::info!("Calling completion service with prompt: {}...", request.preview());

        let response = self
            .build_request(api_key.expose_secret(), &request)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = response.status();
        let body = response.text().await.map_err(|e| self.transport_error(e))?;

        if !status.is_success() {
            log::error!("Completion service returned {}: {}", status, body);
            return Err(CompletionError::UpstreamError {
                status: Some(status.as_u16()),
                message: body.chars().take(MAX_ERROR_BODY_CHARS).collect(),
            });
        }

        // Providers occasionally answer with a bare text body.
        let payload = serde_json::from_str::<Value>(&body).unwrap_or(Value::String(body));
        let text = extract_completion_text(&payload);

        if text.trim().is_empty() {
            return Err(CompletionError::EmptyResponse);
        }

        Ok(text)
    }
}

/// Pulls the completion text out of whichever response shape the upstream produced.
///
/// Recognised shapes, in order: a chat-completion choice list, a Gemini candidate
/// list, a direct `content` field (string or list of text parts), and a direct `text`
/// field. Anything else falls back to `output`, `result` or `generated_text`, and
/// finally to the serialized payload itself.
pub fn extract_completion_text(payload: &Value) -> String {
    if let Some(text) = payload.as_str() {
        return text.to_string();
    }

    if let Some(choice) = payload.pointer("/choices/0") {
        return choice
            .pointer("/message/content")
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
            .or_else(|| choice.get("text").and_then(Value::as_str))
            .unwrap_or_default()
            .to_string();
    }

    if let Some(candidate) = payload.pointer("/candidates/0") {
        return candidate
            .pointer("/content/parts")
            .map(join_text_parts)
            .unwrap_or_default();
    }

    if let Some(content) = payload.get("content").filter(|v| is_present(v)) {
        return match content {
            Value::String(text) => text.clone(),
            Value::Array(_) => join_text_parts(content),
            other => other.to_string(),
        };
    }

    if let Some(text) = non_empty_str(payload, "text") {
        return text.to_string();
    }

    log::warn!("Unexpected completion response format: {}", payload);

    ["output", "result", "generated_text"]
        .iter()
        .find_map(|key| non_empty_str(payload, key))
        .map(str::to_string)
        .unwrap_or_else(|| payload.to_string())
}

fn join_text_parts(parts: &Value) -> String {
    parts
        .as_array()
        .map(|parts| {
            parts
                .iter()
                .filter_map(|part| part.get("text").and_then(Value::as_str))
                .collect::<Vec<_>>()
                .join("")
        })
        .unwrap_or_default()
}

fn is_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::String(s) => !s.is_empty(),
        _ => true,
    }
}

fn non_empty_str<'a>(payload: &'a Value, key: &str) -> Option<&'a str> {
    payload
        .get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
}
