use crate::constants::{defaults, endpoints, models, prompts};
use crate::error::Result;
use crate::llm::traits::*;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::{Duration, Instant};

/// Everything the client needs to reach the completion endpoint.
///
/// Resolved once (see `Settings::completion_config`) and handed to
/// [`CompletionClient::new`]; the client never reads the environment.
#[derive(Debug, Clone)]
pub struct CompletionConfig {
    pub api_key: Option<String>,
    /// Name of the variable the key was expected in, for error messages.
    pub api_key_env: String,
    pub base_url: String,
    pub model: String,
    pub timeout: Duration,
    /// Human-readable service name used in transport error messages.
    pub service_name: String,
}

impl Default for CompletionConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            api_key_env: defaults::API_KEY_ENV.to_string(),
            base_url: endpoints::GROQ_BASE_URL.to_string(),
            model: models::DEFAULT_GROQ_MODEL.to_string(),
            timeout: Duration::from_secs(defaults::REQUEST_TIMEOUT_SECS),
            service_name: defaults::SERVICE_NAME.to_string(),
        }
    }
}

impl CompletionConfig {
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn endpoint(&self) -> String {
        format!(
            "{}{}",
            self.base_url.trim_end_matches('/'),
            endpoints::CHAT_COMPLETIONS_PATH
        )
    }

    /// The key, if one is configured and not blank.
    pub fn credential(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
    }
}

/// Build the full message list for one request: the system prompt, the prior
/// history in order, then the current user message.
pub fn build_messages(system_prompt: &str, history: &[Turn], user_message: &str) -> Vec<Turn> {
    let mut messages = Vec::with_capacity(history.len() + 2);
    messages.push(Turn::system(system_prompt));
    messages.extend(history.iter().cloned());
    messages.push(Turn::user(user_message.trim()));
    messages
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: &'a [Turn],
    temperature: f32,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Debug, Deserialize)]
struct ChatMessage {
    content: Option<String>,
}

/// One-shot client for an OpenAI-compatible chat-completions endpoint: one
/// request per turn, no retry, no streaming.
pub struct CompletionClient {
    client: reqwest::Client,
    config: CompletionConfig,
}

impl CompletionClient {
    pub fn new(config: CompletionConfig) -> Result<Self> {
        let client = reqwest::Client::builder().timeout(config.timeout).build()?;
        Ok(Self { client, config })
    }

    /// Use a caller-built HTTP client (proxy or TLS settings). The caller is
    /// responsible for applying a request timeout.
    pub fn with_http_client(config: CompletionConfig, client: reqwest::Client) -> Self {
        Self { client, config }
    }

    fn transport_failure(&self, detail: impl Into<String>) -> CompletionOutcome {
        CompletionOutcome::Failure(CompletionFailure::Transport {
            service: self.config.service_name.clone(),
            detail: detail.into(),
        })
    }

    fn describe_send_error(&self, err: &reqwest::Error) -> String {
        if err.is_timeout() {
            format!("request timed out after {:?}", self.config.timeout)
        } else {
            err.to_string()
        }
    }
}

#[async_trait::async_trait]
impl CompletionBackend for CompletionClient {
    async fn complete(
        &self,
        system_prompt: &str,
        history: &[Turn],
        user_message: &str,
        temperature: f32,
    ) -> CompletionOutcome {
        let Some(api_key) = self.config.credential() else {
            tracing::warn!(env_var = %self.config.api_key_env, "no API key configured, skipping request");
            return CompletionOutcome::Failure(CompletionFailure::MissingCredential {
                env_var: self.config.api_key_env.clone(),
            });
        };

        let messages = build_messages(system_prompt, history, user_message);
        let request_body = ChatRequest {
            model: &self.config.model,
            messages: &messages,
            temperature,
        };

        let url = self.config.endpoint();
        tracing::debug!(
            url = %url,
            model = %self.config.model,
            messages = messages.len(),
            temperature,
            "sending chat completion request"
        );

        let started = Instant::now();
        let response = match self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {api_key}"))
            .json(&request_body)
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!("chat completion request failed: {}", e);
                return self.transport_failure(self.describe_send_error(&e));
            }
        };

        let status = response.status().as_u16();
        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => {
                tracing::warn!("failed to read completion response body: {}", e);
                return self.transport_failure(self.describe_send_error(&e));
            }
        };

        tracing::debug!(
            status,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "chat completion response received"
        );

        interpret_response(status, &body, &self.config.service_name)
    }
}

/// Map a raw HTTP status and body to an outcome.
fn interpret_response(status: u16, body: &str, service: &str) -> CompletionOutcome {
    if !(200..300).contains(&status) {
        let detail = error_detail(body);
        tracing::warn!(status, detail = %detail, "completion endpoint returned an error");
        return CompletionOutcome::Failure(CompletionFailure::Http { status, detail });
    }

    let invalid = |detail: String| {
        CompletionOutcome::Failure(CompletionFailure::InvalidResponse {
            service: service.to_string(),
            detail,
        })
    };

    let parsed: ChatResponse = match serde_json::from_str(body) {
        Ok(parsed) => parsed,
        Err(e) => return invalid(format!("Failed to parse response: {e}")),
    };

    match parsed
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
    {
        Some(reply) => CompletionOutcome::Success(format!("{reply}{}", prompts::DISCLAIMER)),
        None => invalid("No response from API".to_string()),
    }
}

/// Prefer `error.message` from a JSON error body, else the raw body.
fn error_detail(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|json| match json.get("error")?.get("message")? {
            Value::String(message) => Some(message.clone()),
            Value::Null => None,
            other => Some(other.to_string()),
        })
        .unwrap_or_else(|| body.to_string())
}
