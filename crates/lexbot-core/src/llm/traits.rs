use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
    System,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Assistant => "assistant",
            Role::System => "system",
        }
    }
}

/// One role-tagged message. Immutable once built.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Turn {
    role: Role,
    content: String,
}

impl Turn {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }

    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

/// Why a completion request produced no reply.
///
/// `Display` is the text shown to the user in place of the reply.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CompletionFailure {
    #[error("Error: {env_var} not set. Please set your API key in environment variables.")]
    MissingCredential { env_var: String },

    #[error("Error {status}: {detail}")]
    Http { status: u16, detail: String },

    #[error("Error connecting to {service}: {detail}. Please check your API key and internet connection.")]
    Transport { service: String, detail: String },

    /// A 2xx response whose body did not carry a reply.
    #[error("Error connecting to {service}: {detail}. Please check your API key and internet connection.")]
    InvalidResponse { service: String, detail: String },
}

impl CompletionFailure {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MissingCredential { .. } => "missing_credential",
            Self::Http { .. } => "http_error",
            Self::Transport { .. } => "transport_error",
            Self::InvalidResponse { .. } => "invalid_response",
        }
    }
}

/// Result of a single completion request.
#[derive(Debug, Clone, PartialEq)]
pub enum CompletionOutcome {
    /// Reply text with the disclaimer already appended.
    Success(String),
    Failure(CompletionFailure),
}

impl CompletionOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::Success(_) => "success",
            Self::Failure(failure) => failure.kind(),
        }
    }

    /// The assistant text to display and record for this outcome.
    pub fn render(self) -> String {
        match self {
            Self::Success(text) => text,
            Self::Failure(failure) => failure.to_string(),
        }
    }
}

/// The completion seam. `SessionController` talks to this rather than to HTTP.
#[async_trait::async_trait]
pub trait CompletionBackend: Send + Sync {
    /// Run one request for `user_message` on top of `history`.
    ///
    /// Never fails at the type level: every failure is folded into
    /// [`CompletionOutcome::Failure`].
    async fn complete(
        &self,
        system_prompt: &str,
        history: &[Turn],
        user_message: &str,
        temperature: f32,
    ) -> CompletionOutcome;
}
