use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::constants::{defaults, endpoints, models, paths};
use crate::context::{PromptComposer, ResponseLength, Topic};
use crate::error::{LexError, Result};
use crate::llm::CompletionConfig;
use crate::session::RequestOptions;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub llm: LlmSettings,
    #[serde(default)]
    pub chat: ChatSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LlmSettings {
    pub base_url: String,
    pub model: String,
    pub api_key_env: String,
    pub timeout_secs: u64,
    pub service_name: String,
}

/// Starting values for the per-turn controls.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatSettings {
    pub topic: Topic,
    pub length: ResponseLength,
    pub temperature: f32,
    /// Replaces the built-in persona when set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub persona: Option<String>,
}

impl Default for LlmSettings {
    fn default() -> Self {
        Self {
            base_url: endpoints::GROQ_BASE_URL.to_string(),
            model: models::DEFAULT_GROQ_MODEL.to_string(),
            api_key_env: defaults::API_KEY_ENV.to_string(),
            timeout_secs: defaults::REQUEST_TIMEOUT_SECS,
            service_name: defaults::SERVICE_NAME.to_string(),
        }
    }
}

impl Default for ChatSettings {
    fn default() -> Self {
        Self {
            topic: Topic::General,
            length: ResponseLength::Medium,
            temperature: defaults::TEMPERATURE,
            persona: None,
        }
    }
}

impl Settings {
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(paths::CONFIG_DIR)
            .join(paths::CONFIG_FILE)
    }

    /// Load from the default location, falling back to defaults when the file
    /// is missing or unreadable.
    pub fn load() -> Self {
        let config_path = Self::config_path();
        match Self::load_from(&config_path) {
            Ok(settings) => settings,
            Err(e) => {
                tracing::warn!("ignoring config at {}: {}", config_path.display(), e);
                Self::default()
            }
        }
    }

    /// Load from an explicit path. A missing file yields defaults; a
    /// malformed one is an error.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self).map_err(|e| LexError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Get the API key from the environment variable named in settings.
    pub fn api_key(&self) -> Option<String> {
        std::env::var(&self.llm.api_key_env).ok()
    }

    /// Resolve everything the completion client needs, reading the key from
    /// the environment exactly once.
    pub fn completion_config(&self) -> CompletionConfig {
        CompletionConfig {
            api_key: self.api_key(),
            api_key_env: self.llm.api_key_env.clone(),
            base_url: self.llm.base_url.clone(),
            model: self.llm.model.clone(),
            timeout: Duration::from_secs(self.llm.timeout_secs.max(1)),
            service_name: self.llm.service_name.clone(),
        }
    }

    pub fn request_options(&self) -> RequestOptions {
        RequestOptions::new(self.chat.topic, self.chat.length, self.chat.temperature)
    }

    pub fn prompt_composer(&self) -> PromptComposer {
        match self.chat.persona {
            Some(ref persona) if !persona.trim().is_empty() => {
                PromptComposer::new().with_base(persona.clone())
            }
            _ => PromptComposer::new(),
        }
    }
}
