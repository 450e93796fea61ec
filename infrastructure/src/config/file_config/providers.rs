//! Provider configuration from TOML (`[providers]` section)

use ryg_application::ServiceClassifierConfig;
use ryg_domain::{ConfigIssue, ConfigIssueCode};
use serde::{Deserialize, Serialize};

/// OpenAI-compatible chat-completions provider configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOpenAiConfig {
    /// Environment variable name for the API key (default: "OPENAI_API_KEY").
    pub api_key_env: String,
    /// Direct API key (not recommended, use the env var instead).
    pub api_key: Option<String>,
    /// Base URL for the API (can be overridden for compatible endpoints).
    pub base_url: String,
    /// Model used for classification.
    pub model: String,
    /// Max tokens per verdict.
    pub max_tokens: u32,
    /// Sampling temperature. Anything above zero makes verdicts vary.
    pub temperature: f32,
}

impl Default for FileOpenAiConfig {
    fn default() -> Self {
        let defaults = ServiceClassifierConfig::default();
        Self {
            api_key_env: "OPENAI_API_KEY".to_string(),
            api_key: None,
            base_url: "https://api.openai.com".to_string(),
            model: defaults.model,
            max_tokens: defaults.max_tokens,
            temperature: defaults.temperature,
        }
    }
}

impl FileOpenAiConfig {
    /// The configured key, else the one in `api_key_env`. Blank values count as absent.
    pub fn resolve_api_key(&self) -> Option<String> {
        self.api_key
            .clone()
            .filter(|key| !key.trim().is_empty())
            .or_else(|| {
                std::env::var(&self.api_key_env)
                    .ok()
                    .filter(|key| !key.trim().is_empty())
            })
    }

    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();
        if self.model.trim().is_empty() {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::EmptyModelName {
                    field: "providers.openai.model".to_string(),
                },
                "providers.openai.model: model name is empty",
            ));
        }
        if self.temperature != 0.0 {
            issues.push(ConfigIssue::warning(
                ConfigIssueCode::NonDeterministicTemperature,
                format!(
                    "providers.openai.temperature is {}; identical submissions may get different verdicts",
                    self.temperature
                ),
            ));
        }
        issues
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileProvidersConfig {
    /// OpenAI API settings.
    pub openai: FileOpenAiConfig,
}
