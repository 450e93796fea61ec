//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and converted into application config
//! types on demand.

mod classifier;
mod logging;
mod providers;
mod questions;
mod server;

pub use classifier::FileClassifierConfig;
pub use logging::FileLoggingConfig;
pub use providers::{FileOpenAiConfig, FileProvidersConfig};
pub use questions::FileQuestionsConfig;
pub use server::FileServerConfig;

use ryg_application::{QuestionnaireConfig, ServiceClassifierConfig};
use ryg_domain::ConfigIssue;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// HTTP server settings
    pub server: FileServerConfig,
    /// Question bank and sampling settings
    pub questions: FileQuestionsConfig,
    /// Classifier selection
    pub classifier: FileClassifierConfig,
    /// External provider settings
    pub providers: FileProvidersConfig,
    /// Audit log settings
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    ///
    /// This is the single entry point for config validation. Errors make the
    /// configuration unusable; warnings are logged and startup continues.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        issues.extend(self.questions.to_questionnaire_config().1);
        issues.extend(self.classifier.parse_strategy().1);
        issues.extend(self.classifier.timeout_issues());
        issues.extend(self.providers.openai.validate());

        issues
    }

    pub fn questionnaire_config(&self) -> QuestionnaireConfig {
        self.questions.to_questionnaire_config().0
    }

    pub fn service_classifier_config(&self) -> ServiceClassifierConfig {
        let openai = &self.providers.openai;
        ServiceClassifierConfig::default()
            .with_model(openai.model.clone())
            .with_temperature(openai.temperature)
            .with_max_tokens(openai.max_tokens)
            .with_timeout(Duration::from_secs(self.classifier.timeout_secs))
    }
}
