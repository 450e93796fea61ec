//! Questionnaire configuration (`[questions]` section)

use ryg_application::QuestionnaireConfig;
use ryg_domain::{ConfigIssue, ConfigIssueCode, ValidationPolicy};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileQuestionsConfig {
    /// JSON file holding the question bank (created with defaults if missing)
    pub bank_path: PathBuf,
    /// Questions shown per respondent
    pub sample_size: usize,
    /// Reject submissions with no answers at all
    pub require_non_empty: bool,
}

impl Default for FileQuestionsConfig {
    fn default() -> Self {
        let defaults = QuestionnaireConfig::default();
        Self {
            bank_path: PathBuf::from("questions.json"),
            sample_size: defaults.sample_size,
            require_non_empty: defaults.validation.require_non_empty,
        }
    }
}

impl FileQuestionsConfig {
    pub fn to_questionnaire_config(&self) -> (QuestionnaireConfig, Vec<ConfigIssue>) {
        let mut issues = Vec::new();
        if self.sample_size == 0 {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::ZeroSampleSize,
                "questions.sample_size must be at least 1",
            ));
        }

        let config = QuestionnaireConfig::default()
            .with_sample_size(self.sample_size)
            .with_validation(ValidationPolicy {
                require_non_empty: self.require_non_empty,
            });
        (config, issues)
    }
}
