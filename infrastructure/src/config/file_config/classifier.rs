//! Classifier selection (`[classifier]` section)

use ryg_application::ClassifierStrategy;
use ryg_domain::{ConfigIssue, ConfigIssueCode};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileClassifierConfig {
    /// "rule" or "service"
    pub strategy: String,
    /// Upper bound for one external classification call, in seconds
    pub timeout_secs: u64,
}

impl Default for FileClassifierConfig {
    fn default() -> Self {
        Self {
            strategy: ClassifierStrategy::default().as_str().to_string(),
            timeout_secs: 30,
        }
    }
}

impl FileClassifierConfig {
    /// Parse the strategy name, reporting unknown values.
    pub fn parse_strategy(&self) -> (Option<ClassifierStrategy>, Vec<ConfigIssue>) {
        match self.strategy.parse::<ClassifierStrategy>() {
            Ok(strategy) => (Some(strategy), vec![]),
            Err(_) => (
                None,
                vec![ConfigIssue::error(
                    ConfigIssueCode::InvalidEnumValue {
                        field: "classifier.strategy".to_string(),
                        value: self.strategy.clone(),
                        valid_values: ClassifierStrategy::VALID_VALUES
                            .iter()
                            .map(|v| v.to_string())
                            .collect(),
                    },
                    format!(
                        "classifier.strategy: unknown value '{}', expected 'rule' or 'service'",
                        self.strategy
                    ),
                )],
            ),
        }
    }

    pub fn timeout_issues(&self) -> Vec<ConfigIssue> {
        if self.timeout_secs == 0 {
            vec![ConfigIssue::error(
                ConfigIssueCode::ZeroTimeout,
                "classifier.timeout_secs must be at least 1",
            )]
        } else {
            vec![]
        }
    }
}
