//! Questionnaire parameters.

use ryg_domain::ValidationPolicy;

/// Default number of questions shown to one respondent.
pub const DEFAULT_SAMPLE_SIZE: usize = 5;

/// Questionnaire parameters shared by the draw and classify use cases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuestionnaireConfig {
    /// Number of questions drawn per respondent.
    pub sample_size: usize,
    /// Completeness policy applied before classification.
    pub validation: ValidationPolicy,
}

impl Default for QuestionnaireConfig {
    fn default() -> Self {
        Self {
            sample_size: DEFAULT_SAMPLE_SIZE,
            validation: ValidationPolicy::default(),
        }
    }
}

impl QuestionnaireConfig {
    pub fn with_sample_size(mut self, sample_size: usize) -> Self {
        self.sample_size = sample_size;
        self
    }

    pub fn with_validation(mut self, validation: ValidationPolicy) -> Self {
        self.validation = validation;
        self
    }
}
