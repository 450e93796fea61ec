//! Application layer for ryg-status
//!
//! This crate contains use cases, port definitions, the two classifier
//! strategies, and application configuration. It depends only on the
//! domain layer.

pub mod classifiers;
pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use classifiers::{RuleClassifier, ServiceClassifier};
pub use config::{ClassifierStrategy, QuestionnaireConfig, ServiceClassifierConfig};
pub use ports::{
    classification_logger::{ClassificationEvent, ClassificationLogger, NoClassificationLogger},
    llm_gateway::{CompletionRequest, GatewayError, LlmGateway},
    question_repository::{QuestionRepository, StorageError},
    status_classifier::StatusClassifier,
};
pub use use_cases::classify_responses::{ClassifyResponsesError, ClassifyResponsesUseCase};
pub use use_cases::draw_questions::DrawQuestionsUseCase;
pub use use_cases::question_bank::QuestionBank;
