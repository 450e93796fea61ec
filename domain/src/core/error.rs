//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Question bank is empty")]
    EmptyBank,

    #[error("Invalid question #{0}: text cannot be empty")]
    InvalidQuestion(u32),

    #[error("Duplicate question id: {0}")]
    DuplicateQuestionId(u32),
}
