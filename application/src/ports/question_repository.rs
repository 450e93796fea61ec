//! Question storage port

use async_trait::async_trait;
use ryg_domain::Question;
use thiserror::Error;

/// Errors that can occur while reading or writing the question store
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Question store I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Question store is corrupt: {0}")]
    Corrupt(String),

    #[error("Could not serialize questions: {0}")]
    Serialization(String),
}

/// Persistent storage for the question bank
#[async_trait]
pub trait QuestionRepository: Send + Sync {
    /// Read the stored questions.
    ///
    /// Returns `Ok(None)` when nothing is stored yet and
    /// [`StorageError::Corrupt`] when the stored data cannot be parsed.
    async fn load(&self) -> Result<Option<Vec<Question>>, StorageError>;

    /// Replace the stored questions.
    async fn save(&self, questions: &[Question]) -> Result<(), StorageError>;

    /// Human-readable location for log messages.
    fn location(&self) -> String;
}
