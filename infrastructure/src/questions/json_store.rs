//! JSON file question store
//!
//! The file holds a pretty-printed JSON array of `{ "id", "text" }` records.

use async_trait::async_trait;
use ryg_application::ports::question_repository::{QuestionRepository, StorageError};
use ryg_domain::Question;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

/// [`QuestionRepository`] backed by a single JSON file
pub struct JsonQuestionStore {
    path: PathBuf,
}

impl JsonQuestionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| "questions.json".into());
        name.push(format!(".{}.tmp", std::process::id()));
        self.path.with_file_name(name)
    }
}

#[async_trait]
impl QuestionRepository for JsonQuestionStore {
    async fn load(&self) -> Result<Option<Vec<Question>>, StorageError> {
        let content = match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        if content.trim().is_empty() {
            return Ok(Some(Vec::new()));
        }

        let questions: Vec<Question> =
            serde_json::from_str(&content).map_err(|e| StorageError::Corrupt(e.to_string()))?;

        if let Some(blank) = questions.iter().find(|q| !q.is_valid()) {
            return Err(StorageError::Corrupt(format!(
                "question {} has empty text",
                blank.id()
            )));
        }

        debug!("Read {} questions from {}", questions.len(), self.path.display());
        Ok(Some(questions))
    }

    async fn save(&self, questions: &[Question]) -> Result<(), StorageError> {
        let json = serde_json::to_string_pretty(questions)
            .map_err(|e| StorageError::Serialization(e.to_string()))?;

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            tokio::fs::create_dir_all(parent).await?;
        }

        let temp = self.temp_path();
        tokio::fs::write(&temp, json).await?;
        if let Err(e) = tokio::fs::rename(&temp, &self.path).await {
            let _ = tokio::fs::remove_file(&temp).await;
            return Err(e.into());
        }

        debug!("Wrote {} questions to {}", questions.len(), self.path.display());
        Ok(())
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}
