//! Question bank
//!
//! Supplies the canonical question set. Falls back to the built-in bank when
//! storage is absent, empty or invalid, and persists the defaults on a
//! best-effort basis.

use crate::ports::question_repository::{QuestionRepository, StorageError};
use ryg_domain::{Question, default_questions, validate_bank};
use std::sync::Arc;
use tokio::sync::OnceCell;
use tracing::{debug, error, info, warn};

/// Process-lifetime view of the question bank.
///
/// The first [`load`](Self::load) reads storage; concurrent first callers
/// wait on the same initialization and every later call returns the same set.
pub struct QuestionBank {
    repository: Arc<dyn QuestionRepository>,
    questions: OnceCell<Arc<[Question]>>,
}

impl QuestionBank {
    pub fn new(repository: Arc<dyn QuestionRepository>) -> Self {
        Self {
            repository,
            questions: OnceCell::new(),
        }
    }

    /// Return the bank, initializing it on first use.
    ///
    /// Fails only when storage could not be read (for a reason other than
    /// being absent or corrupt) and the default bank could not be written
    /// either. A failed initialization is retried on the next call.
    pub async fn load(&self) -> Result<Arc<[Question]>, StorageError> {
        self.questions
            .get_or_try_init(|| async { self.load_or_default().await.map(Arc::from) })
            .await
            .cloned()
    }

    async fn load_or_default(&self) -> Result<Vec<Question>, StorageError> {
        let location = self.repository.location();

        let read_error = match self.repository.load().await {
            Ok(Some(questions)) => match validate_bank(&questions) {
                Ok(()) => {
                    info!("Loaded {} questions from {}", questions.len(), location);
                    return Ok(questions);
                }
                Err(e) => {
                    warn!("Question bank at {} is invalid: {}", location, e);
                    None
                }
            },
            Ok(None) => {
                info!("No question bank at {}, using defaults", location);
                None
            }
            Err(StorageError::Corrupt(detail)) => {
                warn!("Question bank at {} is corrupt: {}", location, detail);
                None
            }
            Err(e) => {
                warn!("Could not read question bank at {}: {}", location, e);
                Some(e)
            }
        };

        let defaults = default_questions();
        match self.repository.save(&defaults).await {
            Ok(()) => debug!("Persisted default question bank to {}", location),
            Err(save_error) => {
                if let Some(read_error) = read_error {
                    error!(
                        "Question bank unavailable: read failed and defaults could not be written: {}",
                        save_error
                    );
                    return Err(read_error);
                }
                warn!(
                    "Could not persist default question bank to {}: {}",
                    location, save_error
                );
            }
        }

        Ok(defaults)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    enum Stored {
        Missing,
        Corrupt,
        Unreadable,
        Questions(Vec<Question>),
    }

    /// In-memory repository with scripted read results and failing writes on demand
    struct MemoryRepository {
        stored: Mutex<Stored>,
        fail_saves: bool,
        loads: AtomicUsize,
        saves: Mutex<Vec<Vec<Question>>>,
    }

    impl MemoryRepository {
        fn new(stored: Stored) -> Self {
            Self {
                stored: Mutex::new(stored),
                fail_saves: false,
                loads: AtomicUsize::new(0),
                saves: Mutex::new(Vec::new()),
            }
        }

        fn failing_saves(mut self) -> Self {
            self.fail_saves = true;
            self
        }
    }

    #[async_trait]
    impl QuestionRepository for MemoryRepository {
        async fn load(&self) -> Result<Option<Vec<Question>>, StorageError> {
            self.loads.fetch_add(1, Ordering::SeqCst);
            tokio::task::yield_now().await;
            match &*self.stored.lock().unwrap() {
                Stored::Missing => Ok(None),
                Stored::Corrupt => Err(StorageError::Corrupt("expected value".into())),
                Stored::Unreadable => Err(StorageError::Io(std::io::Error::new(
                    std::io::ErrorKind::PermissionDenied,
                    "denied",
                ))),
                Stored::Questions(q) => Ok(Some(q.clone())),
            }
        }

        async fn save(&self, questions: &[Question]) -> Result<(), StorageError> {
            if self.fail_saves {
                return Err(StorageError::Io(std::io::Error::new(
                    std::io::ErrorKind::PermissionDenied,
                    "read-only",
                )));
            }
            self.saves.lock().unwrap().push(questions.to_vec());
            *self.stored.lock().unwrap() = Stored::Questions(questions.to_vec());
            Ok(())
        }

        fn location(&self) -> String {
            "memory".to_string()
        }
    }

    #[tokio::test]
    async fn test_returns_stored_questions() {
        let stored = vec![Question::new(10, "A"), Question::new(11, "B")];
        let repo = Arc::new(MemoryRepository::new(Stored::Questions(stored.clone())));
        let bank = QuestionBank::new(repo.clone());

        assert_eq!(&*bank.load().await.unwrap(), stored.as_slice());
        assert!(repo.saves.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_missing_store_is_defaulted_and_persisted() {
        let repo = Arc::new(MemoryRepository::new(Stored::Missing));
        let bank = QuestionBank::new(repo.clone());

        let questions = bank.load().await.unwrap();

        assert_eq!(questions.len(), 20);
        assert_eq!(repo.saves.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_corrupt_empty_or_invalid_store_is_defaulted() {
        let cases = [
            Stored::Corrupt,
            Stored::Questions(vec![]),
            Stored::Questions(vec![Question::new(1, "A"), Question::new(1, "B")]),
        ];
        for stored in cases {
            let repo = Arc::new(MemoryRepository::new(stored));
            let questions = QuestionBank::new(repo.clone()).load().await.unwrap();
            assert_eq!(questions.len(), 20);
            assert_eq!(repo.saves.lock().unwrap().len(), 1);
        }
    }

    #[tokio::test]
    async fn test_persist_failure_still_returns_defaults() {
        let repo = Arc::new(MemoryRepository::new(Stored::Missing).failing_saves());
        let questions = QuestionBank::new(repo).load().await.unwrap();
        assert_eq!(questions.len(), 20);
    }

    #[tokio::test]
    async fn test_unreadable_and_unwritable_is_fatal() {
        let repo = Arc::new(MemoryRepository::new(Stored::Unreadable).failing_saves());
        let result = QuestionBank::new(repo).load().await;
        assert!(matches!(result, Err(StorageError::Io(_))));
    }

    #[tokio::test]
    async fn test_unreadable_but_writable_uses_defaults() {
        let repo = Arc::new(MemoryRepository::new(Stored::Unreadable));
        let questions = QuestionBank::new(repo).load().await.unwrap();
        assert_eq!(questions.len(), 20);
    }

    #[tokio::test]
    async fn test_loaded_once_per_process() {
        let repo = Arc::new(MemoryRepository::new(Stored::Missing));
        let bank = Arc::new(QuestionBank::new(repo.clone()));

        let mut handles = Vec::new();
        for _ in 0..8 {
            let bank = Arc::clone(&bank);
            handles.push(tokio::spawn(async move { bank.load().await.unwrap() }));
        }
        let mut results = Vec::new();
        for handle in handles {
            results.push(handle.await.unwrap());
        }

        assert_eq!(repo.loads.load(Ordering::SeqCst), 1);
        assert_eq!(repo.saves.lock().unwrap().len(), 1);
        assert!(results.iter().all(|r| Arc::ptr_eq(r, &results[0])));
    }
}
