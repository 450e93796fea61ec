//! Draw questions use case

use crate::config::QuestionnaireConfig;
use crate::ports::question_repository::StorageError;
use crate::use_cases::question_bank::QuestionBank;
use rand::Rng;
use ryg_domain::{Question, sample_questions};
use std::sync::Arc;
use tracing::debug;

/// Draws a fresh random sample from the question bank for one respondent.
pub struct DrawQuestionsUseCase {
    bank: Arc<QuestionBank>,
    sample_size: usize,
}

impl DrawQuestionsUseCase {
    pub fn new(bank: Arc<QuestionBank>, config: &QuestionnaireConfig) -> Self {
        Self {
            bank,
            sample_size: config.sample_size,
        }
    }

    pub fn sample_size(&self) -> usize {
        self.sample_size
    }

    /// Draw using the thread-local generator.
    pub async fn execute(&self) -> Result<Vec<Question>, StorageError> {
        let bank = self.bank.load().await?;
        let mut rng = rand::thread_rng();
        Ok(self.draw(&bank, &mut rng))
    }

    /// Draw with a caller-supplied generator, for reproducible samples.
    pub async fn execute_with_rng<R>(&self, rng: &mut R) -> Result<Vec<Question>, StorageError>
    where
        R: Rng + Send + ?Sized,
    {
        let bank = self.bank.load().await?;
        Ok(self.draw(&bank, rng))
    }

    fn draw<R: Rng + ?Sized>(&self, bank: &[Question], rng: &mut R) -> Vec<Question> {
        let sample = sample_questions(bank, self.sample_size, rng);
        debug!(
            "Drew {} of {} questions: {:?}",
            sample.len(),
            bank.len(),
            sample.iter().map(Question::id).collect::<Vec<_>>()
        );
        sample
    }
}
