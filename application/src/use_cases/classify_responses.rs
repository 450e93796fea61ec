//! Classify responses use case
//!
//! Validates a submitted response set and hands it to the configured
//! classifier. Validation always runs first; the classifier never sees an
//! incomplete submission.

use crate::ports::classification_logger::{
    ClassificationEvent, ClassificationLogger, NoClassificationLogger,
};
use crate::ports::status_classifier::StatusClassifier;
use ryg_domain::{
    AnswerTally, AnsweredQuestion, Classification, ValidationError, ValidationPolicy,
    validate_responses,
};
use std::sync::Arc;
use thiserror::Error;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

/// Errors returned to the caller instead of a status
#[derive(Error, Debug)]
pub enum ClassifyResponsesError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Use case for classifying one respondent's answers
pub struct ClassifyResponsesUseCase {
    classifier: Arc<dyn StatusClassifier>,
    policy: ValidationPolicy,
    logger: Arc<dyn ClassificationLogger>,
}

impl ClassifyResponsesUseCase {
    pub fn new(classifier: Arc<dyn StatusClassifier>, policy: ValidationPolicy) -> Self {
        Self {
            classifier,
            policy,
            logger: Arc::new(NoClassificationLogger),
        }
    }

    /// Set a structured logger for classification events.
    pub fn with_classification_logger(mut self, logger: Arc<dyn ClassificationLogger>) -> Self {
        self.logger = logger;
        self
    }

    pub fn strategy(&self) -> &'static str {
        self.classifier.strategy()
    }

    pub async fn execute(
        &self,
        responses: &[AnsweredQuestion],
        cancel: &CancellationToken,
    ) -> Result<Classification, ClassifyResponsesError> {
        if let Err(e) = validate_responses(responses, self.policy) {
            info!("Rejected submission of {} responses: {}", responses.len(), e);
            self.logger
                .log(ClassificationEvent::rejected(&e, responses.len()));
            return Err(e.into());
        }

        let tally = AnswerTally::from_responses(responses);
        debug!(
            "Classifying {} responses ({} affirmative) with {} classifier",
            tally.total,
            tally.affirmative,
            self.classifier.strategy()
        );

        let classification = self.classifier.classify(responses, cancel).await;

        info!(
            "Classified submission as {}{}",
            classification.status(),
            if classification.is_fallback() {
                " (fallback)"
            } else {
                ""
            }
        );
        self.logger.log(ClassificationEvent::from_classification(
            self.classifier.strategy(),
            tally,
            &classification,
        ));

        Ok(classification)
    }
}
