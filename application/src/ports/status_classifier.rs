//! Status classifier port
//!
//! One deployment picks exactly one implementation; strategies are never
//! blended per request.

use async_trait::async_trait;
use ryg_domain::{AnsweredQuestion, Classification};
use tokio_util::sync::CancellationToken;

/// Classifies a validated response set.
#[async_trait]
pub trait StatusClassifier: Send + Sync {
    /// Short strategy name, used in logs
    fn strategy(&self) -> &'static str;

    /// Classify the responses.
    ///
    /// Callers validate completeness first. Never fails: implementations
    /// that can fail report a [`Classification::Fallback`]. `cancel` is
    /// request-scoped; a cancelled call returns as soon as possible.
    async fn classify(
        &self,
        responses: &[AnsweredQuestion],
        cancel: &CancellationToken,
    ) -> Classification;
}
