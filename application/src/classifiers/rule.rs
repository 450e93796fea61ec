//! Deterministic count-rule classifier

use crate::ports::status_classifier::StatusClassifier;
use async_trait::async_trait;
use ryg_domain::{AnsweredQuestion, Classification, classify_responses};
use tokio_util::sync::CancellationToken;

/// Classifies by counting `true` answers. Pure; always determined.
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleClassifier;

impl RuleClassifier {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl StatusClassifier for RuleClassifier {
    fn strategy(&self) -> &'static str {
        "rule"
    }

    async fn classify(
        &self,
        responses: &[AnsweredQuestion],
        _cancel: &CancellationToken,
    ) -> Classification {
        Classification::Determined(classify_responses(responses))
    }
}
