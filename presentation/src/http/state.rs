//! Shared handler state

use ryg_application::{ClassifyResponsesUseCase, DrawQuestionsUseCase};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

/// Use cases shared by every request.
#[derive(Clone)]
pub struct AppState {
    pub draw_questions: Arc<DrawQuestionsUseCase>,
    pub classify_responses: Arc<ClassifyResponsesUseCase>,
    /// Parent of every per-request token; cancelled on shutdown.
    pub shutdown: CancellationToken,
}

impl AppState {
    pub fn new(
        draw_questions: Arc<DrawQuestionsUseCase>,
        classify_responses: Arc<ClassifyResponsesUseCase>,
    ) -> Self {
        Self {
            draw_questions,
            classify_responses,
            shutdown: CancellationToken::new(),
        }
    }

    pub fn with_shutdown(mut self, shutdown: CancellationToken) -> Self {
        self.shutdown = shutdown;
        self
    }
}
