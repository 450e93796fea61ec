//! External-service classifier
//!
//! Sends the answer transcript to a text-completion endpoint and parses a
//! one-word verdict. Every failure degrades to the fallback status; the
//! cause is kept as a [`ClassifierFault`] so operators can tell
//! configuration, service and parse problems apart.

use crate::config::ServiceClassifierConfig;
use crate::ports::llm_gateway::{CompletionRequest, GatewayError, LlmGateway};
use crate::ports::status_classifier::StatusClassifier;
use async_trait::async_trait;
use ryg_domain::{
    AnsweredQuestion, Classification, ClassifierFault, Status, TranscriptTemplate, parse_verdict,
};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, warn};

/// Classifier backed by an [`LlmGateway`]
#[derive(Clone)]
pub struct ServiceClassifier {
    gateway: Arc<dyn LlmGateway>,
    config: ServiceClassifierConfig,
}

impl ServiceClassifier {
    pub fn new(gateway: Arc<dyn LlmGateway>, config: ServiceClassifierConfig) -> Self {
        Self { gateway, config }
    }

    pub fn config(&self) -> &ServiceClassifierConfig {
        &self.config
    }

    /// Build the completion request for a response set.
    pub fn build_request(&self, responses: &[AnsweredQuestion]) -> CompletionRequest {
        CompletionRequest {
            model: self.config.model.clone(),
            messages: TranscriptTemplate::build(responses),
            temperature: self.config.temperature,
            max_tokens: self.config.max_tokens,
        }
    }

    async fn request_verdict(
        &self,
        responses: &[AnsweredQuestion],
        cancel: &CancellationToken,
    ) -> Result<Status, ClassifierFault> {
        if !self.gateway.is_configured() {
            return Err(ClassifierFault::Configuration(
                "API credential is not configured".to_string(),
            ));
        }

        let request = self.build_request(responses);
        debug!(
            "Requesting verdict from {} ({} transcript messages)",
            request.model,
            request.messages.len()
        );

        let call = tokio::time::timeout(self.config.timeout, self.gateway.complete(&request));
        let reply = tokio::select! {
            _ = cancel.cancelled() => return Err(ClassifierFault::Cancelled),
            reply = call => reply,
        };

        let text = match reply {
            Err(_) => {
                return Err(ClassifierFault::Service(format!(
                    "{} after {}s",
                    GatewayError::Timeout,
                    self.config.timeout.as_secs()
                )));
            }
            Ok(Err(GatewayError::MissingCredential(detail))) => {
                return Err(ClassifierFault::Configuration(detail));
            }
            Ok(Err(e)) => return Err(ClassifierFault::Service(e.to_string())),
            Ok(Ok(text)) => text,
        };

        let verdict = text.trim();
        info!("Classifier response: {}", verdict);

        parse_verdict(verdict).ok_or_else(|| ClassifierFault::Parse(verdict.to_string()))
    }
}

#[async_trait]
impl StatusClassifier for ServiceClassifier {
    fn strategy(&self) -> &'static str {
        "service"
    }

    async fn classify(
        &self,
        responses: &[AnsweredQuestion],
        cancel: &CancellationToken,
    ) -> Classification {
        match self.request_verdict(responses, cancel).await {
            Ok(status) => Classification::Determined(status),
            Err(fault) => {
                match &fault {
                    ClassifierFault::Configuration(_) | ClassifierFault::Service(_) => {
                        error!("Classification fell back to {}: {}", Status::FALLBACK, fault)
                    }
                    ClassifierFault::Parse(_) => {
                        warn!("Classification fell back to {}: {}", Status::FALLBACK, fault)
                    }
                    ClassifierFault::Cancelled => debug!("Classification cancelled"),
                }
                Classification::Fallback(fault)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ryg_domain::{Message, Role};
    use std::sync::Mutex;
    use std::time::Duration;

    enum Script {
        Reply(&'static str),
        HttpError(u16),
        InvalidBody,
        Hang,
    }

    /// Mock gateway that answers every request with the same script
    struct ScriptedGateway {
        configured: bool,
        script: Script,
        requests: Mutex<Vec<CompletionRequest>>,
    }

    impl ScriptedGateway {
        fn new(script: Script) -> Self {
            Self {
                configured: true,
                script,
                requests: Mutex::new(Vec::new()),
            }
        }

        fn unconfigured() -> Self {
            Self {
                configured: false,
                ..Self::new(Script::Reply("Clear"))
            }
        }

        fn request_count(&self) -> usize {
            self.requests.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl LlmGateway for ScriptedGateway {
        fn is_configured(&self) -> bool {
            self.configured
        }

        async fn complete(&self, request: &CompletionRequest) -> Result<String, GatewayError> {
            self.requests.lock().unwrap().push(request.clone());
            match &self.script {
                Script::Reply(text) => Ok(text.to_string()),
                Script::HttpError(status) => Err(GatewayError::HttpStatus {
                    status: *status,
                    body: "upstream error".to_string(),
                }),
                Script::InvalidBody => Err(GatewayError::InvalidResponse(
                    "no choices in response".to_string(),
                )),
                Script::Hang => std::future::pending().await,
            }
        }
    }

    fn responses() -> Vec<AnsweredQuestion> {
        vec![
            AnsweredQuestion::answered(4, "Knowing the future removes the freedom to choose.", true),
            AnsweredQuestion::answered(1, "Comfort built on illusion is worth preserving.", false),
        ]
    }

    fn classifier(gateway: Arc<ScriptedGateway>) -> ServiceClassifier {
        ServiceClassifier::new(gateway, ServiceClassifierConfig::default())
    }

    async fn classify_with(gateway: Arc<ScriptedGateway>) -> Classification {
        classifier(gateway)
            .classify(&responses(), &CancellationToken::new())
            .await
    }

    #[tokio::test]
    async fn test_matching_verdicts() {
        for (reply, expected) in [
            ("Alert", Status::Alert),
            (" caution\n", Status::Caution),
            ("CLEAR", Status::Clear),
        ] {
            let gateway = Arc::new(ScriptedGateway::new(Script::Reply(reply)));
            assert_eq!(
                classify_with(gateway).await,
                Classification::Determined(expected)
            );
        }
    }

    #[tokio::test]
    async fn test_missing_credential_skips_request() {
        let gateway = Arc::new(ScriptedGateway::unconfigured());
        let result = classify_with(gateway.clone()).await;

        assert_eq!(result.status(), Status::Caution);
        assert!(matches!(
            result.fault(),
            Some(ClassifierFault::Configuration(_))
        ));
        assert_eq!(gateway.request_count(), 0);
    }

    #[tokio::test]
    async fn test_clone_shares_gateway() {
        let gateway = Arc::new(ScriptedGateway::new(Script::Reply("Clear")));
        let original = classifier(gateway.clone());
        let copy = original.clone();

        copy.classify(&responses(), &CancellationToken::new()).await;
        original
            .classify(&responses(), &CancellationToken::new())
            .await;

        assert_eq!(gateway.request_count(), 2);
        assert_eq!(copy.config(), original.config());
    }

    #[tokio::test]
    async fn test_http_error_falls_back() {
        let gateway = Arc::new(ScriptedGateway::new(Script::HttpError(503)));
        let result = classify_with(gateway).await;

        assert_eq!(result.status(), Status::Caution);
        assert!(matches!(result.fault(), Some(ClassifierFault::Service(_))));
    }

    #[tokio::test]
    async fn test_invalid_body_falls_back() {
        let gateway = Arc::new(ScriptedGateway::new(Script::InvalidBody));
        let result = classify_with(gateway).await;

        assert!(matches!(result.fault(), Some(ClassifierFault::Service(_))));
        assert_eq!(result.status(), Status::Caution);
    }

    #[tokio::test]
    async fn test_unexpected_output_falls_back() {
        let gateway = Arc::new(ScriptedGateway::new(Script::Reply("Green")));
        let result = classify_with(gateway).await;

        assert_eq!(
            result,
            Classification::Fallback(ClassifierFault::Parse("Green".to_string()))
        );
        assert_eq!(result.status(), Status::Caution);
    }

    #[tokio::test(start_paused = true)]
    async fn test_timeout_falls_back() {
        let gateway = Arc::new(ScriptedGateway::new(Script::Hang));
        let classifier = ServiceClassifier::new(
            gateway,
            ServiceClassifierConfig::default().with_timeout(Duration::from_secs(2)),
        );

        let result = classifier
            .classify(&responses(), &CancellationToken::new())
            .await;

        assert_eq!(result.status(), Status::Caution);
        assert!(matches!(result.fault(), Some(ClassifierFault::Service(_))));
    }

    #[tokio::test]
    async fn test_cancellation_frees_pending_call() {
        let gateway = Arc::new(ScriptedGateway::new(Script::Hang));
        let classifier = classifier(gateway);
        let cancel = CancellationToken::new();

        let trigger = cancel.clone();
        tokio::spawn(async move { trigger.cancel() });

        let result = classifier.classify(&responses(), &cancel).await;
        assert_eq!(result, Classification::Fallback(ClassifierFault::Cancelled));
    }

    #[tokio::test]
    async fn test_request_carries_transcript_and_pinned_parameters() {
        let gateway = Arc::new(ScriptedGateway::new(Script::Reply("Clear")));
        classify_with(gateway.clone()).await;

        let requests = gateway.requests.lock().unwrap();
        let request = &requests[0];
        assert_eq!(request.model, "gpt-4o");
        assert_eq!(request.temperature, 0.0);
        assert_eq!(request.max_tokens, 10);
        assert_eq!(request.messages[0].role, Role::System);
        assert_eq!(
            request.messages[1],
            Message::user("Knowing the future removes the freedom to choose.")
        );
        assert_eq!(request.messages[2], Message::user("True"));
        assert_eq!(request.messages[4], Message::user("False"));
        assert_eq!(request.messages.len(), 6);
    }
}
