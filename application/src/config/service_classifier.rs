//! External classifier parameters.

use std::time::Duration;

/// Parameters for [`ServiceClassifier`](crate::classifiers::ServiceClassifier).
///
/// Temperature defaults to 0 and the token cap to 10: the reply is one word.
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceClassifierConfig {
    /// Model identifier sent to the completion endpoint.
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,
    /// Upper bound for one external call.
    pub timeout: Duration,
}

impl Default for ServiceClassifierConfig {
    fn default() -> Self {
        Self {
            model: "gpt-4o".to_string(),
            temperature: 0.0,
            max_tokens: 10,
            timeout: Duration::from_secs(30),
        }
    }
}

impl ServiceClassifierConfig {
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Creates the config with a timeout specified in seconds.
    pub fn with_timeout_seconds(self, seconds: u64) -> Self {
        self.with_timeout(Duration::from_secs(seconds))
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }
}
