//! Application-level configuration.
//!
//! This module provides configuration types that control how use cases behave:
//!
//! - [`QuestionnaireConfig`]: sample size and completeness policy
//! - [`ServiceClassifierConfig`]: model, sampling parameters and timeout for
//!   the external classifier
//! - [`ClassifierStrategy`]: which classifier a deployment runs

pub mod questionnaire;
pub mod service_classifier;
pub mod strategy;

pub use questionnaire::QuestionnaireConfig;
pub use service_classifier::ServiceClassifierConfig;
pub use strategy::ClassifierStrategy;
