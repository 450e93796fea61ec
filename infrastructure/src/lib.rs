//! Infrastructure layer for ryg-status
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod logging;
pub mod providers;
pub mod questions;

// Re-export commonly used types
pub use config::{
    ConfigLoader, FileClassifierConfig, FileConfig, FileLoggingConfig, FileOpenAiConfig,
    FileProvidersConfig, FileQuestionsConfig, FileServerConfig,
};
pub use logging::JsonlClassificationLogger;
pub use providers::OpenAiGateway;
pub use questions::JsonQuestionStore;
