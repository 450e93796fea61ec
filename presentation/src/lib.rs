//! Presentation layer for ryg-status
//!
//! This crate contains the CLI definition and the HTTP router exposing the
//! questionnaire.

pub mod cli;
pub mod http;

// Re-export commonly used types
pub use cli::commands::{ClassifierArg, Cli};
pub use http::{ApiError, AppState, status_router};
