//! Prompt domain
//!
//! Builds the transcript that drives the external text classifier.

mod template;

pub use template::TranscriptTemplate;
