//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.

pub mod classification_logger;
pub mod llm_gateway;
pub mod question_repository;
pub mod status_classifier;
