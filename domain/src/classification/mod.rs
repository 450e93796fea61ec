//! Response classification domain
//!
//! This module contains the pure parts of the classification pipeline.
//!
//! # Pipeline
//!
//! ```text
//! ┌──────────────┐    ┌──────────────────┐    ┌─────────────────────┐
//! │  Responses   │ ─▶ │ validate_responses│ ─▶ │ StatusClassifier    │ ─▶ Status
//! │ (client set) │    │ (completeness)    │    │  rule  │  service    │
//! └──────────────┘    └──────────────────┘    └─────────────────────┘
//! ```
//!
//! - [`validation`]: completeness check, runs before any classifier
//! - [`rule`]: deterministic count rule
//! - [`parsing`]: verdict token parsing for the external classifier
//! - [`outcome`]: [`Classification`](outcome::Classification) and the
//!   fault taxonomy behind the fallback status

pub mod outcome;
pub mod parsing;
pub mod rule;
pub mod validation;

pub use outcome::{Classification, ClassifierFault};
pub use parsing::parse_verdict;
pub use rule::{AnswerTally, CAUTION_THRESHOLD, classify_by_tally, classify_responses};
pub use validation::{ValidationError, ValidationPolicy, validate_responses};
