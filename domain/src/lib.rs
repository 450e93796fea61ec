//! Domain layer for ryg-status
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Questionnaire
//!
//! A respondent answers a short sample of yes/no statements drawn from the
//! question bank. Each answered statement is an [`AnsweredQuestion`].
//!
//! ## Classification
//!
//! The answers are classified into one of three ordinal statuses:
//!
//! - **Alert** (0): the respondent is flagged
//! - **Caution** (1): undetermined, flag for human review
//! - **Clear** (2): nothing to flag
//!
//! Two strategies exist: a deterministic count rule ([`classify_by_tally`])
//! and an external text classifier driven by a [`Message`] transcript.
//! Whenever the external classifier cannot produce a trustworthy verdict the
//! result is a [`Classification::Fallback`], which always maps to `Caution`.

pub mod bank;
pub mod classification;
pub mod config;
pub mod core;
pub mod prompt;
pub mod session;

// Re-export commonly used types
pub use bank::{defaults::default_questions, sampler::sample_questions, validate_bank};
pub use classification::{
    outcome::{Classification, ClassifierFault},
    parsing::parse_verdict,
    rule::{AnswerTally, CAUTION_THRESHOLD, classify_by_tally, classify_responses},
    validation::{ValidationError, ValidationPolicy, validate_responses},
};
pub use config::{ConfigIssue, ConfigIssueCode, Severity};
pub use core::{
    error::DomainError,
    question::{AnsweredQuestion, Question},
    status::Status,
};
pub use prompt::TranscriptTemplate;
pub use session::entities::{Message, Role};
