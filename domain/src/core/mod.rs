//! Core domain concepts shared across all subdomains.
//!
//! - [`question::Question`]: a statement from the question bank
//! - [`question::AnsweredQuestion`]: a statement plus the respondent's answer
//! - [`status::Status`]: the three-level classification result
//! - [`error::DomainError`]: domain-level errors

pub mod error;
pub mod question;
pub mod status;
