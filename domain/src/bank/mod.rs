//! Question bank domain
//!
//! - [`defaults`]: the built-in bank used when storage is absent or corrupt
//! - [`sampler`]: draws the subset shown to one respondent

pub mod defaults;
pub mod sampler;

use crate::core::error::DomainError;
use crate::core::question::Question;
use std::collections::HashSet;

/// Check that a bank is usable: non-empty, non-blank texts, unique ids.
pub fn validate_bank(questions: &[Question]) -> Result<(), DomainError> {
    if questions.is_empty() {
        return Err(DomainError::EmptyBank);
    }

    let mut seen = HashSet::with_capacity(questions.len());
    for question in questions {
        if !question.is_valid() {
            return Err(DomainError::InvalidQuestion(question.id()));
        }
        if !seen.insert(question.id()) {
            return Err(DomainError::DuplicateQuestionId(question.id()));
        }
    }

    Ok(())
}
