//! Completeness validation for submitted responses.

use crate::core::question::AnsweredQuestion;
use thiserror::Error;

/// Reasons a response set is rejected before classification
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("All questions must be answered before submitting.")]
    Incomplete {
        /// Ids of the unanswered questions, in submission order
        unanswered: Vec<u32>,
    },

    /// Same message as `Incomplete`.
    #[error("All questions must be answered before submitting.")]
    Empty,
}

/// How strict the completeness check is for a given caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationPolicy {
    /// Reject a zero-length submission
    pub require_non_empty: bool,
}

impl Default for ValidationPolicy {
    fn default() -> Self {
        Self {
            require_non_empty: true,
        }
    }
}

impl ValidationPolicy {
    /// Policy that accepts an empty submission.
    pub fn allow_empty() -> Self {
        Self {
            require_non_empty: false,
        }
    }
}

/// Check that every response carries an answer.
///
/// Missing answers are reported before emptiness; an empty set has no
/// missing answers, so the two never overlap.
pub fn validate_responses(
    responses: &[AnsweredQuestion],
    policy: ValidationPolicy,
) -> Result<(), ValidationError> {
    let unanswered: Vec<u32> = responses
        .iter()
        .filter(|r| !r.is_answered())
        .map(|r| r.id)
        .collect();

    if !unanswered.is_empty() {
        return Err(ValidationError::Incomplete { unanswered });
    }

    if responses.is_empty() && policy.require_non_empty {
        return Err(ValidationError::Empty);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_complete_set_passes() {
        let set = vec![
            AnsweredQuestion::answered(1, "Q1", true),
            AnsweredQuestion::answered(2, "Q2", false),
        ];
        assert!(validate_responses(&set, ValidationPolicy::default()).is_ok());
    }

    #[test]
    fn test_any_absent_answer_fails() {
        let set = vec![
            AnsweredQuestion::answered(1, "Q1", true),
            AnsweredQuestion::unanswered(2, "Q2"),
            AnsweredQuestion::answered(3, "Q3", false),
            AnsweredQuestion::unanswered(4, "Q4"),
        ];
        let err = validate_responses(&set, ValidationPolicy::allow_empty()).unwrap_err();
        assert_eq!(
            err,
            ValidationError::Incomplete {
                unanswered: vec![2, 4]
            }
        );
        assert_eq!(
            err.to_string(),
            "All questions must be answered before submitting."
        );
    }

    #[test]
    fn test_empty_set_depends_on_policy() {
        assert_eq!(
            validate_responses(&[], ValidationPolicy::default()),
            Err(ValidationError::Empty)
        );
        assert!(validate_responses(&[], ValidationPolicy::allow_empty()).is_ok());
    }

    #[test]
    fn test_empty_set_uses_contract_message() {
        assert_eq!(
            ValidationError::Empty.to_string(),
            "All questions must be answered before submitting."
        );
    }
}
