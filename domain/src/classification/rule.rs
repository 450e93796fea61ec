//! Count rule for status classification
//!
//! The rule only looks at how many answers are `true`, so it is independent
//! of presentation order.

use crate::core::question::AnsweredQuestion;
use crate::core::status::Status;
use serde::{Deserialize, Serialize};

/// Affirmative answers must exceed this count for `Caution`.
///
/// Kept literal. With a five-question sample only a fully affirmative set
/// (which is `Alert`) can exceed it, so `Caution` is unreachable from the
/// rule at that sample size. The value reads as if written for ten
/// questions; product owners have not confirmed which was intended.
pub const CAUTION_THRESHOLD: usize = 4;

/// Answer counts for one response set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AnswerTally {
    /// Number of responses
    pub total: usize,
    /// Number of `true` answers
    pub affirmative: usize,
}

impl AnswerTally {
    pub fn new(affirmative: usize, total: usize) -> Self {
        Self { total, affirmative }
    }

    /// Count answers, treating an absent answer as `false`.
    pub fn from_responses(responses: &[AnsweredQuestion]) -> Self {
        Self {
            total: responses.len(),
            affirmative: responses.iter().filter(|r| r.is_affirmative()).count(),
        }
    }

    /// Every answer is `true`. Holds vacuously for an empty set.
    pub fn is_unanimous(&self) -> bool {
        self.affirmative == self.total
    }
}

/// Classify a tally.
///
/// Precedence is fixed:
/// 1. all answers `true` → `Alert`
/// 2. more than [`CAUTION_THRESHOLD`] answers `true` → `Caution`
/// 3. otherwise → `Clear`
///
/// # Example
///
/// ```
/// use ryg_domain::{AnswerTally, Status, classify_by_tally};
///
/// assert_eq!(classify_by_tally(AnswerTally::new(5, 5)), Status::Alert);
/// assert_eq!(classify_by_tally(AnswerTally::new(5, 10)), Status::Caution);
/// assert_eq!(classify_by_tally(AnswerTally::new(4, 5)), Status::Clear);
/// ```
pub fn classify_by_tally(tally: AnswerTally) -> Status {
    if tally.is_unanimous() {
        Status::Alert
    } else if tally.affirmative > CAUTION_THRESHOLD {
        Status::Caution
    } else {
        Status::Clear
    }
}

/// Classify a response set with the count rule.
pub fn classify_responses(responses: &[AnsweredQuestion]) -> Status {
    classify_by_tally(AnswerTally::from_responses(responses))
}
