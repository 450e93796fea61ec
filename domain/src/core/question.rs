//! Question value objects

use serde::{Deserialize, Serialize};

/// A statement from the question bank (Value Object)
///
/// Immutable once created. The `id` is unique within a bank and is what the
/// client echoes back when it submits answers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Question {
    id: u32,
    text: String,
}

impl Question {
    /// Create a new question
    ///
    /// # Panics
    /// Panics if the text is empty or only whitespace
    pub fn new(id: u32, text: impl Into<String>) -> Self {
        let text = text.into();
        assert!(!text.trim().is_empty(), "Question text cannot be empty");
        Self { id, text }
    }

    /// Try to create a new question, returning None if invalid
    pub fn try_new(id: u32, text: impl Into<String>) -> Option<Self> {
        let text = text.into();
        if text.trim().is_empty() {
            None
        } else {
            Some(Self { id, text })
        }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Whether the text is non-blank.
    ///
    /// Deserialized questions bypass [`Question::try_new`], so stores check
    /// this before trusting a loaded bank.
    pub fn is_valid(&self) -> bool {
        !self.text.trim().is_empty()
    }

    /// Pair this question with an answer.
    pub fn answer(&self, answer: bool) -> AnsweredQuestion {
        AnsweredQuestion::new(self.id, self.text.clone(), Some(answer))
    }
}

impl std::fmt::Display for Question {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{} {}", self.id, self.text)
    }
}

/// A question as submitted by the client, with the respondent's answer.
///
/// `answer` is `None` until the respondent picks a value. JSON `null` and a
/// missing field both deserialize to `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnsweredQuestion {
    pub id: u32,
    pub text: String,
    #[serde(default)]
    pub answer: Option<bool>,
}

impl AnsweredQuestion {
    pub fn new(id: u32, text: impl Into<String>, answer: Option<bool>) -> Self {
        Self {
            id,
            text: text.into(),
            answer,
        }
    }

    /// An answered question with a definite answer.
    pub fn answered(id: u32, text: impl Into<String>, answer: bool) -> Self {
        Self::new(id, text, Some(answer))
    }

    /// A question the respondent has not answered yet.
    pub fn unanswered(id: u32, text: impl Into<String>) -> Self {
        Self::new(id, text, None)
    }

    pub fn is_answered(&self) -> bool {
        self.answer.is_some()
    }

    /// The answer with absent treated as `false`.
    pub fn is_affirmative(&self) -> bool {
        self.answer.unwrap_or(false)
    }
}

impl From<&Question> for AnsweredQuestion {
    fn from(q: &Question) -> Self {
        AnsweredQuestion::unanswered(q.id(), q.text())
    }
}
