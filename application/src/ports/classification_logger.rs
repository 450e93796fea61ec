//! Port for structured classification logging.
//!
//! Defines the [`ClassificationLogger`] trait for recording every
//! classification outcome (verdicts, fallbacks and rejected submissions) to
//! a structured audit log.
//!
//! This is separate from `tracing`-based operation logs: tracing handles
//! human-readable diagnostics, while this port keeps a machine-readable
//! record that lets operators tell configuration, service and parse faults
//! apart.

use ryg_domain::{AnswerTally, Classification, ValidationError};
use serde::Serialize;

/// One audit record per submission.
///
/// Serializes with a `type` tag (`classified`, `fallback`,
/// `validation_rejected`). Statuses are written by name, not ordinal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClassificationEvent {
    Classified {
        strategy: &'static str,
        status: &'static str,
        tally: AnswerTally,
    },
    Fallback {
        strategy: &'static str,
        status: &'static str,
        tally: AnswerTally,
        fault: &'static str,
        detail: String,
    },
    ValidationRejected {
        reason: String,
        total: usize,
        unanswered: Vec<u32>,
    },
}

impl ClassificationEvent {
    /// Event for a finished classifier run.
    pub fn from_classification(
        strategy: &'static str,
        tally: AnswerTally,
        classification: &Classification,
    ) -> Self {
        let status = classification.status().as_str();
        match classification {
            Classification::Determined(_) => Self::Classified {
                strategy,
                status,
                tally,
            },
            Classification::Fallback(fault) => Self::Fallback {
                strategy,
                status,
                tally,
                fault: fault.kind(),
                detail: fault.to_string(),
            },
        }
    }

    /// Event for a submission rejected before classification.
    pub fn rejected(error: &ValidationError, total: usize) -> Self {
        let unanswered = match error {
            ValidationError::Incomplete { unanswered } => unanswered.clone(),
            ValidationError::Empty => Vec::new(),
        };
        Self::ValidationRejected {
            reason: error.to_string(),
            total,
            unanswered,
        }
    }

    /// The `type` tag written to the log.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Classified { .. } => "classified",
            Self::Fallback { .. } => "fallback",
            Self::ValidationRejected { .. } => "validation_rejected",
        }
    }
}

/// Port for logging classification events to a structured log.
///
/// The `log` method is synchronous and non-fallible so logging never
/// changes the outcome of a request.
pub trait ClassificationLogger: Send + Sync {
    /// Record a classification event.
    fn log(&self, event: ClassificationEvent);
}

/// No-op implementation for tests and when logging is disabled.
pub struct NoClassificationLogger;

impl ClassificationLogger for NoClassificationLogger {
    fn log(&self, _event: ClassificationEvent) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use ryg_domain::{ClassifierFault, Status};
    use serde_json::json;

    #[test]
    fn test_fallback_event_carries_fault_kind() {
        let event = ClassificationEvent::from_classification(
            "service",
            AnswerTally::new(2, 5),
            &Classification::Fallback(ClassifierFault::Service("HTTP 503".into())),
        );
        assert_eq!(event.kind(), "fallback");

        let value = serde_json::to_value(&event).unwrap();
        assert_eq!(value["type"], "fallback");
        assert_eq!(value["fault"], "service");
        assert_eq!(value["status"], "Caution");
        assert_eq!(value["tally"], json!({"total": 5, "affirmative": 2}));
    }

    #[test]
    fn test_classified_event() {
        let event = ClassificationEvent::from_classification(
            "rule",
            AnswerTally::new(0, 5),
            &Classification::Determined(Status::Clear),
        );
        assert_eq!(
            event,
            ClassificationEvent::Classified {
                strategy: "rule",
                status: "Clear",
                tally: AnswerTally::new(0, 5),
            }
        );
        let value = serde_json::to_value(&event).unwrap();
        assert_eq!(value["type"], "classified");
        assert!(value.get("fault").is_none());
    }

    #[test]
    fn test_rejected_event_lists_unanswered() {
        let error = ValidationError::Incomplete {
            unanswered: vec![3],
        };
        let value = serde_json::to_value(ClassificationEvent::rejected(&error, 5)).unwrap();
        assert_eq!(value["type"], "validation_rejected");
        assert_eq!(value["unanswered"], json!([3]));
        assert_eq!(value["total"], 5);
    }
}
