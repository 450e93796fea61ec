//! Classification outcome and fault taxonomy

use crate::core::status::Status;
use thiserror::Error;

/// Why a classifier fell back instead of producing a verdict.
///
/// None of these reach the client; they all map to [`Status::FALLBACK`].
/// The variants exist so operators can tell causes apart in logs.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClassifierFault {
    #[error("Configuration fault: {0}")]
    Configuration(String),

    #[error("External service fault: {0}")]
    Service(String),

    #[error("Unexpected classifier output: {0}")]
    Parse(String),

    #[error("Classification cancelled")]
    Cancelled,
}

impl ClassifierFault {
    /// Short machine-readable kind, used as a log field
    pub fn kind(&self) -> &'static str {
        match self {
            ClassifierFault::Configuration(_) => "configuration",
            ClassifierFault::Service(_) => "service",
            ClassifierFault::Parse(_) => "parse",
            ClassifierFault::Cancelled => "cancelled",
        }
    }
}

/// Result of one classifier run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    /// The classifier reached a verdict
    Determined(Status),
    /// The classifier could not reach a trustworthy verdict
    Fallback(ClassifierFault),
}

impl Classification {
    /// Client-visible status
    pub fn status(&self) -> Status {
        match self {
            Classification::Determined(status) => *status,
            Classification::Fallback(_) => Status::FALLBACK,
        }
    }

    pub fn fault(&self) -> Option<&ClassifierFault> {
        match self {
            Classification::Determined(_) => None,
            Classification::Fallback(fault) => Some(fault),
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Classification::Fallback(_))
    }
}

impl From<Status> for Classification {
    fn from(status: Status) -> Self {
        Classification::Determined(status)
    }
}

impl From<ClassifierFault> for Classification {
    fn from(fault: ClassifierFault) -> Self {
        Classification::Fallback(fault)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_fault_falls_back_to_caution() {
        let faults = [
            ClassifierFault::Configuration("missing key".into()),
            ClassifierFault::Service("503".into()),
            ClassifierFault::Parse("Maybe".into()),
            ClassifierFault::Cancelled,
        ];
        for fault in faults {
            let classification = Classification::from(fault);
            assert!(classification.is_fallback());
            assert_eq!(classification.status(), Status::Caution);
        }
    }

    #[test]
    fn test_determined_keeps_status() {
        let classification = Classification::from(Status::Alert);
        assert_eq!(classification.status(), Status::Alert);
        assert!(classification.fault().is_none());
    }

    #[test]
    fn test_fault_kinds() {
        assert_eq!(ClassifierFault::Parse(String::new()).kind(), "parse");
        assert_eq!(ClassifierFault::Cancelled.kind(), "cancelled");
    }
}
