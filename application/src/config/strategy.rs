//! Classifier strategy selection.

use std::str::FromStr;

/// Which [`StatusClassifier`](crate::ports::status_classifier::StatusClassifier)
/// a deployment runs. Exactly one is active per process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClassifierStrategy {
    /// Deterministic answer-count rule
    #[default]
    Rule,
    /// External text-completion service with fallback
    Service,
}

impl ClassifierStrategy {
    pub const VALID_VALUES: [&'static str; 2] = ["rule", "service"];

    pub fn as_str(&self) -> &'static str {
        match self {
            ClassifierStrategy::Rule => "rule",
            ClassifierStrategy::Service => "service",
        }
    }
}

impl std::fmt::Display for ClassifierStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ClassifierStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "rule" => Ok(ClassifierStrategy::Rule),
            "service" | "llm" => Ok(ClassifierStrategy::Service),
            other => Err(format!("unknown classifier strategy: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!("rule".parse(), Ok(ClassifierStrategy::Rule));
        assert_eq!(" Service ".parse(), Ok(ClassifierStrategy::Service));
        assert_eq!("llm".parse(), Ok(ClassifierStrategy::Service));
        assert!("blend".parse::<ClassifierStrategy>().is_err());
    }

    #[test]
    fn test_round_trips_through_display() {
        for strategy in [ClassifierStrategy::Rule, ClassifierStrategy::Service] {
            assert_eq!(strategy.to_string().parse(), Ok(strategy));
        }
    }
}
