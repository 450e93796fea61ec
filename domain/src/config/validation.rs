//! Configuration issue reporting.
//!
//! Config loaders validate semantic constraints (sample size, strategy name,
//! model name) and report structured issues with severity levels instead of
//! failing on the first problem.

/// Severity level of a configuration issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Fatal: the configuration cannot work at all.
    Error,
    /// Non-fatal: the configuration works but may not behave as expected.
    Warning,
}

/// Identifies a specific configuration issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigIssueCode {
    /// `questions.sample_size` is zero.
    ZeroSampleSize,
    /// A field holds a value outside its allowed set.
    InvalidEnumValue {
        field: String,
        value: String,
        valid_values: Vec<String>,
    },
    /// A model name is blank.
    EmptyModelName { field: String },
    /// Temperature is above zero, so verdicts may vary between identical submissions.
    NonDeterministicTemperature,
    /// The classification timeout is zero.
    ZeroTimeout,
}

/// A detected issue in the configuration.
#[derive(Debug, Clone)]
pub struct ConfigIssue {
    pub severity: Severity,
    pub code: ConfigIssueCode,
    pub message: String,
}

impl ConfigIssue {
    pub fn error(code: ConfigIssueCode, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            code,
            message: message.into(),
        }
    }

    pub fn warning(code: ConfigIssueCode, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            code,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors_set_severity() {
        assert!(ConfigIssue::error(ConfigIssueCode::ZeroSampleSize, "x").is_error());
        assert!(!ConfigIssue::warning(ConfigIssueCode::NonDeterministicTemperature, "y").is_error());
    }
}
