//! Status value object representing the classification result

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Three-level ordinal status (Value Object)
///
/// The ordinal is the wire representation the browser client expects:
/// `Alert` = 0, `Caution` = 1, `Clear` = 2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Status {
    /// Respondent is flagged
    Alert,
    /// Undetermined, needs human review
    Caution,
    /// Nothing to flag
    Clear,
}

impl Status {
    /// Status returned whenever a classifier cannot reach a trustworthy verdict.
    pub const FALLBACK: Status = Status::Caution;

    /// All statuses in ordinal order
    pub const ALL: [Status; 3] = [Status::Alert, Status::Caution, Status::Clear];

    pub fn ordinal(self) -> u8 {
        match self {
            Status::Alert => 0,
            Status::Caution => 1,
            Status::Clear => 2,
        }
    }

    pub fn from_ordinal(ordinal: u8) -> Option<Self> {
        match ordinal {
            0 => Some(Status::Alert),
            1 => Some(Status::Caution),
            2 => Some(Status::Clear),
            _ => None,
        }
    }

    /// Canonical name, also the verdict token expected from the external classifier
    pub fn as_str(self) -> &'static str {
        match self {
            Status::Alert => "Alert",
            Status::Caution => "Caution",
            Status::Clear => "Clear",
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Status {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Status::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("Unknown status: {}. Valid: Alert, Caution, Clear", s))
    }
}

impl Serialize for Status {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u8(self.ordinal())
    }
}

impl<'de> Deserialize<'de> for Status {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let ordinal = u8::deserialize(deserializer)?;
        Status::from_ordinal(ordinal)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid status ordinal {}", ordinal)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordinals_match_wire_contract() {
        assert_eq!(Status::Alert.ordinal(), 0);
        assert_eq!(Status::Caution.ordinal(), 1);
        assert_eq!(Status::Clear.ordinal(), 2);
        assert_eq!(Status::from_ordinal(3), None);
    }

    #[test]
    fn test_serializes_as_ordinal() {
        assert_eq!(serde_json::to_string(&Status::Clear).unwrap(), "2");
        let parsed: Status = serde_json::from_str("0").unwrap();
        assert_eq!(parsed, Status::Alert);
        assert!(serde_json::from_str::<Status>("7").is_err());
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("caution".parse::<Status>().ok(), Some(Status::Caution));
        assert_eq!("ALERT".parse::<Status>().ok(), Some(Status::Alert));
        assert!("Green".parse::<Status>().is_err());
    }

    #[test]
    fn test_fallback_is_middle_status() {
        assert_eq!(Status::FALLBACK, Status::Caution);
        assert!(Status::Alert < Status::FALLBACK && Status::FALLBACK < Status::Clear);
    }
}
