use serde::{Deserialize, Serialize};

/// Why a logarithm request produced no value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RejectReason {
    NonPositive,
    InvalidFormat,
}

impl RejectReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NonPositive => "non-positive",
            Self::InvalidFormat => "invalid-format",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Self::NonPositive => "Please enter a positive number.",
            Self::InvalidFormat => "Invalid input. Please enter a valid number.",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum LogOutcome {
    Value { input: f64, value: f64 },
    Rejected { reason: RejectReason },
}

impl LogOutcome {
    pub fn value(&self) -> Option<f64> {
        match self {
            Self::Value { value, .. } => Some(*value),
            Self::Rejected { .. } => None,
        }
    }

    pub fn is_value(&self) -> bool {
        matches!(self, Self::Value { .. })
    }

    pub fn message(&self) -> String {
        match self {
            Self::Value { input, value } => {
                // {:?} keeps the trailing ".0" on whole numbers
                format!("The natural logarithm of {:?} is: {}", input, value)
            }
            Self::Rejected { reason } => reason.message().to_string(),
        }
    }
}

/// Which of the two person shapes a record currently has.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PersonKind {
    NameOnly,
    NameAndAge,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoginOutcome {
    Granted,
    Denied,
}

impl LoginOutcome {
    pub fn is_granted(&self) -> bool {
        matches!(self, Self::Granted)
    }

    pub fn message(&self) -> &'static str {
        match self {
            Self::Granted => "Login successful!",
            Self::Denied => "Invalid credentials",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "text" => Some(Self::Text),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reject_reason_labels() {
        assert_eq!(RejectReason::NonPositive.as_str(), "non-positive");
        assert_eq!(RejectReason::InvalidFormat.as_str(), "invalid-format");
    }

    #[test]
    fn test_log_outcome_serializes_with_tag() {
        let outcome = LogOutcome::Rejected {
            reason: RejectReason::NonPositive,
        };
        let json = serde_json::to_value(outcome).unwrap();
        assert_eq!(json["outcome"], "rejected");
        assert_eq!(json["reason"], "non-positive");
    }

    #[test]
    fn test_output_format_parse() {
        assert_eq!(OutputFormat::parse("json"), Some(OutputFormat::Json));
        assert_eq!(OutputFormat::parse("yaml"), None);
    }
}
