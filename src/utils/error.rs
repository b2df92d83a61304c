use thiserror::Error;

#[derive(Error, Debug)]
pub enum LessonError {
    #[error("Invalid format for {field}: {reason}")]
    InvalidFormat {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Constraint violation on {field}: {reason}")]
    ConstraintViolation {
        field: String,
        value: String,
        reason: String,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid configuration value for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    High,
    Critical,
}

impl LessonError {
    pub fn invalid_format(field: &str, value: &str, reason: impl Into<String>) -> Self {
        Self::InvalidFormat {
            field: field.to_string(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    pub fn constraint(field: &str, value: impl ToString, reason: impl Into<String>) -> Self {
        Self::ConstraintViolation {
            field: field.to_string(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidFormat { .. } | Self::ConstraintViolation { .. } => ErrorCategory::Input,
            Self::TomlError(_) | Self::ConfigError { .. } | Self::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
            Self::IoError(_) | Self::SerializationError(_) => ErrorCategory::System,
        }
    }

    /// Input errors never stop the session; everything else aborts the command.
    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input => ErrorSeverity::Low,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn is_recoverable(&self) -> bool {
        self.category() == ErrorCategory::Input
    }

    /// The message shown to the person at the keyboard.
    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::InvalidFormat { reason, .. } | Self::ConstraintViolation { reason, .. } => {
                reason.clone()
            }
            Self::IoError(e) => format!("Could not read or write a file: {}", e),
            Self::TomlError(e) => format!("The config file is not valid TOML: {}", e),
            Self::SerializationError(e) => format!("Could not encode the result: {}", e),
            Self::ConfigError { message } => message.clone(),
            Self::InvalidConfigValueError { field, reason, .. } => {
                format!("Config field '{}' is invalid: {}", field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::InvalidFormat { .. } => "Check the value and type it again",
            Self::ConstraintViolation { .. } => "Enter a value within the allowed range",
            Self::IoError(_) => "Make sure the file exists and is readable",
            Self::TomlError(_) => "Fix the TOML syntax in the config file",
            Self::SerializationError(_) => "Retry with --format text",
            Self::ConfigError { .. } | Self::InvalidConfigValueError { .. } => {
                "Review the config file and command-line flags"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, LessonError>;
