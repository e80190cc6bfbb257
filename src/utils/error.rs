use thiserror::Error;

#[derive(Error, Debug)]
pub enum FixtureError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration field: {field}")]
    MissingConfigError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Config,
    Serialization,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl FixtureError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            FixtureError::IoError(_) => ErrorCategory::Io,
            FixtureError::SerializationError(_) => ErrorCategory::Serialization,
            FixtureError::ConfigValidationError { .. }
            | FixtureError::InvalidConfigValueError { .. }
            | FixtureError::MissingConfigError { .. } => ErrorCategory::Config,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            FixtureError::IoError(_) => ErrorSeverity::Critical,
            FixtureError::SerializationError(_) => ErrorSeverity::Medium,
            FixtureError::ConfigValidationError { .. }
            | FixtureError::InvalidConfigValueError { .. }
            | FixtureError::MissingConfigError { .. } => ErrorSeverity::High,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            FixtureError::IoError(_) => {
                "Check that the configuration file exists and is readable".to_string()
            }
            FixtureError::SerializationError(_) => {
                "Report emission failed; re-run without --emit-report".to_string()
            }
            FixtureError::ConfigValidationError { field, .. } => {
                format!("Fix the '{}' entry in the suite configuration", field)
            }
            FixtureError::InvalidConfigValueError { field, .. } => {
                format!("Provide a valid value for '{}'", field)
            }
            FixtureError::MissingConfigError { field } => {
                format!("Add the required '{}' entry to the configuration", field)
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            FixtureError::IoError(e) => format!("Could not read the configuration file: {}", e),
            FixtureError::SerializationError(e) => format!("Could not emit the report: {}", e),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, FixtureError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_errors_share_category_and_severity() {
        let err = FixtureError::MissingConfigError {
            field: "operands.base".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Config);
        assert_eq!(err.severity(), ErrorSeverity::High);
        assert!(err.recovery_suggestion().contains("operands.base"));
    }

    #[test]
    fn test_io_error_is_critical() {
        let err = FixtureError::IoError(std::io::Error::from(std::io::ErrorKind::NotFound));
        assert_eq!(err.category(), ErrorCategory::Io);
        assert_eq!(err.severity(), ErrorSeverity::Critical);
    }
}
