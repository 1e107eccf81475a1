use thiserror::Error;

#[derive(Error, Debug)]
pub enum DemoError {
    #[error("Division by zero!")]
    DivisionByZero,

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Failed to parse config '{path}': {message}")]
    ConfigParseError { path: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Arithmetic,
    Io,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl DemoError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            DemoError::DivisionByZero => ErrorCategory::Arithmetic,
            DemoError::IoError(_) | DemoError::SerializationError(_) => ErrorCategory::Io,
            DemoError::ConfigParseError { .. } | DemoError::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // 呼叫端回報後即可繼續執行
            DemoError::DivisionByZero => ErrorSeverity::Low,
            DemoError::ConfigParseError { .. } | DemoError::InvalidConfigValueError { .. } => {
                ErrorSeverity::High
            }
            DemoError::IoError(_) | DemoError::SerializationError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            DemoError::DivisionByZero => "Cannot divide by zero".to_string(),
            DemoError::IoError(e) => format!("Could not read or write a file: {}", e),
            DemoError::SerializationError(e) => format!("Could not produce JSON output: {}", e),
            DemoError::ConfigParseError { path, .. } => {
                format!("The roster file '{}' is not valid TOML", path)
            }
            DemoError::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid setting '{}': {}", field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            DemoError::DivisionByZero => "Use a non-zero denominator",
            DemoError::IoError(_) => "Check that the path exists and is readable",
            DemoError::SerializationError(_) => "Retry without --json",
            DemoError::ConfigParseError { .. } => {
                "Each entry needs [[students]] with name, age and grades"
            }
            DemoError::InvalidConfigValueError { .. } => "Fix the value and run again",
        }
    }
}

pub type Result<T> = std::result::Result<T, DemoError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_division_by_zero_is_low_severity() {
        let err = DemoError::DivisionByZero;
        assert_eq!(err.to_string(), "Division by zero!");
        assert_eq!(err.category(), ErrorCategory::Arithmetic);
        assert_eq!(err.severity(), ErrorSeverity::Low);
    }

    #[test]
    fn test_config_errors_are_high_severity() {
        let err = DemoError::InvalidConfigValueError {
            field: "students[0].age".to_string(),
            value: "200".to_string(),
            reason: "Value must be between 0 and 150".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert_eq!(err.severity(), ErrorSeverity::High);
        assert!(err.user_friendly_message().contains("students[0].age"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: DemoError = io.into();
        assert_eq!(err.category(), ErrorCategory::Io);
        assert_eq!(err.severity(), ErrorSeverity::Critical);
    }
}
