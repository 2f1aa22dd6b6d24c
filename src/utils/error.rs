use thiserror::Error;

#[derive(Error, Debug)]
pub enum SynthError {
    #[error("Zip operation failed: {0}")]
    ZipError(#[from] zip::result::ZipError),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("YAML parsing error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration field: {field}")]
    MissingConfigError { field: String },

    #[error("Data generation error: {message}")]
    ProcessingError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Io,
    Serialization,
    Generation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    /// Process exit code used by the CLI for an error of this severity.
    pub fn exit_code(self) -> i32 {
        match self {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

impl SynthError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            SynthError::ConfigError { .. }
            | SynthError::ConfigValidationError { .. }
            | SynthError::InvalidConfigValueError { .. }
            | SynthError::MissingConfigError { .. }
            | SynthError::YamlError(_) => ErrorCategory::Configuration,
            SynthError::IoError(_) | SynthError::ZipError(_) => ErrorCategory::Io,
            SynthError::CsvError(_) | SynthError::SerializationError(_) => {
                ErrorCategory::Serialization
            }
            SynthError::ProcessingError { .. } => ErrorCategory::Generation,
        }
    }

    /// Severity drives the CLI exit code.
    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Io => ErrorSeverity::Medium,
            ErrorCategory::Serialization | ErrorCategory::Generation => ErrorSeverity::Critical,
        }
    }

    pub fn exit_code(&self) -> i32 {
        self.severity().exit_code()
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            SynthError::ConfigError { .. } | SynthError::YamlError(_) => {
                "Check that the config file exists and is valid YAML or TOML".to_string()
            }
            SynthError::ConfigValidationError { field, .. }
            | SynthError::InvalidConfigValueError { field, .. } => {
                format!("Fix the value of '{}' in the config file or on the command line", field)
            }
            SynthError::MissingConfigError { field } => {
                format!("Add '{}' to the config file", field)
            }
            SynthError::IoError(_) | SynthError::ZipError(_) => {
                "Check that the output directory is writable and has free space".to_string()
            }
            SynthError::CsvError(_) | SynthError::SerializationError(_) => {
                "Re-run with --verbose and report the failing table".to_string()
            }
            SynthError::ProcessingError { .. } => {
                "Re-run with --verbose; try a different seed to confirm the failure is data dependent"
                    .to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Configuration => format!("Invalid configuration: {}", self),
            ErrorCategory::Io => format!("Could not write output: {}", self),
            ErrorCategory::Serialization => format!("Could not encode output tables: {}", self),
            ErrorCategory::Generation => format!("Data generation failed: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, SynthError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_errors_are_high_severity() {
        let err = SynthError::InvalidConfigValueError {
            field: "days".to_string(),
            value: "0".to_string(),
            reason: "Value must be at least 1".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert_eq!(err.severity(), ErrorSeverity::High);
        assert!(err.recovery_suggestion().contains("days"));
        assert!(err.user_friendly_message().starts_with("Invalid configuration"));
    }

    #[test]
    fn test_io_errors_are_medium_severity() {
        let err: SynthError =
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied").into();
        assert_eq!(err.category(), ErrorCategory::Io);
        assert_eq!(err.severity(), ErrorSeverity::Medium);
    }

    #[test]
    fn test_processing_error_display() {
        let err = SynthError::ProcessingError {
            message: "bad distribution".to_string(),
        };
        assert_eq!(err.to_string(), "Data generation error: bad distribution");
        assert_eq!(err.severity(), ErrorSeverity::Critical);
    }

    #[test]
    fn test_exit_codes_follow_severity() {
        let missing_file: SynthError =
            std::io::Error::new(std::io::ErrorKind::NotFound, "config.yaml").into();
        assert_eq!(missing_file.exit_code(), 2);

        let bad_config = SynthError::ConfigError {
            message: "Unsupported config format".to_string(),
        };
        assert_eq!(bad_config.exit_code(), 1);

        let generation = SynthError::ProcessingError {
            message: "bad distribution".to_string(),
        };
        assert_eq!(generation.exit_code(), 3);

        assert_eq!(ErrorSeverity::Low.exit_code(), 0);
    }
}
