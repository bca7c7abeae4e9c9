use thiserror::Error;

#[derive(Error, Debug)]
pub enum UpkeepError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Data processing error: {message}")]
    ProcessingError { message: String },
}

pub type Result<T> = std::result::Result<T, UpkeepError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Io,
    Config,
    Data,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// Informational; the run can be considered successful.
    Low,
    /// Transient; retrying the run will usually clear it.
    Medium,
    /// The input or configuration needs fixing first.
    High,
    /// The host environment is broken.
    Critical,
}

impl UpkeepError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            UpkeepError::ApiError(_) => ErrorCategory::Network,
            UpkeepError::IoError(_) => ErrorCategory::Io,
            UpkeepError::SerializationError(_) | UpkeepError::ProcessingError { .. } => {
                ErrorCategory::Data
            }
            UpkeepError::InvalidConfigValueError { .. }
            | UpkeepError::ConfigValidationError { .. } => ErrorCategory::Config,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            UpkeepError::ApiError(_) => ErrorSeverity::Medium,
            UpkeepError::IoError(_) => ErrorSeverity::Critical,
            UpkeepError::SerializationError(_)
            | UpkeepError::ProcessingError { .. }
            | UpkeepError::InvalidConfigValueError { .. }
            | UpkeepError::ConfigValidationError { .. } => ErrorSeverity::High,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            UpkeepError::ApiError(e) => format!("Could not reach the remote store: {}", e),
            UpkeepError::IoError(e) => format!("File operation failed: {}", e),
            UpkeepError::SerializationError(e) => {
                format!("The remote store returned malformed data: {}", e)
            }
            UpkeepError::InvalidConfigValueError {
                field,
                value,
                reason,
            } => format!("Setting '{}' has invalid value '{}': {}", field, value, reason),
            UpkeepError::ConfigValidationError { field, message } => {
                format!("Configuration problem in '{}': {}", field, message)
            }
            UpkeepError::ProcessingError { message } => message.clone(),
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self.category() {
            ErrorCategory::Network => {
                "Check network connectivity and the configured endpoints, then re-run".to_string()
            }
            ErrorCategory::Io => {
                "Check that the download directory exists and is writable".to_string()
            }
            ErrorCategory::Config => {
                "Fix the configuration value and re-run (see --help for the expected format)"
                    .to_string()
            }
            ErrorCategory::Data => {
                "Verify the remote store contents; the documents may be from an incompatible version"
                    .to_string()
            }
        }
    }
}
