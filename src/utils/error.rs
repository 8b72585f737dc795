use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlannerError {
    #[error("Exercise data request for '{muscle}' failed: {source}")]
    DataSourceError {
        muscle: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Invalid split type: {name}")]
    InvalidSplitError { name: String },

    #[error("Split template '{name}' is malformed: {reason}")]
    InvalidTemplateError { name: String, reason: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

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
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    DataSource,
    Planning,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl PlannerError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            PlannerError::DataSourceError { .. } => ErrorCategory::DataSource,
            PlannerError::InvalidSplitError { .. } | PlannerError::InvalidTemplateError { .. } => {
                ErrorCategory::Planning
            }
            PlannerError::ConfigError { .. }
            | PlannerError::ConfigValidationError { .. }
            | PlannerError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            PlannerError::IoError(_) | PlannerError::SerializationError(_) => {
                ErrorCategory::System
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            // 遠端服務錯誤，可以稍後重試
            ErrorCategory::DataSource => ErrorSeverity::Medium,
            ErrorCategory::Planning => ErrorSeverity::High,
            ErrorCategory::Configuration | ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn is_data_source_error(&self) -> bool {
        matches!(self, PlannerError::DataSourceError { .. })
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            PlannerError::DataSourceError { muscle, .. } => {
                format!("Could not fetch exercises for '{}' from the exercise database", muscle)
            }
            PlannerError::InvalidSplitError { name } => {
                format!("'{}' is not a known workout split", name)
            }
            PlannerError::InvalidTemplateError { name, .. } => {
                format!("The built-in split '{}' is malformed", name)
            }
            PlannerError::IoError(e) => format!("File access failed: {}", e),
            PlannerError::SerializationError(e) => format!("Could not read exercise data: {}", e),
            PlannerError::ConfigError { message } => format!("Configuration problem: {}", message),
            PlannerError::ConfigValidationError { field, message } => {
                format!("Configuration field '{}' is invalid: {}", field, message)
            }
            PlannerError::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration field '{}' is invalid: {}", field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            PlannerError::DataSourceError { .. } => {
                "Check your network connection and API key, then try again"
            }
            PlannerError::InvalidSplitError { .. } => {
                "Run the `splits` command to list the available split names"
            }
            PlannerError::InvalidTemplateError { .. } => {
                "Every split needs exactly seven days numbered 1 to 7"
            }
            PlannerError::IoError(_) => "Make sure the file exists and is readable",
            PlannerError::SerializationError(_) => {
                "Offline tables must be JSON arrays of exercise records"
            }
            PlannerError::ConfigError { .. }
            | PlannerError::ConfigValidationError { .. }
            | PlannerError::InvalidConfigValueError { .. } => {
                "Review the configuration file or command-line flags"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, PlannerError>;
