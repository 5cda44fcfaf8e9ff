use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Invalid shift '{value}': {reason}")]
    InvalidShift { value: String, reason: String },

    #[error("Invalid path: {reason}")]
    InvalidPath { reason: String },

    #[error("Not found: {path}")]
    NotFound { path: String },
}

impl ServiceError {
    /// 是否為呼叫端輸入造成的錯誤
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidShift { .. } | Self::InvalidPath { .. } | Self::NotFound { .. }
        )
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::IoError(e) => format!("A system I/O operation failed: {}", e),
            Self::ConfigError { message } => format!("Configuration problem: {}", message),
            Self::InvalidConfigValueError { field, reason, .. } => {
                format!("Setting '{}' is invalid: {}", field, reason)
            }
            Self::InvalidShift { value, .. } => {
                format!("Shift '{}' is not an integer in the 64-bit range", value)
            }
            Self::InvalidPath { reason } => format!("The request path could not be read: {}", reason),
            Self::NotFound { path } => format!("Nothing is served at {}", path),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::IoError(_) => "Check that the address is free and the file paths are readable",
            Self::ConfigError { .. } => "Check the TOML syntax of the configuration file",
            Self::InvalidConfigValueError { .. } => "Fix the value in the config file or CLI flags",
            Self::InvalidShift { .. } => "Use an integer shift such as 3 or -5",
            Self::InvalidPath { .. } => "Percent-encode the text as UTF-8",
            Self::NotFound { .. } => "Use GET / or GET /encode/<text>/<shift>",
        }
    }
}

pub type Result<T> = std::result::Result<T, ServiceError>;
