use thiserror::Error;

#[derive(Error, Debug)]
pub enum PinError {
    #[error("Invalid count {count} for {length}-digit PINs: {reason}")]
    InvalidCount {
        length: u32,
        count: i64,
        reason: String,
    },

    #[error("Invalid PIN length {length}: must be between 1 and {max}", max = crate::core::derive::MAX_PIN_LENGTH)]
    InvalidLength { length: u32 },

    #[error("Secure random source unavailable: {reason}")]
    EntropySourceUnavailable { reason: String },

    #[error("Failed to write output to '{path}': {source}")]
    OutputWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
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
    Entropy,
    Output,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl PinError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            PinError::InvalidCount { .. } | PinError::InvalidLength { .. } => ErrorCategory::Input,
            PinError::IoError(_)
            | PinError::ConfigError { .. }
            | PinError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            PinError::EntropySourceUnavailable { .. } => ErrorCategory::Entropy,
            PinError::OutputWriteError { .. } => ErrorCategory::Output,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input | ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Entropy | ErrorCategory::Output => ErrorSeverity::Critical,
        }
    }

    /// Process exit code for this error. Never 0.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low | ErrorSeverity::Medium | ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            PinError::InvalidCount { length, .. } => format!(
                "Request between 0 and {} PINs of length {}",
                10u64.saturating_pow(*length),
                length
            ),
            PinError::InvalidLength { .. } => "Use a PIN length of 4, 6 or 8 digits".to_string(),
            PinError::EntropySourceUnavailable { .. } => {
                "Check that the operating system random device is available".to_string()
            }
            PinError::OutputWriteError { .. } => {
                "Check that the output directory exists and is writable".to_string()
            }
            PinError::IoError(_) => "Make sure the configuration file exists and is readable".to_string(),
            PinError::ConfigError { .. } | PinError::InvalidConfigValueError { .. } => {
                "Fix the configuration file or command-line flags and try again".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            PinError::InvalidCount {
                length,
                count,
                reason,
            } => format!("Cannot generate {} PINs of length {}: {}", count, length, reason),
            PinError::EntropySourceUnavailable { .. } => {
                "No secure randomness available; nothing was written".to_string()
            }
            PinError::OutputWriteError { path, .. } => format!("Could not write PINs to {}", path),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, PinError>;
