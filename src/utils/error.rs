use thiserror::Error;

#[derive(Error, Debug)]
pub enum BylineError {
    #[error("Insufficient data: need at least {required} values, got {actual}")]
    InsufficientData { required: usize, actual: usize },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}' ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Logger setup failed: {message}")]
    LoggerError { message: String },

    #[error("Speech error: {message}")]
    SpeechError { message: String },
}

pub type Result<T> = std::result::Result<T, BylineError>;
