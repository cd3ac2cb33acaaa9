use thiserror::Error;

/// Shown when the service fails without giving us anything usable to display.
pub const GENERIC_FAILURE_MESSAGE: &str = "Failed to generate hairstyle.";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StyleError {
    #[error("{0}")]
    ConfigError(String),
    #[error("{0}")]
    TransportError(String),
    #[error("No image generated.")]
    EmptyResult,
    #[error("Image error: {0}")]
    ImageError(String),
    #[error("IO error: {0}")]
    IoError(String),
}

impl StyleError {
    pub fn missing_api_key(var: &str) -> Self {
        StyleError::ConfigError(format!(
            "Gemini API key is not configured. Set {} in your environment or .env file and try again.",
            var
        ))
    }

    /// Wraps a transport-level message, falling back to the generic text when it is blank.
    pub fn transport(message: impl Into<String>) -> Self {
        let message = message.into();
        if message.trim().is_empty() {
            StyleError::TransportError(GENERIC_FAILURE_MESSAGE.to_string())
        } else {
            StyleError::TransportError(message)
        }
    }

    /// Filesystem failure on `path`. All `IoError`s are built here.
    pub fn io(path: &std::path::Path, e: std::io::Error) -> Self {
        StyleError::IoError(format!("{}: {}", path.display(), e))
    }

    pub fn is_config(&self) -> bool {
        matches!(self, StyleError::ConfigError(_))
    }
}

pub type Result<T> = std::result::Result<T, StyleError>;
