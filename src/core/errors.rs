//! Shared error types for the application

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for solguard operations
#[derive(Debug, Error)]
pub enum SolguardError {
    /// Corpus filename does not encode an address/name pair
    #[error("filename `{0}` does not match the `<address>_<Name>` convention")]
    FilenameConvention(PathBuf),

    /// Configuration errors
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Block explorer returned an unusable payload
    #[error("explorer response for {address}: {message}")]
    Explorer { address: String, message: String },

    /// Cache operation errors
    #[error("cache error: {0}")]
    Cache(String),

    /// IO errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON errors
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// HTTP transport errors
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    /// Directory walk errors
    #[error(transparent)]
    Walk(#[from] ignore::Error),

    /// Pattern errors
    #[error(transparent)]
    Pattern(#[from] glob::PatternError),
}

impl SolguardError {
    /// Create an explorer error for a specific address
    pub fn explorer(address: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Explorer {
            address: address.into(),
            message: message.into(),
        }
    }
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, SolguardError>;
