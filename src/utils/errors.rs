//! Error handling for FitAdmin
//!
//! This module defines the main error type used throughout the crate
//! and provides a unified error handling strategy.

use thiserror::Error;

/// Main error type for FitAdmin operations
#[derive(Error, Debug)]
pub enum FitAdminError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("URL parsing error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("Unsupported language: {0}")]
    UnsupportedLanguage(String),

    #[error("Dictionary for '{language}' unavailable: {reason}")]
    DictionaryUnavailable { language: String, reason: String },

    #[error("Invalid dictionary for '{language}': {reason}")]
    InvalidDictionary { language: String, reason: String },

    #[error("Invalid translation key: '{0}'")]
    InvalidKey(String),
}

/// Result type alias for FitAdmin operations
pub type Result<T> = std::result::Result<T, FitAdminError>;

impl From<config::ConfigError> for FitAdminError {
    fn from(err: config::ConfigError) -> Self {
        FitAdminError::Config(err.to_string())
    }
}

impl FitAdminError {
    /// Check if the error is recoverable
    pub fn is_recoverable(&self) -> bool {
        match self {
            FitAdminError::Config(_) => false,
            FitAdminError::Http(_) => true,
            FitAdminError::Serialization(_) => true,
            FitAdminError::Io(_) => true,
            FitAdminError::UrlParse(_) => false,
            FitAdminError::UnsupportedLanguage(_) => false,
            FitAdminError::DictionaryUnavailable { .. } => true,
            FitAdminError::InvalidDictionary { .. } => true,
            FitAdminError::InvalidKey(_) => false,
        }
    }

    /// Get error severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            FitAdminError::Config(_) => ErrorSeverity::Critical,
            FitAdminError::UrlParse(_) => ErrorSeverity::Critical,
            FitAdminError::InvalidKey(_) => ErrorSeverity::Info,
            FitAdminError::UnsupportedLanguage(_) => ErrorSeverity::Warning,
            _ => ErrorSeverity::Error,
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Info,
    Warning,
    Error,
    Critical,
}

impl std::fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorSeverity::Info => write!(f, "INFO"),
            ErrorSeverity::Warning => write!(f, "WARN"),
            ErrorSeverity::Error => write!(f, "ERROR"),
            ErrorSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}
