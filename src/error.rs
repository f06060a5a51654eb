// src/error.rs

//! Unified error handling for the scraper.

use std::fmt;

use thiserror::Error;

/// Result type alias for scraper operations.
pub type Result<T> = std::result::Result<T, AppError>;

/// Unified application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// HTTP client could not be built or a request failed outright
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Fetching a page failed (transport error or non-success status)
    #[error("Failed to fetch {url}: {message}")]
    Fetch { url: String, message: String },

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing failed
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// URL parsing failed
    #[error("URL parse error: {0}")]
    Url(#[from] url::ParseError),

    /// CSS selector parsing failed
    #[error("Invalid selector '{selector}': {message}")]
    Selector { selector: String, message: String },

    /// Subject key missing from the listing's link table
    #[error("Unknown subject '{key}'")]
    UnknownSubject { key: String },

    /// Data validation error
    #[error("Validation error: {0}")]
    Validation(String),
}

impl AppError {
    /// Create a fetch error for the given URL.
    pub fn fetch(url: impl Into<String>, message: impl fmt::Display) -> Self {
        Self::Fetch {
            url: url.into(),
            message: message.to_string(),
        }
    }

    /// Create a selector parsing error.
    pub fn selector(selector: impl Into<String>, message: impl fmt::Display) -> Self {
        Self::Selector {
            selector: selector.into(),
            message: message.to_string(),
        }
    }

    /// Create an unknown subject error.
    pub fn unknown_subject(key: impl Into<String>) -> Self {
        Self::UnknownSubject { key: key.into() }
    }

    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Whether this error came from the network layer.
    pub fn is_fetch(&self) -> bool {
        matches!(self, Self::Fetch { .. } | Self::Http(_))
    }

    /// Whether this error came from parsing a selector or URL.
    pub fn is_parse(&self) -> bool {
        matches!(self, Self::Selector { .. } | Self::Url(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_subject_display() {
        let err = AppError::unknown_subject("nonexistent");
        assert_eq!(err.to_string(), "Unknown subject 'nonexistent'");
    }

    #[test]
    fn test_error_kinds() {
        assert!(AppError::fetch("https://example.com", "timed out").is_fetch());
        assert!(AppError::selector("[[", "unexpected token").is_parse());
        assert!(!AppError::validation("empty").is_fetch());
    }
}
