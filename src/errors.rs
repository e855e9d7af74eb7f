/*!
 * Error types for the prevod application.
 *
 * This module contains custom error types for different parts of the application,
 * using the thiserror crate for ergonomic error definitions.
 */

// Allow dead code - error types are for library consumers
#![allow(dead_code)]

use thiserror::Error;

/// Errors that can occur when calling a translation provider API
#[derive(Error, Debug)]
pub enum ProviderError {
    /// Error when making an API request fails
    #[error("API request failed: {0}")]
    RequestFailed(String),

    /// Error when parsing an API response fails
    #[error("Failed to parse API response: {0}")]
    ParseError(String),

    /// Error returned by the API itself
    #[error("API responded with error: {status_code} - {message}")]
    ApiError {
        /// HTTP status code
        status_code: u16,
        /// Error message from the API
        message: String,
    },

    /// Error establishing or maintaining a connection
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// Error related to rate limiting
    #[error("Rate limit exceeded: {0}")]
    RateLimitExceeded(String),

    /// Error with authentication
    #[error("Authentication error: {0}")]
    AuthenticationError(String),

    /// The provider does not support the requested language code
    #[error("Unsupported language code: {0}")]
    UnsupportedLanguage(String),
}

/// Errors that can occur while opening or persisting a document.
///
/// Both variants are fatal for the pipeline: a document that cannot be
/// loaded aborts before any unit is enumerated, and a document that cannot
/// be saved loses the already-completed translation work.
#[derive(Error, Debug)]
pub enum DocumentError {
    /// The document could not be opened (missing file, corrupt container)
    #[error("Failed to load document: {0}")]
    Load(String),

    /// The document could not be persisted (permission, disk full, locked file)
    #[error("Failed to save document: {0}")]
    Save(String),
}

/// Errors that can occur during translation of a single text unit
#[derive(Error, Debug)]
pub enum TranslationError {
    /// Error from the provider API
    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    /// The translation call did not complete within the configured timeout
    #[error("Translation call timed out after {0} seconds")]
    Timeout(u64),

    /// The provider returned an empty translation for non-empty input
    #[error("Provider returned an empty translation")]
    EmptyTranslation,
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Error from a provider
    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    /// Error from document I/O
    #[error("Document error: {0}")]
    Document(#[from] DocumentError),

    /// Error from translation
    #[error("Translation error: {0}")]
    Translation(#[from] TranslationError),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

// Utility functions for error conversion
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}
