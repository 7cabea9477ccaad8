//! Shared error types for the metrics engine

use thiserror::Error;

/// Main error type for codemetrics operations
#[derive(Debug, Error)]
pub enum Error {
    /// Parsing errors from the tree-sitter adapter
    #[error("Parse error ({language}): {message}")]
    Parse { language: String, message: String },

    /// Analysis errors
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// The caller asked for a language the engine has no grammar for
    #[error("Unsupported language: {0}")]
    UnsupportedLanguage(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn analysis(message: impl Into<String>) -> Self {
        Error::Analysis(message.into())
    }

    pub fn unsupported_language(hint: impl Into<String>) -> Self {
        Error::UnsupportedLanguage(hint.into())
    }
}
