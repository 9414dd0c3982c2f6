//! Error types for the bayes-text library.
//!
//! All fallible operations return [`Result`], whose error side is the
//! [`ClassifierError`] enum.
//!
//! # Examples
//!
//! ```
//! use bayes_text::error::{ClassifierError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(ClassifierError::invalid_category("unknown"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for classifier operations.
///
/// Uses `thiserror` for the `Error` implementation and provides constructor
/// helpers for the string-carrying variants.
#[derive(Error, Debug)]
pub enum ClassifierError {
    /// A category name outside the configured category set.
    #[error("Invalid category: {0}")]
    InvalidCategory(String),

    /// A probability was requested before any document was trained.
    #[error("Undefined prior: {0}")]
    UndefinedPrior(String),

    /// Invalid construction parameters or configuration values.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Analysis-related errors (tokenization, filtering, etc.)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// I/O errors (config, stop word and training files)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON parse errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for operations that may fail with ClassifierError.
pub type Result<T> = std::result::Result<T, ClassifierError>;

impl ClassifierError {
    /// Create a new invalid category error.
    pub fn invalid_category<S: Into<String>>(category: S) -> Self {
        ClassifierError::InvalidCategory(category.into())
    }

    /// Create a new undefined prior error.
    pub fn undefined_prior<S: Into<String>>(msg: S) -> Self {
        ClassifierError::UndefinedPrior(msg.into())
    }

    /// Create a new invalid config error.
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        ClassifierError::InvalidConfig(msg.into())
    }

    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        ClassifierError::Analysis(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = ClassifierError::invalid_category("eggs");
        assert_eq!(error.to_string(), "Invalid category: eggs");

        let error = ClassifierError::undefined_prior("no documents trained");
        assert_eq!(error.to_string(), "Undefined prior: no documents trained");

        let error = ClassifierError::analysis("bad pattern");
        assert_eq!(error.to_string(), "Analysis error: bad pattern");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error = ClassifierError::from(io_error);

        match error {
            ClassifierError::Io(_) => {} // Expected
            _ => panic!("Expected IO error variant"),
        }
    }
}
