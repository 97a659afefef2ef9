//! Error types for the tweetext library.
//!
//! All fallible operations return [`TweetextError`] through the [`Result`]
//! alias. Only setup can fail: configuration parsing, processor
//! initialization and pattern compilation. Tokenizing a string never does.
//!
//! # Examples
//!
//! ```
//! use tweetext::error::{TweetextError, Result};
//!
//! fn check_arity(found: usize) -> Result<()> {
//!     if found != 1 {
//!         return Err(TweetextError::config(format!("required 1, but found {found}")));
//!     }
//!     Ok(())
//! }
//!
//! assert!(check_arity(1).is_ok());
//! assert!(check_arity(2).is_err());
//! ```

use std::io;

use thiserror::Error;

/// The main error type for tweetext operations.
#[derive(Error, Debug)]
pub enum TweetextError {
    /// I/O errors (reading config files, CLI input)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Setup-time configuration errors (arity, attribute types, config files)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Analysis-related errors (pipeline construction)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Invalid regular expression
    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic anyhow error
    #[error("{0:#}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with TweetextError.
pub type Result<T> = std::result::Result<T, TweetextError>;

impl TweetextError {
    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        TweetextError::Config(msg.into())
    }

    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        TweetextError::Analysis(msg.into())
    }

    /// Returns `true` for errors raised while validating setup.
    pub fn is_config(&self) -> bool {
        matches!(self, TweetextError::Config(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = TweetextError::config("Test config error");
        assert_eq!(error.to_string(), "Configuration error: Test config error");
        assert!(error.is_config());

        let error = TweetextError::analysis("Test analysis error");
        assert_eq!(error.to_string(), "Analysis error: Test analysis error");
        assert!(!error.is_config());
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error = TweetextError::from(io_error);

        match error {
            TweetextError::Io(_) => {} // Expected
            _ => panic!("Expected IO error variant"),
        }
    }

    #[test]
    fn test_regex_error_conversion() {
        let regex_error = regex::Regex::new("(").unwrap_err();
        let error = TweetextError::from(regex_error);
        assert!(matches!(error, TweetextError::Regex(_)));
    }
}
