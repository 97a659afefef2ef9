//! Text analysis module for tweetext.
//!
//! The pipeline mirrors a classic analyzer chain:
//!
//! ```text
//! raw text → char filters (emoji, noise) → tokenizer (delimiter gaps)
//!          → token filters (remove empty, stop words) → tokens
//! ```

pub mod analyzer;
pub mod char_filter;
pub mod pattern;
pub mod token;
pub mod token_filter;
pub mod tokenizer;

// Re-export commonly used types
pub use analyzer::Analyzer;
pub use token::*;
