//! Tokenizer implementations for text analysis.
//!
//! Tokenizers split cleaned text into word candidates. They run after every
//! char filter and before any token filter.
//!
//! # Available Tokenizers
//!
//! - [`regex::RegexTokenizer`] - Regex-based tokenization, either emitting the
//!   matches or the gaps between them
//!
//! # Examples
//!
//! ```
//! use tweetext::analysis::tokenizer::Tokenizer;
//! use tweetext::analysis::tokenizer::regex::RegexTokenizer;
//!
//! let tokenizer = RegexTokenizer::with_gaps(r"[ ,]").unwrap();
//! let tokens: Vec<_> = tokenizer.tokenize("a, b").map(|t| t.text).collect();
//! assert_eq!(tokens, vec!["a", "", "b"]);
//! ```

use crate::analysis::token::TokenStream;

/// Trait for tokenizers that convert text into tokens.
///
/// Tokenizing never fails: every string has a (possibly empty) split.
pub trait Tokenizer: Send + Sync {
    /// Tokenize the given text into a stream of tokens.
    fn tokenize(&self, text: &str) -> TokenStream;

    /// Get the name of this tokenizer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod regex;
