//! Token filter implementations for token stream transformation.
//!
//! Filters receive the stream produced by a tokenizer and return a new
//! stream. The filters here only ever drop tokens, and they do so lazily:
//! nothing is evaluated until the caller pulls from the returned stream.
//!
//! # Available Filters
//!
//! - [`remove_empty::RemoveEmptyFilter`] - Removes empty tokens
//! - [`stop::StopFilter`] - Removes words found in a [`WordDictionary`](crate::dictionary::WordDictionary)
//!
//! # Filter Chaining
//!
//! ```text
//! Tokenizer → Remove Empty → Stop Words → Output
//! ```

use crate::analysis::token::TokenStream;

/// Trait for filters that transform token streams.
///
/// The trait requires `Send + Sync` so a single pipeline can be shared by
/// concurrent callers.
pub trait Filter: Send + Sync {
    /// Apply this filter to a token stream.
    fn filter(&self, tokens: TokenStream) -> TokenStream;

    /// Get the name of this filter (for debugging and configuration).
    fn name(&self) -> &'static str;
}

// Individual filter modules
pub mod remove_empty;
pub mod stop;
