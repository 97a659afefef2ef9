//! Core analyzer trait definition.
//!
//! ```text
//! Raw Text → Analyzer → Token Stream
//!             ↓
//!         Char Filters
//!             ↓
//!         Tokenizer
//!             ↓
//!         Token Filters
//! ```
//!
//! # Examples
//!
//! Implementing a custom analyzer:
//!
//! ```
//! use tweetext::analysis::analyzer::Analyzer;
//! use tweetext::analysis::token::TokenStream;
//!
//! struct NothingAnalyzer;
//!
//! impl Analyzer for NothingAnalyzer {
//!     fn analyze(&self, _text: &str) -> TokenStream {
//!         Box::new(std::iter::empty())
//!     }
//!
//!     fn name(&self) -> &'static str {
//!         "nothing"
//!     }
//! }
//!
//! assert_eq!(NothingAnalyzer.analyze("anything").count(), 0);
//! ```

use crate::analysis::token::TokenStream;

/// Trait for analyzers that convert text into processed tokens.
///
/// Analysis accepts any string and never fails. The trait requires
/// `Send + Sync` so one analyzer can serve concurrent callers.
pub trait Analyzer: Send + Sync {
    /// Analyze the given text and return a stream of tokens.
    fn analyze(&self, text: &str) -> TokenStream;

    /// Get the name of this analyzer (for debugging and configuration).
    fn name(&self) -> &'static str;
}
