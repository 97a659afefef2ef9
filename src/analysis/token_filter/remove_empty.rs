//! Remove empty filter implementation.
//!
//! Splitting on delimiters leaves empty candidates between adjacent
//! delimiters and at either end of the text. This filter drops them.
//!
//! # Examples
//!
//! ```
//! use tweetext::analysis::token_filter::Filter;
//! use tweetext::analysis::token_filter::remove_empty::RemoveEmptyFilter;
//! use tweetext::analysis::token::Token;
//!
//! let filter = RemoveEmptyFilter::new();
//! let tokens = vec![
//!     Token::new("hello", 0),
//!     Token::new("", 1),         // Will be removed
//!     Token::new("world", 2)
//! ];
//!
//! let result: Vec<_> = filter.filter(Box::new(tokens.into_iter())).collect();
//!
//! assert_eq!(result.len(), 2);
//! assert_eq!(result[0].text, "hello");
//! assert_eq!(result[1].text, "world");
//! ```

use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::Filter;

/// A filter that removes tokens with empty text.
#[derive(Clone, Debug, Default)]
pub struct RemoveEmptyFilter;

impl RemoveEmptyFilter {
    /// Create a new remove empty filter.
    pub fn new() -> Self {
        RemoveEmptyFilter
    }
}

impl Filter for RemoveEmptyFilter {
    fn filter(&self, tokens: TokenStream) -> TokenStream {
        Box::new(tokens.filter(|token| !token.is_empty()))
    }

    fn name(&self) -> &'static str {
        "remove_empty"
    }
}
