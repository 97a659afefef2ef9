//! Stop filter implementation.
//!
//! Removes every token whose text is, ignoring case, an entry of a
//! [`WordDictionary`]. The dictionary is shared, never copied, so a filter is
//! cheap to clone and can be used from many threads at once.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//!
//! use tweetext::analysis::token::Token;
//! use tweetext::analysis::token_filter::Filter;
//! use tweetext::analysis::token_filter::stop::StopFilter;
//! use tweetext::dictionary::WordDictionary;
//!
//! let filter = StopFilter::new(Arc::new(WordDictionary::from_words(["the"])));
//! let tokens = vec![
//!     Token::new("The", 0),
//!     Token::new("quick", 1),
//!     Token::new("brown", 2)
//! ];
//!
//! let result: Vec<_> = filter.filter(Box::new(tokens.into_iter())).collect();
//!
//! assert_eq!(result.len(), 2);
//! assert_eq!(result[0].text, "quick");
//! assert_eq!(result[1].text, "brown");
//! ```

use std::sync::Arc;

use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::Filter;
use crate::dictionary::WordDictionary;

/// A filter that removes non-meaningful words from the token stream.
#[derive(Clone, Debug)]
pub struct StopFilter {
    /// The words to remove
    dictionary: Arc<WordDictionary>,
}

impl StopFilter {
    /// Create a new stop filter backed by the given dictionary.
    pub fn new(dictionary: Arc<WordDictionary>) -> Self {
        StopFilter { dictionary }
    }

    /// Create a new stop filter from a list of words.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::new(Arc::new(WordDictionary::from_words(words)))
    }
}

impl Filter for StopFilter {
    fn filter(&self, tokens: TokenStream) -> TokenStream {
        let dictionary = Arc::clone(&self.dictionary);
        Box::new(tokens.filter(move |token| dictionary.is_meaningful(&token.text)))
    }

    fn name(&self) -> &'static str {
        "stop"
    }
}
