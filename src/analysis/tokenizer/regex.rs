//! Regex-based tokenizer implementation.

use std::sync::Arc;

use regex::Regex;

use super::Tokenizer;
use crate::analysis::token::{Token, TokenStream};
use crate::error::{Result, TweetextError};

/// A tokenizer that splits text at the matches of a delimiter pattern.
///
/// The text between two matches becomes a token, including the empty text
/// between two adjacent delimiters and at either end of the input.
#[derive(Clone, Debug)]
pub struct RegexTokenizer {
    /// Delimiter pattern
    delimiter: Arc<Regex>,
}

impl RegexTokenizer {
    /// Create a tokenizer splitting at the matches of `pattern`.
    pub fn with_gaps(pattern: &str) -> Result<Self> {
        let delimiter = Regex::new(pattern)
            .map_err(|e| TweetextError::analysis(format!("Invalid regex pattern: {e}")))?;
        Ok(Self::gaps_from_regex(Arc::new(delimiter)))
    }

    /// Create a tokenizer from an already compiled, shared delimiter pattern.
    pub fn gaps_from_regex(delimiter: Arc<Regex>) -> Self {
        RegexTokenizer { delimiter }
    }
}

impl Tokenizer for RegexTokenizer {
    fn tokenize(&self, text: &str) -> TokenStream {
        let mut tokens = Vec::new();
        let mut last_end = 0;

        for mat in self.delimiter.find_iter(text) {
            tokens.push(Token::with_offsets(
                &text[last_end..mat.start()],
                tokens.len(),
                last_end,
                mat.start(),
            ));
            last_end = mat.end();
        }

        tokens.push(Token::with_offsets(
            &text[last_end..],
            tokens.len(),
            last_end,
            text.len(),
        ));

        Box::new(tokens.into_iter())
    }

    fn name(&self) -> &'static str {
        "regex"
    }
}
