//! Token types for text analysis.
//!
//! A [`Token`] is the unit flowing between the tokenizer and the token
//! filters. Offsets refer to the text the tokenizer saw, i.e. the text after
//! every char filter has run, not the raw input.
//!
//! # Examples
//!
//! ```
//! use tweetext::analysis::token::Token;
//!
//! let token = Token::with_offsets("world", 1, 6, 11);
//! assert_eq!(token.text, "world");
//! assert_eq!(token.start_offset, 6);
//! assert_eq!(token.end_offset, 11);
//! ```

/// A token represents a single split candidate of the cleaned text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    /// The text content of the token
    pub text: String,

    /// Index of this candidate among all split candidates (0-based).
    ///
    /// Empty candidates are counted, so positions of surviving tokens may
    /// have gaps.
    pub position: usize,

    /// The byte offset where this token starts in the cleaned text
    pub start_offset: usize,

    /// The byte offset where this token ends in the cleaned text
    pub end_offset: usize,
}

impl Token {
    /// Create a new token with the given text and position.
    pub fn new<S: Into<String>>(text: S, position: usize) -> Self {
        Token {
            text: text.into(),
            position,
            start_offset: 0,
            end_offset: 0,
        }
    }

    /// Create a new token with text, position, and byte offsets.
    pub fn with_offsets<S: Into<String>>(
        text: S,
        position: usize,
        start_offset: usize,
        end_offset: usize,
    ) -> Self {
        Token {
            text: text.into(),
            position,
            start_offset,
            end_offset,
        }
    }

    /// Check if the token is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Consume the token, keeping only its text.
    pub fn into_text(self) -> String {
        self.text
    }
}

/// A token stream represents a sequence of tokens from the analysis pipeline.
pub type TokenStream = Box<dyn Iterator<Item = Token> + Send>;
