//! # tweetext
//!
//! A noise-stripping word tokenizer for social-media text.
//!
//! ## Features
//!
//! - Emoji, URL, mention, hashtag and digit removal
//! - Delimiter-based splitting (punctuation, quotes, brackets)
//! - Case-insensitive filtering against a word list of non-meaningful words
//! - A stream boundary that fans one input record out into one record per token
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use tweetext::analysis::analyzer::tweet::TweetAnalyzer;
//! use tweetext::dictionary::WordDictionary;
//!
//! let dictionary = Arc::new(WordDictionary::from_words(["the", "is"]));
//! let analyzer = TweetAnalyzer::new(dictionary).unwrap();
//!
//! let tokens: Vec<String> = analyzer.tokenize("The sky is blue http://t.co/x").collect();
//! assert_eq!(tokens, vec!["sky", "blue"]);
//! ```

pub mod analysis;
pub mod cli;
pub mod config;
pub mod dictionary;
pub mod error;
pub mod stream;

pub mod prelude {
    pub use crate::analysis::analyzer::Analyzer;
    pub use crate::analysis::analyzer::tweet::{TweetAnalyzer, Tokens};
    pub use crate::config::TokenizerConfig;
    pub use crate::dictionary::WordDictionary;
    pub use crate::error::{Result, TweetextError};
    pub use crate::stream::{
        Attribute, AttributeType, AttributeValue, Event, EventSink, StreamDefinition,
        TokenizeProcessor,
    };
}
