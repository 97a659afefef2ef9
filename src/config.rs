//! Tokenizer configuration.
//!
//! A [`TokenizerConfig`] names the word list the analyzer filters against.
//! It can be read from a JSON document or filled in from command-line
//! arguments.
//!
//! ```json
//! {
//!   "word_list": "/etc/tweetext/words.csv",
//!   "extra_words": ["rt", "via"]
//! }
//! ```
//!
//! # Examples
//!
//! ```
//! use tweetext::config::TokenizerConfig;
//!
//! let config: TokenizerConfig = serde_json::from_str(r#"{"extra_words": ["meh"]}"#).unwrap();
//! assert!(config.word_list.is_none());
//!
//! let analyzer = config.build_analyzer().unwrap();
//! let tokens: Vec<String> = analyzer.tokenize("meh the cat").collect();
//! assert_eq!(tokens, vec!["cat"]);
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::analysis::analyzer::tweet::TweetAnalyzer;
use crate::dictionary::WordDictionary;
use crate::error::{Result, TweetextError};

/// Configuration of the tweet analysis pipeline.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TokenizerConfig {
    /// Word list file; the bundled list is used when absent.
    pub word_list: Option<PathBuf>,

    /// Words treated as non-meaningful in addition to the word list.
    pub extra_words: Vec<String>,
}

impl TokenizerConfig {
    /// Create a configuration using the bundled word list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a configuration from a JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        serde_json::from_str(&text).map_err(|e| {
            TweetextError::config(format!("invalid config file {}: {e}", path.display()))
        })
    }

    /// Use the word list at `path`.
    pub fn with_word_list<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.word_list = Some(path.into());
        self
    }

    /// Add words treated as non-meaningful.
    pub fn with_extra_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extra_words.extend(words.into_iter().map(Into::into));
        self
    }

    /// Load the configured dictionary. Fail-open, see [`WordDictionary::load`].
    pub fn load_dictionary(&self) -> WordDictionary {
        let dictionary = match &self.word_list {
            Some(path) => WordDictionary::load(path),
            None => WordDictionary::bundled(),
        };
        dictionary.with_words(&self.extra_words)
    }

    /// Load the dictionary and build the analyzer.
    pub fn build_analyzer(&self) -> Result<TweetAnalyzer> {
        TweetAnalyzer::new(Arc::new(self.load_dictionary()))
    }
}
