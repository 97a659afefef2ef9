//! Tweet analyzer: extracts meaningful words from social-media text.
//!
//! The pipeline runs four steps, in this order:
//!
//! 1. Remove emoji and miscellaneous symbols ([`EMOJI_PATTERN`](crate::analysis::pattern::EMOJI_PATTERN)).
//! 2. Remove URLs, mentions, hashtags, digit runs, `‼` and `…`
//!    ([`NOISE_PATTERN`](crate::analysis::pattern::NOISE_PATTERN)).
//! 3. Split on whitespace, quotes, punctuation and brackets
//!    ([`DELIMITER_PATTERN`](crate::analysis::pattern::DELIMITER_PATTERN)).
//! 4. Drop empty candidates and words found in the [`WordDictionary`].
//!
//! Removing an emoji does not introduce a word boundary: `"great😊job"`
//! becomes the single token `"greatjob"`.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//!
//! use tweetext::analysis::analyzer::tweet::TweetAnalyzer;
//! use tweetext::dictionary::WordDictionary;
//!
//! let dictionary = Arc::new(WordDictionary::from_words(["the", "is", "a"]));
//! let analyzer = TweetAnalyzer::new(dictionary).unwrap();
//!
//! let tokens: Vec<String> = analyzer.tokenize("The weather is GREAT ☀ (really)!").collect();
//! assert_eq!(tokens, vec!["weather", "GREAT", "really"]);
//! ```

use std::fmt;
use std::sync::Arc;

use crate::analysis::analyzer::Analyzer;
use crate::analysis::analyzer::pipeline::PipelineAnalyzer;
use crate::analysis::char_filter::pattern_replace::PatternReplaceCharFilter;
use crate::analysis::pattern::CompiledPatterns;
use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::remove_empty::RemoveEmptyFilter;
use crate::analysis::token_filter::stop::StopFilter;
use crate::analysis::tokenizer::regex::RegexTokenizer;
use crate::dictionary::WordDictionary;
use crate::error::Result;

/// Analyzer producing the meaningful words of a social-media post.
///
/// Cloning is cheap: patterns and dictionary are shared.
#[derive(Clone, Debug)]
pub struct TweetAnalyzer {
    pipeline: PipelineAnalyzer,
    dictionary: Arc<WordDictionary>,
}

impl TweetAnalyzer {
    /// Create a tweet analyzer filtering against `dictionary`.
    pub fn new(dictionary: Arc<WordDictionary>) -> Result<Self> {
        Ok(Self::with_patterns(dictionary, CompiledPatterns::compile()?))
    }

    /// Create a tweet analyzer filtering against the bundled word list.
    pub fn bundled() -> Result<Self> {
        Self::new(Arc::new(WordDictionary::bundled()))
    }

    /// Create a tweet analyzer from already compiled patterns.
    pub fn with_patterns(dictionary: Arc<WordDictionary>, patterns: CompiledPatterns) -> Self {
        let tokenizer = Arc::new(RegexTokenizer::gaps_from_regex(patterns.delimiter));
        let pipeline = PipelineAnalyzer::new(tokenizer)
            .add_char_filter(Arc::new(
                PatternReplaceCharFilter::remover(patterns.emoji).with_name("emoji"),
            ))
            .add_char_filter(Arc::new(
                PatternReplaceCharFilter::remover(patterns.noise).with_name("noise"),
            ))
            .add_filter(Arc::new(RemoveEmptyFilter::new()))
            .add_filter(Arc::new(StopFilter::new(Arc::clone(&dictionary))))
            .with_name("tweet");

        TweetAnalyzer {
            pipeline,
            dictionary,
        }
    }

    /// Tokenize `text` into its meaningful words, in order of appearance.
    pub fn tokenize(&self, text: &str) -> Tokens {
        Tokens {
            inner: self.pipeline.analyze(text),
        }
    }

    /// Return the text after emoji and noise removal, before splitting.
    pub fn clean(&self, text: &str) -> String {
        self.pipeline.clean(text)
    }

    /// Get the dictionary of non-meaningful words.
    pub fn dictionary(&self) -> &Arc<WordDictionary> {
        &self.dictionary
    }
}

impl Analyzer for TweetAnalyzer {
    fn analyze(&self, text: &str) -> TokenStream {
        self.pipeline.analyze(text)
    }

    fn name(&self) -> &'static str {
        "tweet"
    }
}

/// The meaningful words of one input, produced lazily and in order.
pub struct Tokens {
    inner: TokenStream,
}

impl Iterator for Tokens {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        self.inner.next().map(|token| token.into_text())
    }
}

impl fmt::Debug for Tokens {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tokens").finish_non_exhaustive()
    }
}
