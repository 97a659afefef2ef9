//! Char filter implementations for text cleansing.
//!
//! Char filters rewrite the raw string before it is passed to the tokenizer.
//! The tweet pipeline uses them to drop emoji and structural noise (URLs,
//! mentions, hashtags, digits) so that neither can reach the splitter.
//!
//! # Available Filters
//!
//! - [`pattern_replace::PatternReplaceCharFilter`] - Regex-based replacement
//!
//! # Examples
//!
//! ```
//! use tweetext::analysis::char_filter::CharFilter;
//! use tweetext::analysis::char_filter::pattern_replace::PatternReplaceCharFilter;
//!
//! let filter = PatternReplaceCharFilter::new(r"[0-9]+", "").unwrap();
//! assert_eq!(filter.filter("room 1234 ready"), "room  ready");
//! ```

/// Trait for character filters that transform text before tokenization.
pub trait CharFilter: Send + Sync {
    /// Apply this filter to the input text, returning the rewritten text.
    fn filter(&self, input: &str) -> String;

    /// Get the name of this char filter.
    fn name(&self) -> &'static str;
}

pub mod pattern_replace;
