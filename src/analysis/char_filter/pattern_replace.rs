use std::sync::Arc;

use regex::{NoExpand, Regex};

use super::CharFilter;
use crate::error::{Result, TweetextError};

/// A char filter that replaces every non-overlapping regex match.
///
/// Matches are found left to right in a single pass; replaced text is never
/// rescanned.
#[derive(Clone, Debug)]
pub struct PatternReplaceCharFilter {
    pattern: Arc<Regex>,
    replacement: String,
    name: &'static str,
}

impl PatternReplaceCharFilter {
    /// Create a new pattern replace char filter.
    pub fn new(pattern: &str, replacement: &str) -> Result<Self> {
        let regex = Regex::new(pattern)
            .map_err(|e| TweetextError::analysis(format!("Invalid regex pattern: {e}")))?;
        Ok(Self::from_regex(Arc::new(regex), replacement))
    }

    /// Create a filter from an already compiled, shared pattern.
    pub fn from_regex(pattern: Arc<Regex>, replacement: &str) -> Self {
        Self {
            pattern,
            replacement: replacement.to_string(),
            name: "pattern_replace",
        }
    }

    /// Create a filter that deletes every match.
    pub fn remover(pattern: Arc<Regex>) -> Self {
        Self::from_regex(pattern, "")
    }

    /// Set the name reported by [`CharFilter::name`].
    pub fn with_name(mut self, name: &'static str) -> Self {
        self.name = name;
        self
    }
}

impl CharFilter for PatternReplaceCharFilter {
    fn filter(&self, input: &str) -> String {
        // The replacement is literal text, `$1` is not expanded.
        self.pattern
            .replace_all(input, NoExpand(&self.replacement))
            .into_owned()
    }

    fn name(&self) -> &'static str {
        self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::pattern::CompiledPatterns;

    #[test]
    fn test_pattern_replace() {
        let filter = PatternReplaceCharFilter::new(r"(\d+)", "NUM").unwrap();
        assert_eq!(filter.filter("Year 2024"), "Year NUM");
    }

    #[test]
    fn test_replacement_is_literal() {
        let filter = PatternReplaceCharFilter::new(r"(\d+)", "$1$1").unwrap();
        assert_eq!(filter.filter("a1"), "a$1$1");
    }

    #[test]
    fn test_remove_pattern() {
        let filter = PatternReplaceCharFilter::new(r"-", "").unwrap();
        assert_eq!(filter.filter("123-456-789"), "123456789");
    }

    #[test]
    fn test_invalid_pattern() {
        let result = PatternReplaceCharFilter::new(r"(", "");
        assert!(result.is_err());
    }

    #[test]
    fn test_emoji_removal_leaves_no_gap() {
        let patterns = CompiledPatterns::compile().unwrap();
        let filter = PatternReplaceCharFilter::remover(patterns.emoji).with_name("emoji");

        assert_eq!(filter.filter("great😊job"), "greatjob");
        assert_eq!(filter.filter("sun☀ and 🌧rain"), "sun and rain");
        assert_eq!(filter.name(), "emoji");
    }

    #[test]
    fn test_noise_removal() {
        let patterns = CompiledPatterns::compile().unwrap();
        let filter = PatternReplaceCharFilter::remover(patterns.noise).with_name("noise");

        assert_eq!(filter.filter("check http://a.com/x now"), "check  now");
        assert_eq!(filter.filter("room 1234 ready"), "room  ready");
        assert_eq!(filter.filter("wow‼ wait…"), "wow wait");
        assert_eq!(filter.filter("hi @someone how are you"), "hi ");
        assert_eq!(filter.filter("a #tag b\nc"), "a \nc");
    }
}
