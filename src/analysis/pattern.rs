//! Regular expressions used by the tweet analysis pipeline.
//!
//! Three patterns drive the pipeline, applied in this order:
//!
//! 1. [`EMOJI_PATTERN`] removes pictographs and miscellaneous symbols.
//! 2. [`NOISE_PATTERN`] removes URLs, mentions, hashtags, digit runs, `‼` and `…`.
//! 3. [`DELIMITER_PATTERN`] splits what is left into word candidates.
//!
//! Ranges are written as code points. The regex engine works on Unicode
//! scalar values, so supplementary-plane emoji are matched as one character.

use std::sync::Arc;

use regex::Regex;

use crate::error::Result;

/// Emoji and symbol ranges: U+1F000..=U+1F3FF, U+1F400..=U+1F7FF, U+2600..=U+27FF.
pub const EMOJI_PATTERN: &str = r"(?i)[\x{1F000}-\x{1F3FF}\x{1F400}-\x{1F7FF}\x{2600}-\x{27FF}]";

/// Structural noise removed before splitting.
///
/// Mentions and hashtags consume everything up to the next line terminator,
/// not just the tag itself. `"#cool 42 animal"` is removed as a whole.
// TODO: decide whether mention/hashtag removal should stop at the end of the tag.
pub const NOISE_PATTERN: &str = concat!(
    r"(?:https?|ftp|file)://[-a-zA-Z0-9+&@#/%?=~_|!:,.;]*[-a-zA-Z0-9+&@#/%=~_|]",
    r"|@[^\n\r\x{85}\x{2028}\x{2029}]*",
    r"|#[^\n\r\x{85}\x{2028}\x{2029}]*",
    r"|[0-9]+",
    r"|‼",
    r"|…",
);

/// Delimiters between word candidates.
///
/// Whitespace is ASCII-only and `+` counts as a delimiter.
pub const DELIMITER_PATTERN: &str = concat!(
    r#"[\t\n\x0B\x0C\r +'“”‘’".?!,:;&]"#,
    r"|[<>«»{}()\[\]]",
    r"|[0-9]+:[0-9]+",
    r"|[0-9]+\.[0-9]+",
    r"|[♫♪]+",
);

/// The compiled form of the three pipeline patterns.
///
/// Compiled once and shared read-only by every filter built from it.
#[derive(Clone, Debug)]
pub struct CompiledPatterns {
    pub emoji: Arc<Regex>,
    pub noise: Arc<Regex>,
    pub delimiter: Arc<Regex>,
}

impl CompiledPatterns {
    /// Compile all pipeline patterns.
    pub fn compile() -> Result<Self> {
        Ok(CompiledPatterns {
            emoji: Arc::new(Regex::new(EMOJI_PATTERN)?),
            noise: Arc::new(Regex::new(NOISE_PATTERN)?),
            delimiter: Arc::new(Regex::new(DELIMITER_PATTERN)?),
        })
    }
}
