//! Dictionary of non-meaningful words.
//!
//! A [`WordDictionary`] is read once at startup from a UTF-8 word list (one
//! word per line, no header) and is read-only afterwards. Lines end at `\n`,
//! `\r\n` or a lone `\r`; bytes that are not valid UTF-8 are replaced with
//! U+FFFD. Lookups ignore case: entries and queries are compared under
//! Unicode default case folding.
//!
//! Loading is fail-open. A missing or unreadable word list is logged and
//! yields an empty dictionary (or whatever was read before the failure), so
//! a broken resource never stops the pipeline from starting. With an empty
//! dictionary every non-empty token counts as meaningful.
//!
//! # Examples
//!
//! ```
//! use tweetext::dictionary::WordDictionary;
//!
//! let dictionary = WordDictionary::from_reader("the\nIs\n\na\n".as_bytes());
//! assert_eq!(dictionary.len(), 3);
//! assert!(dictionary.contains("THE"));
//! assert!(dictionary.contains("is"));
//! assert!(dictionary.is_meaningful("cat"));
//! ```

use std::borrow::Cow;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use ahash::AHashSet;
use log::{error, info};

/// The word list shipped with the crate.
const BUNDLED_WORDS: &str = include_str!("../resources/words.csv");

/// An immutable, case-insensitive set of non-meaningful words.
#[derive(Clone, Debug, Default)]
pub struct WordDictionary {
    /// Case-folded entries
    words: AHashSet<String>,
}

impl WordDictionary {
    /// Create a dictionary with no entries.
    pub fn empty() -> Self {
        WordDictionary::default()
    }

    /// Create a dictionary from a list of words. Empty words are skipped.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut dictionary = WordDictionary::empty();
        for word in words {
            dictionary.insert(word.as_ref());
        }
        dictionary
    }

    /// Load the word list bundled with the crate.
    pub fn bundled() -> Self {
        Self::read_words(BUNDLED_WORDS.as_bytes(), "bundled word list")
    }

    /// Load a word list from a file.
    ///
    /// Never fails: errors are logged and the entries read so far are kept.
    pub fn load<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        match File::open(path) {
            Ok(file) => {
                Self::read_words(BufReader::new(file), &path.display().to_string())
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                error!("Word list is not found: {}: {e}", path.display());
                WordDictionary::empty()
            }
            Err(e) => {
                error!(
                    "Error occurred while opening word list {}: {e}",
                    path.display()
                );
                WordDictionary::empty()
            }
        }
    }

    /// Load a word list from any buffered reader.
    ///
    /// Never fails: a read error is logged and the entries read so far are kept.
    pub fn from_reader<R: BufRead>(reader: R) -> Self {
        Self::read_words(reader, "reader")
    }

    fn read_words<R: BufRead>(mut reader: R, source: &str) -> Self {
        let mut dictionary = WordDictionary::empty();
        let mut buf = Vec::new();
        loop {
            buf.clear();
            match reader.read_until(b'\n', &mut buf) {
                Ok(0) => break,
                Ok(_) => {
                    let line = buf.strip_suffix(b"\n").unwrap_or(&buf[..]);
                    // A lone '\r' ends a line too; the empty piece left by "\r\n" is skipped.
                    for word in line.split(|&b| b == b'\r') {
                        dictionary.insert(&String::from_utf8_lossy(word));
                    }
                }
                Err(e) => {
                    error!("Error occurred while reading word list {source}: {e}");
                    break;
                }
            }
        }
        info!("Loaded {} words from {source}", dictionary.len());
        dictionary
    }

    fn insert(&mut self, word: &str) {
        if !word.is_empty() {
            self.words.insert(fold_case(word).into_owned());
        }
    }

    /// Merge additional words into a copy of this dictionary.
    pub fn with_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for word in words {
            self.insert(word.as_ref());
        }
        self
    }

    /// Check whether `word` is an entry, ignoring case.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(fold_case(word).as_ref())
    }

    /// Check whether `word` is meaningful, i.e. not an entry.
    pub fn is_meaningful(&self, word: &str) -> bool {
        !self.contains(word)
    }

    /// Get the number of distinct entries.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if the dictionary has no entries.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Fold `word` to the form stored in the set.
fn fold_case(word: &str) -> Cow<'_, str> {
    if !word.is_ascii() {
        Cow::Owned(caseless::default_case_fold_str(word))
    } else if word.bytes().any(|b| b.is_ascii_uppercase()) {
        Cow::Owned(word.to_ascii_lowercase())
    } else {
        Cow::Borrowed(word)
    }
}
