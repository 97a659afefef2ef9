//! Command line argument parsing for the tweetext CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::config::TokenizerConfig;
use crate::error::Result;

/// tweetext - extract meaningful words from social-media text
#[derive(Parser, Debug, Clone)]
#[command(name = "tweetext")]
#[command(about = "Extract meaningful words from social-media text")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct TweetextArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Configuration file (JSON)
    #[arg(short, long, value_name = "CONFIG_FILE")]
    pub config: Option<PathBuf>,

    /// Word list of non-meaningful words, one per line (default: bundled list)
    #[arg(long = "words", env = "TWEETEXT_WORDS", value_name = "WORD_LIST")]
    pub word_list: Option<PathBuf>,

    /// Additional non-meaningful word (repeatable)
    #[arg(long = "extra-word", value_name = "WORD")]
    pub extra_words: Vec<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl TweetextArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }

    /// Build the tokenizer configuration: config file first, then flags.
    pub fn tokenizer_config(&self) -> Result<TokenizerConfig> {
        let mut config = match &self.config {
            Some(path) => TokenizerConfig::from_file(path)?,
            None => TokenizerConfig::new(),
        };
        if let Some(word_list) = &self.word_list {
            config = config.with_word_list(word_list);
        }
        Ok(config.with_extra_words(self.extra_words.iter().cloned()))
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Tokenize text given as arguments, or each line of a file or stdin
    Tokenize(TokenizeArgs),

    /// Tokenize a field of JSON Lines records, emitting one record per token
    Stream(StreamArgs),
}

/// Arguments for tokenizing text
#[derive(Parser, Debug, Clone)]
pub struct TokenizeArgs {
    /// Texts to tokenize; when omitted, lines are read from --input or stdin
    #[arg(value_name = "TEXT")]
    pub texts: Vec<String>,

    /// Read one text per line from this file
    #[arg(short, long, value_name = "FILE", conflicts_with = "texts")]
    pub input: Option<PathBuf>,
}

/// Arguments for processing a record stream
#[derive(Parser, Debug, Clone)]
pub struct StreamArgs {
    /// Record schema as comma-separated name:type pairs
    #[arg(long, default_value = "text:string")]
    pub schema: String,

    /// Attribute holding the text to tokenize
    #[arg(long, default_value = "text")]
    pub field: String,

    /// Read JSON Lines records from this file instead of stdin
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Process all records on the thread pool (reads the whole input first)
    #[arg(long)]
    pub parallel: bool,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_command() {
        let args =
            TweetextArgs::try_parse_from(["tweetext", "tokenize", "hello world", "second"])
                .unwrap();

        if let Command::Tokenize(tokenize_args) = args.command {
            assert_eq!(tokenize_args.texts, vec!["hello world", "second"]);
            assert!(tokenize_args.input.is_none());
        } else {
            panic!("Expected Tokenize command");
        }
    }

    #[test]
    fn test_tokenize_input_conflicts_with_texts() {
        let result =
            TweetextArgs::try_parse_from(["tweetext", "tokenize", "text", "--input", "f.txt"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_stream_command() {
        let args = TweetextArgs::try_parse_from([
            "tweetext",
            "stream",
            "--schema",
            "id:long,body:string",
            "--field",
            "body",
            "--parallel",
        ])
        .unwrap();

        if let Command::Stream(stream_args) = args.command {
            assert_eq!(stream_args.schema, "id:long,body:string");
            assert_eq!(stream_args.field, "body");
            assert!(stream_args.parallel);
        } else {
            panic!("Expected Stream command");
        }
    }

    #[test]
    fn test_verbosity_levels() {
        // Default verbosity
        let args = TweetextArgs::try_parse_from(["tweetext", "tokenize"]).unwrap();
        assert_eq!(args.verbosity(), 1);

        // Multiple verbose flags
        let args = TweetextArgs::try_parse_from(["tweetext", "-vv", "tokenize"]).unwrap();
        assert_eq!(args.verbosity(), 2);

        // Quiet flag
        let args = TweetextArgs::try_parse_from(["tweetext", "--quiet", "tokenize"]).unwrap();
        assert_eq!(args.verbosity(), 0);
    }

    #[test]
    fn test_output_format() {
        let args =
            TweetextArgs::try_parse_from(["tweetext", "--format", "json", "tokenize"]).unwrap();
        assert_eq!(args.output_format, OutputFormat::Json);
    }

    #[test]
    fn test_tokenizer_config_from_flags() {
        let args = TweetextArgs::try_parse_from([
            "tweetext",
            "--words",
            "custom.csv",
            "--extra-word",
            "foo",
            "--extra-word",
            "bar",
            "tokenize",
        ])
        .unwrap();

        let config = args.tokenizer_config().unwrap();
        assert_eq!(config.word_list, Some(PathBuf::from("custom.csv")));
        assert_eq!(config.extra_words, vec!["foo", "bar"]);
    }
}
