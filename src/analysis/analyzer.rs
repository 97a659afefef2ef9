//! Analyzer implementations that combine char filters, a tokenizer and token filters.
//!
//! - [`pipeline::PipelineAnalyzer`] - Custom char filter + tokenizer + filter chains
//! - [`tweet::TweetAnalyzer`] - The social-media pipeline: emoji and noise
//!   removal, delimiter splitting, stop-word removal

pub mod analyzer;
pub mod pipeline;
pub mod tweet;

pub use analyzer::Analyzer;
