//! Deterministic text statistics
//!
//! This crate holds the pure algorithms of textlens: lazy tokenization,
//! the preprocessing pipeline, the six analysis strategies and the
//! [`TextStatistics`] record. It performs no I/O and spawns no threads;
//! caching, concurrency and observers live in `textlens-engine`.
//!
//! # Example
//!
//! ```
//! use textlens_core::strategies::{AnalysisStrategy, SentimentAnalysis, StrategyReport};
//!
//! match SentimentAnalysis.analyze_text("bueno bueno malo") {
//!     StrategyReport::Sentiment(report) => assert_eq!(report.score, 0.0),
//!     _ => unreachable!(),
//! }
//! ```

#![warn(missing_docs)]

pub mod counting;
pub mod error;
pub mod lexicon;
pub mod pipeline;
pub mod stats;
pub mod strategies;
pub mod tokenizer;

// Re-export key types
pub use counting::FrequencyTable;
pub use error::{CoreError, Result};
pub use pipeline::{preprocess, Pipeline, TextTransform};
pub use stats::{
    content_hash, ComplexityLevel, Emotion, Keyword, TextStatistics, TextStatisticsBuilder,
    WordLengthSummary,
};
pub use strategies::{default_strategies, AnalysisInput, AnalysisStrategy, StrategyReport};
pub use tokenizer::{find_patterns, ngram_frequencies, ngrams, sliding_window, words, Ngram};
