//! Analysis strategies
//!
//! Every strategy is a stateless, pure function of an [`AnalysisInput`].
//! The input is tokenized once and shared by all strategies of a run.

mod frequency;
mod keyword;
mod readability;
mod sentiment;
mod statistical;
mod structural;

pub use frequency::{FrequencyAnalysis, FrequencyReport};
pub use keyword::{KeywordAnalysis, KeywordReport};
pub use readability::{count_syllables, ReadabilityAnalysis, ReadabilityReport};
pub use sentiment::{SentimentAnalysis, SentimentReport};
pub use statistical::{StatisticalAnalysis, StatisticalReport};
pub use structural::{split_sentences, StructuralAnalysis, StructuralReport};

use crate::pipeline::Pipeline;
use crate::tokenizer::words;

/// Text prepared for analysis
#[derive(Debug, Clone)]
pub struct AnalysisInput<'a> {
    raw: &'a str,
    normalized: String,
    tokens: Vec<String>,
}

impl<'a> AnalysisInput<'a> {
    /// Prepare `raw` with the standard pipeline (whitespace collapsing and lowercasing)
    pub fn new(raw: &'a str) -> Self {
        Self::with_pipeline(raw, &Pipeline::standard(true, false))
    }

    /// Prepare `raw` with a custom pipeline
    pub fn with_pipeline(raw: &'a str, pipeline: &Pipeline) -> Self {
        let normalized = pipeline.run(raw);
        let tokens = words(&normalized).collect();
        Self {
            raw,
            normalized,
            tokens,
        }
    }

    /// The text exactly as supplied; line structure is intact
    pub fn raw(&self) -> &str {
        self.raw
    }

    /// The preprocessed text
    pub fn normalized(&self) -> &str {
        &self.normalized
    }

    /// Words of the preprocessed text
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }
}

/// Output of one strategy
#[derive(Debug, Clone)]
pub enum StrategyReport {
    /// Word counts
    Frequency(FrequencyReport),
    /// Polarity and emotion
    Sentiment(SentimentReport),
    /// Sentences and paragraphs
    Structural(StructuralReport),
    /// Reading ease
    Readability(ReadabilityReport),
    /// Word length distribution
    Statistical(StatisticalReport),
    /// Ranked keywords
    Keyword(KeywordReport),
}

/// An interchangeable analysis algorithm
pub trait AnalysisStrategy: Send + Sync {
    /// Strategy name for logging and listing
    fn name(&self) -> &'static str;

    /// Analyze prepared input
    fn analyze(&self, input: &AnalysisInput<'_>) -> StrategyReport;

    /// Analyze plain text, preparing it with the standard pipeline
    fn analyze_text(&self, text: &str) -> StrategyReport {
        self.analyze(&AnalysisInput::new(text))
    }
}

/// The six built-in strategies in their canonical order
pub fn default_strategies() -> Vec<Box<dyn AnalysisStrategy>> {
    vec![
        Box::new(FrequencyAnalysis),
        Box::new(SentimentAnalysis),
        Box::new(StructuralAnalysis),
        Box::new(ReadabilityAnalysis),
        Box::new(StatisticalAnalysis),
        Box::new(KeywordAnalysis),
    ]
}
