//! Result assembly module
//!
//! Folds the reports of whatever strategies ran into one validated
//! [`TextStatistics`]. Word counts come from the token list, so a run with
//! a reduced strategy set still produces consistent core numbers.

use crate::error::Result;
use textlens_core::{
    content_hash, AnalysisInput, ComplexityLevel, FrequencyTable, StrategyReport, TextStatistics,
};

const MOST_COMMON_LIMIT: usize = 10;

/// Assembler for combining strategy reports
#[derive(Debug, Default, Clone, Copy)]
pub struct ResultAssembler;

impl ResultAssembler {
    /// Create a new result assembler
    pub fn new() -> Self {
        Self
    }

    /// Combine `reports` computed over `input` into one record
    pub fn assemble(
        &self,
        input: &AnalysisInput<'_>,
        reports: Vec<StrategyReport>,
    ) -> Result<TextStatistics> {
        let tokens = input.tokens();
        let total_words = tokens.len();
        let avg_word_length = if tokens.is_empty() {
            0.0
        } else {
            tokens.iter().map(|w| w.chars().count()).sum::<usize>() as f64 / total_words as f64
        };

        let mut unique_words = None;
        let mut builder = TextStatistics::builder()
            .total_chars(input.raw().chars().count())
            .avg_word_length(avg_word_length)
            .text_hash(content_hash(input.raw()))
            .readability(0.0, ComplexityLevel::Simple);

        for report in reports {
            builder = match report {
                StrategyReport::Frequency(freq) => {
                    unique_words = Some(freq.unique_words);
                    builder.most_common(freq.most_common(MOST_COMMON_LIMIT))
                }
                StrategyReport::Sentiment(sentiment) => {
                    builder.sentiment(sentiment.score, sentiment.emotion)
                }
                StrategyReport::Structural(structure) => builder.structure(
                    structure.sentence_count,
                    structure.paragraph_count,
                    structure.avg_sentence_length,
                ),
                StrategyReport::Readability(readability) => {
                    builder.readability(readability.score, readability.level)
                }
                StrategyReport::Statistical(stats) => builder
                    .word_lengths(stats.word_lengths)
                    .lexical_diversity(stats.lexical_diversity),
                StrategyReport::Keyword(keywords) => {
                    builder.keywords(keywords.keywords, keywords.keyword_density)
                }
            };
        }

        let unique_words = unique_words.unwrap_or_else(|| {
            let table: FrequencyTable<&str> = tokens.iter().map(String::as_str).collect();
            table.unique()
        });

        Ok(builder.words(total_words, unique_words).build()?)
    }
}
