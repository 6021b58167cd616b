//! Word frequency strategy

use super::{AnalysisInput, AnalysisStrategy, StrategyReport};
use crate::counting::FrequencyTable;

/// Word counts of a text
#[derive(Debug, Clone)]
pub struct FrequencyReport {
    /// Occurrences per word
    pub counts: FrequencyTable<String>,
    /// Number of words
    pub total_words: usize,
    /// Number of distinct words
    pub unique_words: usize,
}

impl FrequencyReport {
    /// The `limit` most frequent words
    pub fn most_common(&self, limit: usize) -> Vec<(String, usize)> {
        self.counts.most_common(limit)
    }
}

/// Counts every word
#[derive(Debug, Clone, Copy, Default)]
pub struct FrequencyAnalysis;

impl AnalysisStrategy for FrequencyAnalysis {
    fn name(&self) -> &'static str {
        "frequency"
    }

    fn analyze(&self, input: &AnalysisInput<'_>) -> StrategyReport {
        let counts: FrequencyTable<String> = input.tokens().iter().cloned().collect();
        StrategyReport::Frequency(FrequencyReport {
            total_words: counts.total(),
            unique_words: counts.unique(),
            counts,
        })
    }
}
