//! Word length statistics strategy

use super::{AnalysisInput, AnalysisStrategy, StrategyReport};
use crate::counting::FrequencyTable;
use crate::stats::WordLengthSummary;

/// Word length distribution and lexical diversity
#[derive(Debug, Clone, PartialEq)]
pub struct StatisticalReport {
    /// `None` when the text has no words
    pub word_lengths: Option<WordLengthSummary>,
    /// Unique words over total words, 0 without words
    pub lexical_diversity: f64,
}

/// Describes the distribution of word lengths
#[derive(Debug, Clone, Copy, Default)]
pub struct StatisticalAnalysis;

fn summarize(lengths: &[usize]) -> Option<WordLengthSummary> {
    if lengths.is_empty() {
        return None;
    }

    let mut sorted = lengths.to_vec();
    sorted.sort_unstable();
    let mid = sorted.len() / 2;
    let median = if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) as f64 / 2.0
    } else {
        sorted[mid] as f64
    };

    let table: FrequencyTable<usize> = lengths.iter().copied().collect();
    let mode = table.most_common(1).first().map(|&(len, _)| len)?;

    let n = lengths.len() as f64;
    let mean = lengths.iter().sum::<usize>() as f64 / n;
    let variance = lengths
        .iter()
        .map(|&len| (len as f64 - mean).powi(2))
        .sum::<f64>()
        / n;

    Some(WordLengthSummary {
        median,
        mode,
        std_dev: variance.sqrt(),
        min: sorted[0],
        max: sorted[sorted.len() - 1],
    })
}

impl AnalysisStrategy for StatisticalAnalysis {
    fn name(&self) -> &'static str {
        "statistical"
    }

    fn analyze(&self, input: &AnalysisInput<'_>) -> StrategyReport {
        let tokens = input.tokens();
        let lengths: Vec<usize> = tokens.iter().map(|w| w.chars().count()).collect();

        let lexical_diversity = if tokens.is_empty() {
            0.0
        } else {
            let unique: FrequencyTable<&str> = tokens.iter().map(String::as_str).collect();
            unique.unique() as f64 / tokens.len() as f64
        };

        StrategyReport::Statistical(StatisticalReport {
            word_lengths: summarize(&lengths),
            lexical_diversity,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(text: &str) -> StatisticalReport {
        match StatisticalAnalysis.analyze_text(text) {
            StrategyReport::Statistical(report) => report,
            other => panic!("unexpected report {other:?}"),
        }
    }

    #[test]
    fn test_summary() {
        // lengths 3, 5, 3, 7
        let report = report("uno cinco dos abcdefg");
        let summary = report.word_lengths.unwrap();
        assert_eq!(summary.median, 4.0);
        assert_eq!(summary.mode, 3);
        assert_eq!(summary.min, 3);
        assert_eq!(summary.max, 7);
        // mean 4.5, squared deviations 2.25 + 0.25 + 2.25 + 6.25
        assert!((summary.std_dev - (11.0f64 / 4.0).sqrt()).abs() < 1e-9);
        assert_eq!(report.lexical_diversity, 1.0);
    }

    #[test]
    fn test_mode_tie_takes_first_occurring() {
        // lengths 4, 2, 2, 4 -> both twice, 4 seen first
        let summary = report("abcd ab cd efgh").word_lengths.unwrap();
        assert_eq!(summary.mode, 4);
        assert_eq!(summary.median, 3.0);
    }

    #[test]
    fn test_diversity() {
        assert_eq!(report("bueno bueno malo malo").lexical_diversity, 0.5);
    }

    #[test]
    fn test_empty() {
        let report = report("");
        assert!(report.word_lengths.is_none());
        assert_eq!(report.lexical_diversity, 0.0);
    }
}
