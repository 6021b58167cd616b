//! Vocabulary based sentiment strategy

use super::{AnalysisInput, AnalysisStrategy, StrategyReport};
use crate::lexicon::{self, ENTHUSIASM, NEGATIVE, NEUTRAL, POSITIVE};
use crate::stats::Emotion;
use std::collections::HashSet;

const POSITIVE_WEIGHT: f64 = 1.5;
const NEGATIVE_WEIGHT: f64 = 1.5;
const ENTHUSIASM_WEIGHT: f64 = 2.0;

/// Polarity of a text
#[derive(Debug, Clone, PartialEq)]
pub struct SentimentReport {
    /// Score in [-100, 100]
    pub score: f64,
    /// Dominant emotion
    pub emotion: Emotion,
    /// Distinct positive words
    pub positive: usize,
    /// Distinct negative words
    pub negative: usize,
    /// Distinct enthusiasm words
    pub enthusiasm: usize,
    /// Distinct neutral words
    pub neutral: usize,
}

/// Scores the distinct words of a text against fixed vocabularies
#[derive(Debug, Clone, Copy, Default)]
pub struct SentimentAnalysis;

impl SentimentAnalysis {
    fn emotion(positive: usize, negative: usize, enthusiasm: usize) -> Emotion {
        if enthusiasm > 1 {
            Emotion::Enthusiastic
        } else if positive > negative {
            Emotion::Positive
        } else if negative > positive {
            Emotion::Negative
        } else {
            Emotion::Neutral
        }
    }
}

impl AnalysisStrategy for SentimentAnalysis {
    fn name(&self) -> &'static str {
        "sentiment"
    }

    fn analyze(&self, input: &AnalysisInput<'_>) -> StrategyReport {
        let unique: HashSet<&str> = input.tokens().iter().map(String::as_str).collect();
        let hits = |vocabulary: &[&str]| {
            unique
                .iter()
                .filter(|word| lexicon::contains(vocabulary, word))
                .count()
        };

        let positive = hits(POSITIVE);
        let negative = hits(NEGATIVE);
        let enthusiasm = hits(ENTHUSIASM);
        let neutral = hits(NEUTRAL);

        let weighted = (positive as f64 * POSITIVE_WEIGHT + enthusiasm as f64 * ENTHUSIASM_WEIGHT)
            - negative as f64 * NEGATIVE_WEIGHT;
        let score = (weighted / unique.len().max(1) as f64 * 100.0).clamp(-100.0, 100.0);

        StrategyReport::Sentiment(SentimentReport {
            score,
            emotion: Self::emotion(positive, negative, enthusiasm),
            positive,
            negative,
            enthusiasm,
            neutral,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(text: &str) -> SentimentReport {
        match SentimentAnalysis.analyze_text(text) {
            StrategyReport::Sentiment(report) => report,
            other => panic!("unexpected report {other:?}"),
        }
    }

    #[test]
    fn test_tie_is_neutral() {
        let report = report("bueno bueno malo");
        assert_eq!(report.positive, 1);
        assert_eq!(report.negative, 1);
        assert_eq!(report.score, 0.0);
        assert_eq!(report.emotion, Emotion::Neutral);
    }

    #[test]
    fn test_positive_score() {
        // 1 positive over 4 distinct words
        let report = report("Python es excelente hoy");
        assert_eq!(report.score, 1.5 / 4.0 * 100.0);
        assert_eq!(report.emotion, Emotion::Positive);
    }

    #[test]
    fn test_negative() {
        let report = report("un error terrible");
        assert_eq!(report.negative, 2);
        assert_eq!(report.score, -100.0);
        assert_eq!(report.emotion, Emotion::Negative);
    }

    #[test]
    fn test_enthusiasm_takes_priority() {
        let report = report("wow amazing but bad bad terrible horrible day");
        assert_eq!(report.enthusiasm, 2);
        assert_eq!(report.emotion, Emotion::Enthusiastic);
    }

    #[test]
    fn test_score_is_clamped() {
        let report = report("wow amazing");
        assert_eq!(report.score, 100.0);
    }

    #[test]
    fn test_neutral_words_are_counted_not_scored() {
        let report = report("ok normal day");
        assert_eq!(report.neutral, 2);
        assert_eq!(report.score, 0.0);
    }

    #[test]
    fn test_empty() {
        let report = report("");
        assert_eq!(report.score, 0.0);
        assert_eq!(report.emotion, Emotion::Neutral);
    }
}
