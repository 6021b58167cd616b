//! Sentence and paragraph structure strategy

use super::{AnalysisInput, AnalysisStrategy, StrategyReport};
use regex::Regex;
use std::sync::OnceLock;

fn sentence_regex() -> &'static Regex {
    static SENTENCE: OnceLock<Regex> = OnceLock::new();
    SENTENCE.get_or_init(|| Regex::new(r"[.!?]+").expect("sentence pattern is valid"))
}

fn paragraph_regex() -> &'static Regex {
    static PARAGRAPH: OnceLock<Regex> = OnceLock::new();
    PARAGRAPH.get_or_init(|| Regex::new(r"\n[ \t\r]*\n").expect("paragraph pattern is valid"))
}

/// Non-blank sentences of `text`, split on runs of `.`, `!` and `?`
pub fn split_sentences(text: &str) -> Vec<&str> {
    sentence_regex()
        .split(text)
        .filter(|s| !s.trim().is_empty())
        .collect()
}

fn split_paragraphs(text: &str) -> Vec<&str> {
    paragraph_regex()
        .split(text)
        .filter(|p| !p.trim().is_empty())
        .collect()
}

/// Structure of a text
#[derive(Debug, Clone, PartialEq)]
pub struct StructuralReport {
    /// Non-blank sentences
    pub sentence_count: usize,
    /// Non-blank paragraphs
    pub paragraph_count: usize,
    /// Mean words per sentence, 0 without sentences
    pub avg_sentence_length: f64,
}

/// Counts sentences and paragraphs of the raw text
#[derive(Debug, Clone, Copy, Default)]
pub struct StructuralAnalysis;

impl AnalysisStrategy for StructuralAnalysis {
    fn name(&self) -> &'static str {
        "structural"
    }

    fn analyze(&self, input: &AnalysisInput<'_>) -> StrategyReport {
        // Paragraph breaks only survive in the raw text.
        let sentences = split_sentences(input.raw());
        let paragraph_count = split_paragraphs(input.raw()).len();

        let avg_sentence_length = if sentences.is_empty() {
            0.0
        } else {
            let words: usize = sentences
                .iter()
                .map(|s| s.split_whitespace().count())
                .sum();
            words as f64 / sentences.len() as f64
        };

        StrategyReport::Structural(StructuralReport {
            sentence_count: sentences.len(),
            paragraph_count,
            avg_sentence_length,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(text: &str) -> StructuralReport {
        match StructuralAnalysis.analyze_text(text) {
            StrategyReport::Structural(report) => report,
            other => panic!("unexpected report {other:?}"),
        }
    }

    #[test]
    fn test_sentences_and_paragraphs() {
        let report = report("Hola mundo. ¿Qué tal?!\n\nSegundo párrafo aquí...");
        assert_eq!(report.sentence_count, 3);
        assert_eq!(report.paragraph_count, 2);
        // 2 + 2 + 3 words over 3 sentences
        assert!((report.avg_sentence_length - 7.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_blank_segments_ignored() {
        let report = report("...!!! ???");
        assert_eq!(report.sentence_count, 0);
        assert_eq!(report.paragraph_count, 1);
        assert_eq!(report.avg_sentence_length, 0.0);
    }

    #[test]
    fn test_text_without_terminator_is_one_sentence() {
        let report = report("just some words");
        assert_eq!(report.sentence_count, 1);
        assert_eq!(report.avg_sentence_length, 3.0);
    }

    #[test]
    fn test_paragraph_separator_with_spaces() {
        assert_eq!(report("Uno.\n   \nDos.\n\n\n\nTres.").paragraph_count, 3);
    }
}
