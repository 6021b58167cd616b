//! Flesch style reading ease strategy

use super::structural::split_sentences;
use super::{AnalysisInput, AnalysisStrategy, StrategyReport};
use crate::stats::ComplexityLevel;

const BASE: f64 = 206.835;
const SENTENCE_WEIGHT: f64 = 1.015;
const SYLLABLE_WEIGHT: f64 = 84.6;

fn is_vowel(ch: char) -> bool {
    matches!(
        ch,
        'a' | 'e' | 'i' | 'o' | 'u' | 'y'
            | 'á' | 'é' | 'í' | 'ó' | 'ú' | 'ü'
            | 'à' | 'è' | 'ì' | 'ò' | 'ù'
            | 'â' | 'ê' | 'î' | 'ô' | 'û'
    )
}

/// Number of vowel groups in `word`, at least 1
pub fn count_syllables(word: &str) -> usize {
    let mut groups = 0;
    let mut in_vowel = false;
    for ch in word.chars().flat_map(char::to_lowercase) {
        let vowel = is_vowel(ch);
        if vowel && !in_vowel {
            groups += 1;
        }
        in_vowel = vowel;
    }
    groups.max(1)
}

/// Reading ease of a text
#[derive(Debug, Clone, PartialEq)]
pub struct ReadabilityReport {
    /// Score in [0, 100], higher is easier
    pub score: f64,
    /// Complexity bucket
    pub level: ComplexityLevel,
    /// Mean words per sentence
    pub avg_words_per_sentence: f64,
    /// Mean syllables per word
    pub avg_syllables_per_word: f64,
}

/// Approximates Flesch reading ease from sentence length and syllables
#[derive(Debug, Clone, Copy, Default)]
pub struct ReadabilityAnalysis;

impl AnalysisStrategy for ReadabilityAnalysis {
    fn name(&self) -> &'static str {
        "readability"
    }

    fn analyze(&self, input: &AnalysisInput<'_>) -> StrategyReport {
        let sentences = split_sentences(input.normalized()).len();
        let tokens = input.tokens();

        if sentences == 0 || tokens.is_empty() {
            return StrategyReport::Readability(ReadabilityReport {
                score: 0.0,
                level: ComplexityLevel::Simple,
                avg_words_per_sentence: 0.0,
                avg_syllables_per_word: 0.0,
            });
        }

        let syllables: usize = tokens.iter().map(|w| count_syllables(w)).sum();
        let words_per_sentence = tokens.len() as f64 / sentences as f64;
        let syllables_per_word = syllables as f64 / tokens.len() as f64;

        let score = (BASE - SENTENCE_WEIGHT * words_per_sentence
            - SYLLABLE_WEIGHT * syllables_per_word)
            .clamp(0.0, 100.0);

        StrategyReport::Readability(ReadabilityReport {
            score,
            level: ComplexityLevel::from_score(score),
            avg_words_per_sentence: words_per_sentence,
            avg_syllables_per_word: syllables_per_word,
        })
    }
}
