//! Keyword extraction strategy

use super::{AnalysisInput, AnalysisStrategy, StrategyReport};
use crate::counting::FrequencyTable;
use crate::lexicon::{self, STOP_WORDS};
use crate::stats::Keyword;

const MAX_KEYWORDS: usize = 10;
const MIN_KEYWORD_CHARS: usize = 4;

/// Ranked keywords of a text
#[derive(Debug, Clone, PartialEq)]
pub struct KeywordReport {
    /// Up to ten keywords, most frequent first
    pub keywords: Vec<Keyword>,
    /// Keyword tokens over all tokens, in percent
    pub keyword_density: f64,
    /// Tokens that survived filtering
    pub keyword_tokens: usize,
    /// All tokens
    pub total_tokens: usize,
}

/// Ranks words that are neither stop words nor shorter than four characters
#[derive(Debug, Clone, Copy, Default)]
pub struct KeywordAnalysis;

impl AnalysisStrategy for KeywordAnalysis {
    fn name(&self) -> &'static str {
        "keyword"
    }

    fn analyze(&self, input: &AnalysisInput<'_>) -> StrategyReport {
        let tokens = input.tokens();
        let table: FrequencyTable<&str> = tokens
            .iter()
            .map(String::as_str)
            .filter(|word| word.chars().count() >= MIN_KEYWORD_CHARS)
            .filter(|word| !lexicon::contains(STOP_WORDS, word))
            .collect();

        let keyword_tokens = table.total();
        let keywords = table
            .most_common(MAX_KEYWORDS)
            .into_iter()
            .map(|(word, count)| Keyword {
                word: word.to_string(),
                count,
                density: count as f64 / keyword_tokens as f64 * 100.0,
            })
            .collect();

        let keyword_density = if tokens.is_empty() {
            0.0
        } else {
            keyword_tokens as f64 / tokens.len() as f64 * 100.0
        };

        StrategyReport::Keyword(KeywordReport {
            keywords,
            keyword_density,
            keyword_tokens,
            total_tokens: tokens.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(text: &str) -> KeywordReport {
        match KeywordAnalysis.analyze_text(text) {
            StrategyReport::Keyword(report) => report,
            other => panic!("unexpected report {other:?}"),
        }
    }

    #[test]
    fn test_filters_and_ranks() {
        let report = report("Python para datos. Python para web. Los datos de Python son claros.");
        let words: Vec<&str> = report.keywords.iter().map(|k| k.word.as_str()).collect();
        assert_eq!(words, vec!["python", "datos", "claros"]);
        assert_eq!(report.keywords[0].count, 3);
        assert_eq!(report.keyword_tokens, 6);
        assert_eq!(report.total_tokens, 12);
        assert!((report.keywords[0].density - 50.0).abs() < 1e-9);
        assert!((report.keyword_density - 6.0 / 12.0 * 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_top_ten() {
        let text = (0..12)
            .map(|i| format!("keyword{i}"))
            .collect::<Vec<_>>()
            .join(" ");
        assert_eq!(report(&text).keywords.len(), 10);
    }

    #[test]
    fn test_only_short_words() {
        let report = report("a la de y el");
        assert!(report.keywords.is_empty());
        assert_eq!(report.keyword_density, 0.0);
    }

    #[test]
    fn test_empty() {
        let report = report("");
        assert!(report.keywords.is_empty());
        assert_eq!(report.total_tokens, 0);
        assert_eq!(report.keyword_density, 0.0);
    }
}
