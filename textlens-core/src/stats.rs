//! Text statistics record
//!
//! [`TextStatistics`] is immutable once built; it can only be produced by
//! [`TextStatisticsBuilder::build`], which checks the record's invariants.

use crate::error::{CoreError, Result};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;

/// Reading difficulty bucket derived from the readability score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ComplexityLevel {
    /// Score of 80 or more
    Simple,
    /// Score in [60, 80)
    Medium,
    /// Score in [40, 60)
    Complex,
    /// Score below 40
    Advanced,
}

impl ComplexityLevel {
    /// Bucket a readability score
    pub fn from_score(score: f64) -> Self {
        if score >= 80.0 {
            ComplexityLevel::Simple
        } else if score >= 60.0 {
            ComplexityLevel::Medium
        } else if score >= 40.0 {
            ComplexityLevel::Complex
        } else {
            ComplexityLevel::Advanced
        }
    }

    /// Upper-case name, as serialized
    pub fn as_str(&self) -> &'static str {
        match self {
            ComplexityLevel::Simple => "SIMPLE",
            ComplexityLevel::Medium => "MEDIUM",
            ComplexityLevel::Complex => "COMPLEX",
            ComplexityLevel::Advanced => "ADVANCED",
        }
    }
}

impl fmt::Display for ComplexityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Dominant emotion tag of a text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Emotion {
    /// More than one enthusiasm word
    Enthusiastic,
    /// Positive words outnumber negative ones
    Positive,
    /// Negative words outnumber positive ones
    Negative,
    /// Anything else
    #[default]
    Neutral,
}

impl Emotion {
    /// Lower-case name, as serialized
    pub fn as_str(&self) -> &'static str {
        match self {
            Emotion::Enthusiastic => "enthusiastic",
            Emotion::Positive => "positive",
            Emotion::Negative => "negative",
            Emotion::Neutral => "neutral",
        }
    }
}

impl fmt::Display for Emotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A ranked keyword
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Keyword {
    /// The keyword
    pub word: String,
    /// Occurrences in the text
    pub count: usize,
    /// Share of all keyword tokens, in percent
    pub density: f64,
}

/// Distribution of word lengths
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordLengthSummary {
    /// Median length
    pub median: f64,
    /// Most frequent length (first occurring wins ties)
    pub mode: usize,
    /// Population standard deviation
    pub std_dev: f64,
    /// Shortest word
    pub min: usize,
    /// Longest word
    pub max: usize,
}

/// First 8 hex characters of the SHA-256 digest of `text`
pub fn content_hash(text: &str) -> String {
    let digest = Sha256::digest(text.as_bytes());
    hex::encode(&digest[..4])
}

/// Statistics computed for one text
///
/// Deserialized records go through the same checks as [`TextStatisticsBuilder::build`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawTextStatistics")]
pub struct TextStatistics {
    total_words: usize,
    total_chars: usize,
    unique_words: usize,
    avg_word_length: f64,
    most_common: Vec<(String, usize)>,
    sentiment_score: f64,
    emotion: Emotion,
    readability_score: f64,
    complexity_level: ComplexityLevel,
    lexical_diversity: f64,
    sentence_count: usize,
    paragraph_count: usize,
    avg_sentence_length: f64,
    word_lengths: Option<WordLengthSummary>,
    keywords: Vec<Keyword>,
    keyword_density: f64,
    text_hash: String,
}

impl TextStatistics {
    /// Start building a record
    pub fn builder() -> TextStatisticsBuilder {
        TextStatisticsBuilder::default()
    }

    /// Number of words
    pub fn total_words(&self) -> usize {
        self.total_words
    }

    /// Number of characters of the raw input
    pub fn total_chars(&self) -> usize {
        self.total_chars
    }

    /// Number of distinct words
    pub fn unique_words(&self) -> usize {
        self.unique_words
    }

    /// Mean word length in characters
    pub fn avg_word_length(&self) -> f64 {
        self.avg_word_length
    }

    /// Up to ten most frequent words
    pub fn most_common(&self) -> &[(String, usize)] {
        &self.most_common
    }

    /// Sentiment score in [-100, 100]
    pub fn sentiment_score(&self) -> f64 {
        self.sentiment_score
    }

    /// Dominant emotion
    pub fn emotion(&self) -> Emotion {
        self.emotion
    }

    /// Readability score in [0, 100]
    pub fn readability_score(&self) -> f64 {
        self.readability_score
    }

    /// Complexity bucket of the readability score
    pub fn complexity_level(&self) -> ComplexityLevel {
        self.complexity_level
    }

    /// Unique words over total words
    pub fn lexical_diversity(&self) -> f64 {
        self.lexical_diversity
    }

    /// Number of sentences
    pub fn sentence_count(&self) -> usize {
        self.sentence_count
    }

    /// Number of paragraphs
    pub fn paragraph_count(&self) -> usize {
        self.paragraph_count
    }

    /// Mean words per sentence
    pub fn avg_sentence_length(&self) -> f64 {
        self.avg_sentence_length
    }

    /// Word length distribution, `None` for texts without words
    pub fn word_lengths(&self) -> Option<&WordLengthSummary> {
        self.word_lengths.as_ref()
    }

    /// Top keywords
    pub fn keywords(&self) -> &[Keyword] {
        &self.keywords
    }

    /// Keyword tokens over all tokens, in percent
    pub fn keyword_density(&self) -> f64 {
        self.keyword_density
    }

    /// Content digest of the raw input
    pub fn text_hash(&self) -> &str {
        &self.text_hash
    }
}

impl fmt::Display for TextStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let top: Vec<String> = self
            .most_common
            .iter()
            .take(5)
            .map(|(word, count)| format!("{word}({count})"))
            .collect();

        writeln!(f, "Text statistics [{}]", self.text_hash)?;
        writeln!(f, "  words:        {}", self.total_words)?;
        writeln!(f, "  characters:   {}", self.total_chars)?;
        writeln!(f, "  unique words: {}", self.unique_words)?;
        writeln!(f, "  avg length:   {:.2}", self.avg_word_length)?;
        writeln!(f, "  sentences:    {}", self.sentence_count)?;
        writeln!(
            f,
            "  sentiment:    {:.2} ({})",
            self.sentiment_score, self.emotion
        )?;
        writeln!(
            f,
            "  readability:  {:.2} ({})",
            self.readability_score, self.complexity_level
        )?;
        writeln!(f, "  diversity:    {:.3}", self.lexical_diversity)?;
        write!(f, "  most common:  {}", top.join(", "))
    }
}

/// Unchecked wire shape of [`TextStatistics`]
#[derive(Deserialize)]
struct RawTextStatistics {
    total_words: usize,
    total_chars: usize,
    unique_words: usize,
    avg_word_length: f64,
    most_common: Vec<(String, usize)>,
    sentiment_score: f64,
    emotion: Emotion,
    readability_score: f64,
    complexity_level: ComplexityLevel,
    lexical_diversity: f64,
    sentence_count: usize,
    paragraph_count: usize,
    avg_sentence_length: f64,
    word_lengths: Option<WordLengthSummary>,
    keywords: Vec<Keyword>,
    keyword_density: f64,
    text_hash: String,
}

impl TryFrom<RawTextStatistics> for TextStatistics {
    type Error = CoreError;

    fn try_from(raw: RawTextStatistics) -> Result<Self> {
        TextStatistics::builder()
            .words(raw.total_words, raw.unique_words)
            .total_chars(raw.total_chars)
            .avg_word_length(raw.avg_word_length)
            .most_common(raw.most_common)
            .sentiment(raw.sentiment_score, raw.emotion)
            .readability(raw.readability_score, raw.complexity_level)
            .lexical_diversity(raw.lexical_diversity)
            .structure(
                raw.sentence_count,
                raw.paragraph_count,
                raw.avg_sentence_length,
            )
            .word_lengths(raw.word_lengths)
            .keywords(raw.keywords, raw.keyword_density)
            .text_hash(raw.text_hash)
            .build()
    }
}

/// Validating builder for [`TextStatistics`]
#[derive(Debug, Clone, Default)]
pub struct TextStatisticsBuilder {
    total_words: usize,
    total_chars: usize,
    unique_words: usize,
    avg_word_length: f64,
    most_common: Vec<(String, usize)>,
    sentiment_score: f64,
    emotion: Emotion,
    readability_score: f64,
    complexity_level: Option<ComplexityLevel>,
    lexical_diversity: Option<f64>,
    sentence_count: usize,
    paragraph_count: usize,
    avg_sentence_length: f64,
    word_lengths: Option<WordLengthSummary>,
    keywords: Vec<Keyword>,
    keyword_density: f64,
    text_hash: String,
}

impl TextStatisticsBuilder {
    /// Word counts
    pub fn words(mut self, total: usize, unique: usize) -> Self {
        self.total_words = total;
        self.unique_words = unique;
        self
    }

    /// Character count of the raw input
    pub fn total_chars(mut self, chars: usize) -> Self {
        self.total_chars = chars;
        self
    }

    /// Mean word length
    pub fn avg_word_length(mut self, avg: f64) -> Self {
        self.avg_word_length = avg;
        self
    }

    /// Most frequent words
    pub fn most_common(mut self, most_common: Vec<(String, usize)>) -> Self {
        self.most_common = most_common;
        self
    }

    /// Sentiment score and emotion tag
    pub fn sentiment(mut self, score: f64, emotion: Emotion) -> Self {
        self.sentiment_score = score;
        self.emotion = emotion;
        self
    }

    /// Readability score and complexity bucket
    pub fn readability(mut self, score: f64, level: ComplexityLevel) -> Self {
        self.readability_score = score;
        self.complexity_level = Some(level);
        self
    }

    /// Lexical diversity; derived from the word counts when never set
    pub fn lexical_diversity(mut self, diversity: f64) -> Self {
        self.lexical_diversity = Some(diversity);
        self
    }

    /// Sentence and paragraph structure
    pub fn structure(mut self, sentences: usize, paragraphs: usize, avg_length: f64) -> Self {
        self.sentence_count = sentences;
        self.paragraph_count = paragraphs;
        self.avg_sentence_length = avg_length;
        self
    }

    /// Word length distribution
    pub fn word_lengths(mut self, summary: Option<WordLengthSummary>) -> Self {
        self.word_lengths = summary;
        self
    }

    /// Keyword ranking and overall density
    pub fn keywords(mut self, keywords: Vec<Keyword>, density: f64) -> Self {
        self.keywords = keywords;
        self.keyword_density = density;
        self
    }

    /// Content digest
    pub fn text_hash(mut self, hash: impl Into<String>) -> Self {
        self.text_hash = hash.into();
        self
    }

    /// Check invariants and produce the record
    pub fn build(self) -> Result<TextStatistics> {
        if self.unique_words > self.total_words {
            return Err(CoreError::validation(
                "unique_words",
                format!(
                    "{} unique words exceed {} total words",
                    self.unique_words, self.total_words
                ),
            ));
        }

        let lexical_diversity = match self.lexical_diversity {
            Some(value) => value,
            None if self.total_words == 0 => 0.0,
            None => self.unique_words as f64 / self.total_words as f64,
        };
        if !(0.0..=1.0).contains(&lexical_diversity) {
            return Err(CoreError::validation(
                "lexical_diversity",
                format!("must be within [0, 1], got {lexical_diversity}"),
            ));
        }

        if !(-100.0..=100.0).contains(&self.sentiment_score) {
            return Err(CoreError::validation(
                "sentiment_score",
                format!("must be within [-100, 100], got {}", self.sentiment_score),
            ));
        }
        if !(0.0..=100.0).contains(&self.readability_score) {
            return Err(CoreError::validation(
                "readability_score",
                format!("must be within [0, 100], got {}", self.readability_score),
            ));
        }
        if self.most_common.len() > 10 {
            return Err(CoreError::validation(
                "most_common",
                format!("at most 10 entries allowed, got {}", self.most_common.len()),
            ));
        }
        if !self.text_hash.is_empty()
            && (self.text_hash.len() != 8 || !self.text_hash.chars().all(|c| c.is_ascii_hexdigit()))
        {
            return Err(CoreError::validation(
                "text_hash",
                format!("expected 8 hex characters, got '{}'", self.text_hash),
            ));
        }

        let complexity_level = self
            .complexity_level
            .unwrap_or_else(|| ComplexityLevel::from_score(self.readability_score));

        Ok(TextStatistics {
            total_words: self.total_words,
            total_chars: self.total_chars,
            unique_words: self.unique_words,
            avg_word_length: self.avg_word_length,
            most_common: self.most_common,
            sentiment_score: self.sentiment_score,
            emotion: self.emotion,
            readability_score: self.readability_score,
            complexity_level,
            lexical_diversity,
            sentence_count: self.sentence_count,
            paragraph_count: self.paragraph_count,
            avg_sentence_length: self.avg_sentence_length,
            word_lengths: self.word_lengths,
            keywords: self.keywords,
            keyword_density: self.keyword_density,
            text_hash: self.text_hash,
        })
    }
}
