//! Lazy word, n-gram and window generators
//!
//! A word is a maximal run of Unicode word characters, lowercased.
//! Single-character numeric runs ("7") are not words.

use crate::counting::FrequencyTable;
use crate::error::{CoreError, Result};
use regex::{Regex, RegexBuilder};
use smallvec::SmallVec;
use std::collections::VecDeque;
use std::sync::OnceLock;

/// An n-gram of lowercased words
pub type Ngram = SmallVec<[String; 4]>;

fn word_regex() -> &'static Regex {
    static WORD: OnceLock<Regex> = OnceLock::new();
    WORD.get_or_init(|| Regex::new(r"\w+").expect("word pattern is valid"))
}

/// Iterator over the words of a text
#[derive(Debug, Clone)]
pub struct Words<'a> {
    text: &'a str,
    pos: usize,
}

impl Iterator for Words<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        while self.pos <= self.text.len() {
            let found = word_regex().find_at(self.text, self.pos)?;
            self.pos = found.end();
            let token = found.as_str();

            let mut chars = token.chars();
            if let (Some(only), None) = (chars.next(), chars.next()) {
                if only.is_numeric() {
                    continue;
                }
            }
            return Some(token.to_lowercase());
        }
        None
    }
}

/// Lazily extract the words of `text`
///
/// Restartable: calling again (or cloning the iterator) starts over.
pub fn words(text: &str) -> Words<'_> {
    Words { text, pos: 0 }
}

/// Overlapping fixed-size windows over any iterator
///
/// Emits nothing until `size` items have been buffered; afterwards every
/// new item produces one window.
#[derive(Debug, Clone)]
pub struct SlidingWindow<I: Iterator> {
    inner: I,
    size: usize,
    buffer: VecDeque<I::Item>,
}

impl<I> Iterator for SlidingWindow<I>
where
    I: Iterator,
    I::Item: Clone,
{
    type Item = Vec<I::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.size == 0 {
            return None;
        }
        loop {
            let item = self.inner.next()?;
            if self.buffer.len() == self.size {
                self.buffer.pop_front();
            }
            self.buffer.push_back(item);
            if self.buffer.len() == self.size {
                return Some(self.buffer.iter().cloned().collect());
            }
        }
    }
}

/// Slide a window of `size` over `sequence`
pub fn sliding_window<I>(sequence: I, size: usize) -> SlidingWindow<I::IntoIter>
where
    I: IntoIterator,
{
    SlidingWindow {
        inner: sequence.into_iter(),
        size,
        buffer: VecDeque::with_capacity(size),
    }
}

/// Iterator over the n-grams of a text
#[derive(Debug, Clone)]
pub struct Ngrams<'a> {
    windows: SlidingWindow<Words<'a>>,
}

impl Iterator for Ngrams<'_> {
    type Item = Ngram;

    fn next(&mut self) -> Option<Ngram> {
        self.windows.next().map(SmallVec::from_vec)
    }
}

/// Lazily extract the `n`-grams of `text`
///
/// Yields `max(0, words - n + 1)` items; `n == 0` yields nothing.
pub fn ngrams(text: &str, n: usize) -> Ngrams<'_> {
    Ngrams {
        windows: sliding_window(words(text), n),
    }
}

/// Count the `n`-grams of `text`, most frequent first
pub fn ngram_frequencies(text: &str, n: usize) -> Vec<(Ngram, usize)> {
    let table: FrequencyTable<Ngram> = ngrams(text, n).collect();
    table.most_common(table.unique())
}

/// Every case-insensitive match of `pattern` in `text`
pub fn find_patterns(text: &str, pattern: &str) -> Result<Vec<String>> {
    let regex = RegexBuilder::new(pattern)
        .case_insensitive(true)
        .build()
        .map_err(|e| CoreError::InvalidPattern {
            pattern: pattern.to_string(),
            reason: e.to_string(),
        })?;

    Ok(regex
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect())
}
