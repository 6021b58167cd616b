//! Text preprocessing pipeline
//!
//! A pipeline is an ordered list of [`TextTransform`] stages; each stage
//! receives the output of the previous one.

use std::fmt;

/// One preprocessing stage
pub trait TextTransform: Send + Sync {
    /// Transform the text
    fn apply(&self, text: &str) -> String;

    /// Stage name for logging
    fn name(&self) -> &'static str;
}

/// Collapse whitespace runs to one space and trim both ends
#[derive(Debug, Clone, Copy, Default)]
pub struct CollapseWhitespace;

impl TextTransform for CollapseWhitespace {
    fn apply(&self, text: &str) -> String {
        text.split_whitespace().collect::<Vec<_>>().join(" ")
    }

    fn name(&self) -> &'static str {
        "collapse_whitespace"
    }
}

/// Drop every character that is not a word character, whitespace or `.!?,;-`
#[derive(Debug, Clone, Copy, Default)]
pub struct StripSpecial;

impl StripSpecial {
    fn keep(ch: char) -> bool {
        ch.is_alphanumeric()
            || ch == '_'
            || ch.is_whitespace()
            || matches!(ch, '.' | '!' | '?' | ',' | ';' | '-')
    }
}

impl TextTransform for StripSpecial {
    fn apply(&self, text: &str) -> String {
        text.chars().filter(|&ch| Self::keep(ch)).collect()
    }

    fn name(&self) -> &'static str {
        "strip_special"
    }
}

/// Unicode lowercasing
#[derive(Debug, Clone, Copy, Default)]
pub struct Lowercase;

impl TextTransform for Lowercase {
    fn apply(&self, text: &str) -> String {
        text.to_lowercase()
    }

    fn name(&self) -> &'static str {
        "lowercase"
    }
}

/// Ordered chain of preprocessing stages
#[derive(Default)]
pub struct Pipeline {
    stages: Vec<Box<dyn TextTransform>>,
}

impl Pipeline {
    /// Create an empty pipeline (identity)
    pub fn new() -> Self {
        Self { stages: Vec::new() }
    }

    /// Append a stage
    pub fn with<T: TextTransform + 'static>(mut self, stage: T) -> Self {
        self.stages.push(Box::new(stage));
        self
    }

    /// Build the standard chain: whitespace collapsing always runs first,
    /// special-character stripping and lowercasing are optional.
    pub fn standard(lowercase: bool, remove_special: bool) -> Self {
        let mut pipeline = Self::new().with(CollapseWhitespace);
        if remove_special {
            pipeline = pipeline.with(StripSpecial);
        }
        if lowercase {
            pipeline = pipeline.with(Lowercase);
        }
        pipeline
    }

    /// Run every stage in order
    pub fn run(&self, text: &str) -> String {
        self.stages
            .iter()
            .fold(text.to_string(), |acc, stage| stage.apply(&acc))
    }

    /// Stage names in execution order
    pub fn stage_names(&self) -> Vec<&'static str> {
        self.stages.iter().map(|stage| stage.name()).collect()
    }

    /// Number of stages
    pub fn len(&self) -> usize {
        self.stages.len()
    }

    /// Whether the pipeline has no stages
    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }
}

impl fmt::Debug for Pipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pipeline")
            .field("stages", &self.stage_names())
            .finish()
    }
}

/// Normalize `text` with the standard pipeline
pub fn preprocess(text: &str, lowercase: bool, remove_special: bool) -> String {
    Pipeline::standard(lowercase, remove_special).run(text)
}
