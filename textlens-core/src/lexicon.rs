//! Fixed vocabularies used by the sentiment and keyword strategies
//!
//! Entries are lowercase; lookups are done against lowercased tokens.

/// Words that raise the sentiment score
pub const POSITIVE: &[&str] = &[
    "bueno", "excelente", "genial", "increíble", "feliz", "amor", "perfecto", "good",
    "excellent", "great", "happy", "love", "perfect", "nice", "beautiful",
];

/// Words that lower the sentiment score
pub const NEGATIVE: &[&str] = &[
    "malo", "terrible", "horrible", "triste", "odio", "error", "problema", "bad", "awful",
    "sad", "hate", "problem", "failure", "ugly",
];

/// Words that signal enthusiasm; weighted above plain positives
pub const ENTHUSIASM: &[&str] = &[
    "fantástico", "maravilloso", "asombroso", "espectacular", "brillante", "wow", "amazing",
    "awesome", "fantastic", "wonderful", "brilliant", "spectacular",
];

/// Words that carry no polarity; counted but never scored
pub const NEUTRAL: &[&str] = &[
    "normal", "regular", "aceptable", "común", "ok", "okay", "average", "fine", "usual",
    "ordinary",
];

/// Words skipped by keyword extraction
pub const STOP_WORDS: &[&str] = &[
    // Spanish
    "el", "la", "los", "las", "un", "una", "unos", "unas", "de", "del", "al", "en", "y",
    "o", "que", "es", "son", "por", "para", "con", "sin", "sobre", "como", "pero", "más",
    "muy", "este", "esta", "estos", "estas", "ese", "esa", "eso", "porque", "cuando",
    "donde", "también", "entre", "desde", "hasta", "todo", "todos", "cualquier", "nunca",
    "siempre", "puede", "tiene", "sus", "una", "ser", "está", "están",
    // English
    "the", "a", "an", "and", "or", "but", "if", "of", "to", "in", "on", "at", "by", "for",
    "with", "about", "from", "into", "over", "after", "this", "that", "these", "those",
    "is", "are", "was", "were", "be", "been", "being", "have", "has", "had", "do", "does",
    "did", "will", "would", "should", "could", "there", "their", "they", "them", "then",
    "than", "what", "which", "when", "where", "while", "who", "whom", "very", "also",
    "just", "only", "some", "such", "your", "yours", "because",
];

/// Whether `word` is in `vocabulary`
pub fn contains(vocabulary: &[&str], word: &str) -> bool {
    vocabulary.contains(&word)
}
