//! Word-level sentiment lexicon for retail social media text.

/// Word weights as `(polarity, subjectivity)` pairs.
///
/// Keys are lowercase single words. Polarity is in `[-1.0, 1.0]`,
/// subjectivity in `[0.0, 1.0]`. Entries lean on the vocabulary seen in
/// apparel and retail comment exports.
pub(crate) const LEXICON: &[(&str, f64, f64)] = &[
    // Positive signals
    ("love", 0.6, 0.7),
    ("loved", 0.6, 0.7),
    ("great", 0.8, 0.75),
    ("good", 0.5, 0.6),
    ("excellent", 0.9, 0.8),
    ("amazing", 0.8, 0.85),
    ("beautiful", 0.85, 0.9),
    ("gorgeous", 0.9, 0.9),
    ("perfect", 0.9, 0.85),
    ("best", 0.8, 0.8),
    ("nice", 0.5, 0.65),
    ("stunning", 0.85, 0.9),
    ("comfortable", 0.6, 0.6),
    ("stylish", 0.6, 0.7),
    ("recommend", 0.5, 0.5),
    ("happy", 0.7, 0.75),
    ("pleased", 0.6, 0.7),
    ("quality", 0.4, 0.4),
    ("fast", 0.3, 0.3),
    ("fantastic", 0.85, 0.85),
    ("wonderful", 0.8, 0.8),
    // Negative signals
    ("terrible", -0.8, 0.85),
    ("awful", -0.8, 0.85),
    ("horrible", -0.85, 0.85),
    ("bad", -0.5, 0.6),
    ("worst", -0.9, 0.85),
    ("disappointed", -0.75, 0.8),
    ("disappointing", -0.7, 0.8),
    ("poor", -0.5, 0.6),
    ("cheap", -0.4, 0.5),
    ("broken", -0.6, 0.4),
    ("faulty", -0.6, 0.4),
    ("refund", -0.4, 0.3),
    ("late", -0.3, 0.3),
    ("slow", -0.3, 0.4),
    ("rude", -0.7, 0.8),
    ("useless", -0.7, 0.75),
    ("hate", -0.7, 0.8),
    ("hated", -0.7, 0.8),
    ("uncomfortable", -0.6, 0.6),
    ("overpriced", -0.5, 0.6),
];

/// Words that scale the polarity of the next lexicon word.
pub(crate) const INTENSIFIERS: &[&str] = &[
    "very",
    "really",
    "absolutely",
    "extremely",
    "so",
    "totally",
    "incredibly",
];

/// Words that invert the next lexicon word's polarity.
pub(crate) const NEGATORS: &[&str] = &["not", "never", "no", "hardly", "barely"];

/// Polarity multiplier applied for each preceding intensifier.
pub(crate) const INTENSIFIER_BOOST: f64 = 1.3;

pub(crate) fn lookup(word: &str) -> Option<(f64, f64)> {
    LEXICON
        .iter()
        .find(|(w, _, _)| *w == word)
        .map(|&(_, polarity, subjectivity)| (polarity, subjectivity))
}

pub(crate) fn is_intensifier(word: &str) -> bool {
    INTENSIFIERS.contains(&word)
}

pub(crate) fn is_negator(word: &str) -> bool {
    NEGATORS.contains(&word)
}
