//! Lexicon-based sentiment analyzer.
//!
//! Splits text into lowercase words, looks each up in the lexicon, and
//! averages the matched `(polarity, subjectivity)` weights. Intensifiers
//! boost and negators flip the word that follows them. Text with no lexicon
//! hits scores `(0.0, 0.0)` — objectively neutral.

use crate::error::SentimentError;
use crate::lexicon;

/// Oracle output for one piece of text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Analysis {
    /// Sentiment strength, -1.0 (most negative) to 1.0 (most positive).
    pub polarity: f64,
    /// Opinion-vs-fact measure, 0.0 (objective) to 1.0 (subjective).
    pub subjectivity: f64,
}

impl Analysis {
    /// Polarity rescaled to `[0.0, 1.0]` via `(polarity + 1) / 2`.
    #[must_use]
    pub fn normalized_score(&self) -> f64 {
        normalized_score(self.polarity)
    }
}

/// Rescale a `[-1, 1]` polarity to a `[0, 1]` score.
#[must_use]
pub fn normalized_score(polarity: f64) -> f64 {
    (polarity + 1.0) / 2.0
}

/// Score a text string against the lexicon.
///
/// Deterministic: identical input always yields identical output.
///
/// # Errors
///
/// Returns [`SentimentError::EmptyText`] when `text` is empty or
/// whitespace-only.
pub fn analyze(text: &str) -> Result<Analysis, SentimentError> {
    if text.trim().is_empty() {
        return Err(SentimentError::EmptyText);
    }

    let mut polarities: Vec<f64> = Vec::new();
    let mut subjectivities: Vec<f64> = Vec::new();
    let mut boost = 1.0_f64;
    let mut negated = false;

    for raw in text.split_whitespace() {
        let word = raw
            .trim_matches(|c: char| !c.is_alphabetic())
            .to_lowercase();
        if word.is_empty() {
            continue;
        }

        if lexicon::is_negator(&word) {
            negated = true;
            continue;
        }
        if lexicon::is_intensifier(&word) {
            boost *= lexicon::INTENSIFIER_BOOST;
            continue;
        }

        if let Some((polarity, subjectivity)) = lexicon::lookup(&word) {
            let mut p = polarity * boost;
            if negated {
                // "not good" reads as mildly negative, not the full inverse.
                p = -p * 0.5;
            }
            polarities.push(p.clamp(-1.0, 1.0));
            subjectivities.push(subjectivity);
        }

        // Modifiers only reach the adjacent word.
        boost = 1.0;
        negated = false;
    }

    if polarities.is_empty() {
        return Ok(Analysis {
            polarity: 0.0,
            subjectivity: 0.0,
        });
    }

    let polarity = mean(&polarities).clamp(-1.0, 1.0);
    let subjectivity = mean(&subjectivities).clamp(0.0, 1.0);

    Ok(Analysis {
        polarity,
        subjectivity,
    })
}

#[allow(clippy::cast_precision_loss)]
fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_is_an_error() {
        assert!(matches!(analyze(""), Err(SentimentError::EmptyText)));
    }

    #[test]
    fn whitespace_only_is_an_error() {
        assert!(matches!(analyze("   \t\n"), Err(SentimentError::EmptyText)));
    }

    #[test]
    fn unknown_text_scores_neutral_objective() {
        let a = analyze("the quick brown fox").expect("analysis");
        assert_eq!(a.polarity, 0.0);
        assert_eq!(a.subjectivity, 0.0);
    }

    #[test]
    fn positive_word_scores_positive() {
        let a = analyze("this dress is beautiful").expect("analysis");
        assert!(a.polarity > 0.0, "expected positive polarity, got {a:?}");
        assert!(a.subjectivity > 0.0);
    }

    #[test]
    fn negative_word_scores_negative() {
        let a = analyze("quality is terrible").expect("analysis");
        assert!(a.polarity < 0.0, "expected negative polarity, got {a:?}");
    }

    #[test]
    fn intensifier_boosts_following_word() {
        let plain = analyze("good").expect("analysis");
        let boosted = analyze("very good").expect("analysis");
        assert!(
            boosted.polarity > plain.polarity,
            "expected boost: {plain:?} vs {boosted:?}"
        );
    }

    #[test]
    fn negator_flips_following_word() {
        let a = analyze("not good").expect("analysis");
        assert!(a.polarity < 0.0, "expected negative polarity, got {a:?}");
    }

    #[test]
    fn modifiers_do_not_reach_past_adjacent_word() {
        // "very" attaches to "slow" here, not to "good" two words later.
        let a = analyze("very slow but good").expect("analysis");
        let unboosted_good = analyze("slow but good").expect("analysis");
        assert!(a.polarity < unboosted_good.polarity);
    }

    #[test]
    fn punctuation_stripped_from_words() {
        let a = analyze("beautiful!").expect("analysis");
        assert!(a.polarity > 0.0);
    }

    #[test]
    fn polarity_stays_in_range() {
        let a = analyze("absolutely extremely incredibly gorgeous").expect("analysis");
        assert!(a.polarity <= 1.0 && a.polarity >= -1.0);
    }

    #[test]
    fn analysis_is_deterministic() {
        let text = "I absolutely love this beautiful dress!";
        let first = analyze(text).expect("analysis");
        let second = analyze(text).expect("analysis");
        assert_eq!(first, second);
    }

    #[test]
    fn normalized_score_is_midpoint_shift() {
        assert!((normalized_score(0.0) - 0.5).abs() < f64::EPSILON);
        assert!((normalized_score(1.0) - 1.0).abs() < f64::EPSILON);
        assert!((normalized_score(-1.0) - 0.0).abs() < f64::EPSILON);
        assert!((normalized_score(0.2) - 0.6).abs() < f64::EPSILON);
    }

    #[test]
    fn normalized_score_stays_in_unit_interval() {
        for text in [
            "I absolutely love this beautiful dress!",
            "This product is terrible, very disappointed.",
            "The package arrived on Tuesday.",
            "worst horrible awful hated useless",
        ] {
            let a = analyze(text).expect("analysis");
            let score = a.normalized_score();
            assert!(
                (0.0..=1.0).contains(&score),
                "score {score} out of range for {text:?}"
            );
        }
    }
}
