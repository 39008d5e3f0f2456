//! Threshold policies for turning an [`Analysis`] into a sentiment label.
//!
//! Two incompatible rules exist in the wild for this endpoint: one compares
//! the normalized `[0, 1]` score against 0.6/0.4, the other compares raw
//! polarity against ±0.1. Both are strict comparisons, so an exact-boundary
//! value resolves to neutral. The choice is explicit configuration, never a
//! silent merge.

use std::str::FromStr;

use serde::Serialize;

use crate::analyzer::Analysis;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

impl Sentiment {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Neutral => "neutral",
            Sentiment::Negative => "negative",
        }
    }
}

impl std::fmt::Display for Sentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThresholdPolicy {
    /// `score > 0.6` positive, `score < 0.4` negative, else neutral.
    NormalizedScore,
    /// `polarity > 0.1` positive, `polarity < -0.1` negative, else neutral.
    #[default]
    RawPolarity,
}

impl ThresholdPolicy {
    #[must_use]
    pub fn classify(&self, analysis: &Analysis) -> Sentiment {
        match self {
            ThresholdPolicy::NormalizedScore => {
                let score = analysis.normalized_score();
                if score > 0.6 {
                    Sentiment::Positive
                } else if score < 0.4 {
                    Sentiment::Negative
                } else {
                    Sentiment::Neutral
                }
            }
            ThresholdPolicy::RawPolarity => {
                if analysis.polarity > 0.1 {
                    Sentiment::Positive
                } else if analysis.polarity < -0.1 {
                    Sentiment::Negative
                } else {
                    Sentiment::Neutral
                }
            }
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            ThresholdPolicy::NormalizedScore => "normalized",
            ThresholdPolicy::RawPolarity => "polarity",
        }
    }
}

impl FromStr for ThresholdPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "normalized" => Ok(ThresholdPolicy::NormalizedScore),
            "polarity" => Ok(ThresholdPolicy::RawPolarity),
            other => Err(format!(
                "unknown sentiment policy '{other}' (expected 'normalized' or 'polarity')"
            )),
        }
    }
}
