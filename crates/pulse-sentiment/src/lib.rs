//! Sentiment scoring for SocialPulse.
//!
//! Scores free-form text with a word-level lexicon, producing a polarity in
//! `[-1.0, 1.0]` and a subjectivity in `[0.0, 1.0]`. The polarity is rescaled
//! to a `[0.0, 1.0]` score and classified as positive, neutral, or negative
//! under one of two configurable threshold policies.

pub mod analyzer;
pub mod classify;
pub mod error;

mod lexicon;

pub use analyzer::{analyze, normalized_score, Analysis};
pub use classify::{Sentiment, ThresholdPolicy};
pub use error::SentimentError;
