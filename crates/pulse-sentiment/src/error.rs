use thiserror::Error;

#[derive(Debug, Error)]
pub enum SentimentError {
    #[error("No text provided")]
    EmptyText,
}
