//! The `POST /analyze` handler.

use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Extension, Json,
};
use serde::{Deserialize, Serialize};

use pulse_sentiment::{Sentiment, SentimentError};

use crate::middleware::RequestId;

use super::{AppState, ErrorBody};

#[derive(Debug, Deserialize)]
struct AnalyzeRequest {
    text: Option<String>,
}

#[derive(Debug, Serialize)]
pub(super) struct AnalyzeResponse {
    pub sentiment: Sentiment,
    pub score: f64,
    pub subjectivity: f64,
    pub polarity: f64,
}

/// Handler failures, kept distinct so validation never reaches the log
/// while oracle failures always do.
#[derive(Debug)]
pub(crate) enum AnalyzeError {
    /// Missing body, unparseable JSON, or a missing/empty `text` field.
    Validation,
    /// The scoring oracle failed; the message is surfaced to the caller.
    Oracle(String),
}

impl IntoResponse for AnalyzeError {
    fn into_response(self) -> Response {
        match self {
            AnalyzeError::Validation => (
                StatusCode::BAD_REQUEST,
                Json(ErrorBody {
                    error: "No text provided".to_string(),
                }),
            )
                .into_response(),
            AnalyzeError::Oracle(message) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorBody { error: message }),
            )
                .into_response(),
        }
    }
}

pub(super) async fn analyze_text(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    body: Bytes,
) -> Result<Json<AnalyzeResponse>, AnalyzeError> {
    let request: AnalyzeRequest =
        serde_json::from_slice(&body).map_err(|_| AnalyzeError::Validation)?;
    let text = request.text.ok_or(AnalyzeError::Validation)?;

    // A handler failure must never take the process down, so the oracle
    // call is fenced the same way the original service fenced its scorer.
    let analysis = std::panic::catch_unwind(|| pulse_sentiment::analyze(&text))
        .map_err(|panic| {
            let message = panic_message(panic.as_ref());
            tracing::error!(request_id = %req_id.0, error = %message, "oracle panicked");
            AnalyzeError::Oracle(message)
        })?
        .map_err(|e| match e {
            SentimentError::EmptyText => AnalyzeError::Validation,
        })?;

    Ok(Json(AnalyzeResponse {
        sentiment: state.policy.classify(&analysis),
        score: analysis.normalized_score(),
        subjectivity: analysis.subjectivity,
        polarity: analysis.polarity,
    }))
}

fn panic_message(panic: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = panic.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else {
        "sentiment analysis failed".to_string()
    }
}
