//! API errors with HTTP status mapping

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use ryg_application::{ClassifyResponsesError, StorageError};
use ryg_domain::ValidationError;
use serde_json::json;
use tracing::{debug, error};

/// Errors a handler can return.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Submission rejected before classification
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Body is not a JSON array of `{id, text, answer}` objects
    #[error(transparent)]
    MalformedBody(#[from] JsonRejection),

    /// Question bank could not be produced
    #[error("Question bank unavailable: {0}")]
    Storage(#[from] StorageError),
}

impl From<ClassifyResponsesError> for ApiError {
    fn from(e: ClassifyResponsesError) -> Self {
        match e {
            ClassifyResponsesError::Validation(v) => ApiError::Validation(v),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            // The browser client displays this text verbatim
            ApiError::Validation(e) => (StatusCode::BAD_REQUEST, e.to_string()).into_response(),
            ApiError::MalformedBody(e) => {
                debug!("Rejected malformed submission: {}", e.body_text());
                (StatusCode::BAD_REQUEST, e.body_text()).into_response()
            }
            ApiError::Storage(e) => {
                error!("Question bank unavailable: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Question bank unavailable" })),
                )
                    .into_response()
            }
        }
    }
}
