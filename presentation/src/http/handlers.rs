//! Route handlers

use super::error::ApiError;
use super::state::AppState;
use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use ryg_domain::{AnsweredQuestion, Question, Status};
use tracing::debug;

/// `GET /api/status/questions`
pub async fn questions(State(state): State<AppState>) -> Result<Json<Vec<Question>>, ApiError> {
    let questions = state.draw_questions.execute().await?;
    Ok(Json(questions))
}

/// `POST /api/status/submit`
///
/// Responds with the status ordinal. Any body that does not bind to the
/// response shape is a 400. The per-request token is cancelled when the
/// handler future is dropped (client gone) or the server shuts down.
pub async fn submit(
    State(state): State<AppState>,
    payload: Result<Json<Vec<AnsweredQuestion>>, JsonRejection>,
) -> Result<Json<Status>, ApiError> {
    let Json(responses) = payload?;
    let cancel = state.shutdown.child_token();
    let _guard = cancel.clone().drop_guard();

    debug!("Received submission with {} responses", responses.len());
    let classification = state
        .classify_responses
        .execute(&responses, &cancel)
        .await?;

    Ok(Json(classification.status()))
}
