//! Quiz endpoint

use std::sync::Arc;

use axum::{extract::State, routing::post, Json, Router};
use serde::Serialize;
use trivia_core::{Question, QuizRequest};

use crate::http::error::ApiError;
use crate::http::extractors::JsonBody;
use crate::http::server::AppState;

/// Next quiz question; `question` is null once the quiz is exhausted
#[derive(Serialize)]
pub struct QuizResponse {
    pub success: bool,
    pub question: Option<Question>,
}

/// POST /quizzes - random question not in `previous_questions`
async fn next_question(
    State(state): State<Arc<AppState>>,
    JsonBody(req): JsonBody<QuizRequest>,
) -> Result<Json<QuizResponse>, ApiError> {
    let candidates = state.store.questions(&req.filter()).await?;
    let outcome = req.select(candidates, &mut rand::thread_rng())?;

    Ok(Json(QuizResponse {
        success: true,
        question: outcome.into_question(),
    }))
}

/// Quiz routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/quizzes", post(next_question))
}
