//! Question endpoints - listing, search, creation and deletion

use std::sync::Arc;

use axum::{
    extract::State,
    routing::{delete, get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use trivia_core::{Category, CategoryMap, NewQuestionInput, Question, QuestionFilter, QuestionId};

use crate::http::error::ApiError;
use crate::http::extractors::{IdPath, JsonBody, PageQuery};
use crate::http::server::AppState;

/// Search request body
#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    #[serde(rename = "searchTerm")]
    pub search_term: String,
}

/// Full listing page, with the category map for the sidebar
#[derive(Serialize)]
pub struct QuestionListResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: i64,
    pub categories: CategoryMap,
}

/// Search results page
#[derive(Serialize)]
pub struct SearchResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: i64,
}

/// Created question, fields inlined next to `success`
#[derive(Serialize)]
pub struct CreatedResponse {
    pub success: bool,
    #[serde(flatten)]
    pub question: Question,
}

#[derive(Serialize)]
pub struct DeletedResponse {
    pub success: bool,
    pub id: QuestionId,
}

/// GET /questions - every question, paginated
async fn list_questions(
    State(state): State<Arc<AppState>>,
    PageQuery(page): PageQuery,
) -> Result<Json<QuestionListResponse>, ApiError> {
    let (result, categories) = tokio::try_join!(
        state.store.question_page(&QuestionFilter::All, page),
        state.store.categories(),
    )?;
    let result = result.non_empty()?;

    Ok(Json(QuestionListResponse {
        success: true,
        questions: result.items,
        total_questions: result.total,
        categories: Category::into_map(categories),
    }))
}

/// POST /questions - case-insensitive substring search, paginated
async fn search_questions(
    State(state): State<Arc<AppState>>,
    PageQuery(page): PageQuery,
    JsonBody(req): JsonBody<SearchRequest>,
) -> Result<Json<SearchResponse>, ApiError> {
    let filter = QuestionFilter::Search(req.search_term);
    let result = state.store.question_page(&filter, page).await?.non_empty()?;

    Ok(Json(SearchResponse {
        success: true,
        questions: result.items,
        total_questions: result.total,
    }))
}

/// POST /add - create a question
async fn create_question(
    State(state): State<Arc<AppState>>,
    JsonBody(input): JsonBody<NewQuestionInput>,
) -> Result<Json<CreatedResponse>, ApiError> {
    let new = input.validate()?;
    let question = state.store.insert_question(&new).await?;
    tracing::info!(id = %question.id, category = %question.category, "Question created");

    Ok(Json(CreatedResponse {
        success: true,
        question,
    }))
}

/// DELETE /questions/{id} - delete a question
async fn delete_question(
    State(state): State<Arc<AppState>>,
    IdPath(id): IdPath,
) -> Result<Json<DeletedResponse>, ApiError> {
    let id = QuestionId(id);
    state.store.delete_question(id).await?;
    tracing::info!(%id, "Question deleted");

    Ok(Json(DeletedResponse { success: true, id }))
}

/// Question routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/questions", get(list_questions).post(search_questions))
        .route("/questions/{id}", delete(delete_question))
        .route("/add", post(create_question))
}
