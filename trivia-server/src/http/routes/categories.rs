//! Category endpoints

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;
use trivia_core::{Category, CategoryId, CategoryMap, Question, QuestionFilter};

use crate::http::error::ApiError;
use crate::http::extractors::{IdPath, PageQuery};
use crate::http::server::AppState;

/// Category map response
#[derive(Serialize)]
pub struct CategoriesResponse {
    pub success: bool,
    pub categories: CategoryMap,
}

/// One page of a category's questions
#[derive(Serialize)]
pub struct CategoryQuestionsResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: i64,
    pub current_category: CategoryId,
}

/// GET /categories - every category as `{id: type}`
async fn list_categories(
    State(state): State<Arc<AppState>>,
) -> Result<Json<CategoriesResponse>, ApiError> {
    let categories = state
        .store
        .categories()
        .await
        .map_err(ApiError::from_listing_fault)?;

    Ok(Json(CategoriesResponse {
        success: true,
        categories: Category::into_map(categories),
    }))
}

/// GET /categories/{id}/questions - questions in one category, paginated
async fn list_category_questions(
    State(state): State<Arc<AppState>>,
    IdPath(id): IdPath,
    PageQuery(page): PageQuery,
) -> Result<Json<CategoryQuestionsResponse>, ApiError> {
    let category = CategoryId(id);
    let result = state
        .store
        .question_page(&QuestionFilter::Category(category), page)
        .await?
        .non_empty()?;

    Ok(Json(CategoryQuestionsResponse {
        success: true,
        questions: result.items,
        total_questions: result.total,
        current_category: category,
    }))
}

/// Category routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/categories", get(list_categories))
        .route("/categories/{id}/questions", get(list_category_questions))
}
