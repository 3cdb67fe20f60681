//! PostgreSQL-backed store

use async_trait::async_trait;
use sqlx::PgPool;
use trivia_core::{Category, NewQuestion, Paginated, Pagination, Question, QuestionFilter, QuestionId};

use super::{StoreError, TriviaStore};
use crate::db::repos::{CategoryRepo, QuestionRepo};

/// Store backed by a sqlx connection pool.
///
/// Every repository call checks a connection out of the pool for the duration
/// of its query; the connection goes back when the call returns or fails.
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TriviaStore for PgStore {
    async fn categories(&self) -> Result<Vec<Category>, StoreError> {
        CategoryRepo::new(&self.pool).list().await
    }

    async fn questions(&self, filter: &QuestionFilter) -> Result<Vec<Question>, StoreError> {
        QuestionRepo::new(&self.pool).list(filter).await
    }

    async fn question_page(
        &self,
        filter: &QuestionFilter,
        page: Pagination,
    ) -> Result<Paginated<Question>, StoreError> {
        QuestionRepo::new(&self.pool).page(filter, page).await
    }

    async fn question(&self, id: QuestionId) -> Result<Option<Question>, StoreError> {
        QuestionRepo::new(&self.pool).get(id).await
    }

    async fn insert_question(&self, new: &NewQuestion) -> Result<Question, StoreError> {
        QuestionRepo::new(&self.pool).create(new).await
    }

    async fn delete_question(&self, id: QuestionId) -> Result<(), StoreError> {
        QuestionRepo::new(&self.pool).delete(id).await
    }
}
