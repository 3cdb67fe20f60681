//! Storage access capability
//!
//! Handlers never touch a global connection. They receive a `TriviaStore`
//! through `AppState`:
//! - `PgStore`: PostgreSQL through a sqlx pool
//! - `MemoryStore`: in-process store for tests and local demos

mod memory;
mod postgres;

use async_trait::async_trait;
use trivia_core::{
    paginate, Category, NewQuestion, Paginated, Pagination, Question, QuestionFilter, QuestionId,
};

pub use memory::MemoryStore;
pub use postgres::PgStore;

/// Storage error type
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: String },

    /// Insert referenced a row that does not exist
    #[error("unknown {resource} '{id}'")]
    InvalidReference { resource: &'static str, id: String },
}

/// Question bank operations used by the HTTP layer
#[async_trait]
pub trait TriviaStore: Send + Sync {
    /// Every category, ordered by id.
    async fn categories(&self) -> Result<Vec<Category>, StoreError>;

    /// Every question matching `filter`, ordered by id.
    async fn questions(&self, filter: &QuestionFilter) -> Result<Vec<Question>, StoreError>;

    /// One window of `questions(filter)` plus the unpaginated match count.
    ///
    /// The window may be empty. The default cuts it from the full result set.
    async fn question_page(
        &self,
        filter: &QuestionFilter,
        page: Pagination,
    ) -> Result<Paginated<Question>, StoreError> {
        let questions = self.questions(filter).await?;
        Ok(paginate(&questions, page))
    }

    async fn question(&self, id: QuestionId) -> Result<Option<Question>, StoreError>;

    /// Persist a question and return it with its assigned id.
    async fn insert_question(&self, new: &NewQuestion) -> Result<Question, StoreError>;

    /// Delete by id. A missing row is `StoreError::NotFound`.
    async fn delete_question(&self, id: QuestionId) -> Result<(), StoreError>;
}
