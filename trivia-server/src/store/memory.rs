//! In-memory store

use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use trivia_core::{Category, NewQuestion, Question, QuestionFilter, QuestionId};

use super::{StoreError, TriviaStore};
use crate::db::seed;

#[derive(Debug, Default)]
struct Inner {
    categories: Vec<Category>,
    questions: Vec<Question>,
    next_id: i32,
}

/// Question bank held in process memory
///
/// Enforces the same category reference check as the PostgreSQL schema.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-loaded with the sample categories and questions.
    pub fn seeded() -> Self {
        Self::with_data(seed::sample_categories(), seed::sample_questions())
    }

    pub fn with_data(categories: Vec<Category>, mut questions: Vec<Question>) -> Self {
        questions.sort_by_key(|q| q.id);
        let next_id = questions.last().map(|q| q.id.0 + 1).unwrap_or(1);
        Self {
            inner: Mutex::new(Inner {
                categories,
                questions,
                next_id,
            }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        // a panic while holding the lock leaves the data itself intact
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[async_trait]
impl TriviaStore for MemoryStore {
    async fn categories(&self) -> Result<Vec<Category>, StoreError> {
        let mut categories = self.lock().categories.clone();
        categories.sort_by_key(|c| c.id);
        Ok(categories)
    }

    async fn questions(&self, filter: &QuestionFilter) -> Result<Vec<Question>, StoreError> {
        Ok(filter.apply(self.lock().questions.iter().cloned()))
    }

    async fn question(&self, id: QuestionId) -> Result<Option<Question>, StoreError> {
        Ok(self.lock().questions.iter().find(|q| q.id == id).cloned())
    }

    async fn insert_question(&self, new: &NewQuestion) -> Result<Question, StoreError> {
        let mut inner = self.lock();
        if !inner.categories.iter().any(|c| c.id == new.category) {
            return Err(StoreError::InvalidReference {
                resource: "category",
                id: new.category.to_string(),
            });
        }

        let question = Question {
            id: QuestionId(inner.next_id),
            question: new.question.clone(),
            answer: new.answer.clone(),
            category: new.category,
            difficulty: new.difficulty,
        };
        inner.next_id += 1;
        inner.questions.push(question.clone());
        Ok(question)
    }

    async fn delete_question(&self, id: QuestionId) -> Result<(), StoreError> {
        let mut inner = self.lock();
        let before = inner.questions.len();
        inner.questions.retain(|q| q.id != id);
        if inner.questions.len() == before {
            return Err(StoreError::NotFound {
                resource: "question",
                id: id.to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use trivia_core::{CategoryId, NewQuestionInput, Pagination};

    fn new_question(category: i32) -> NewQuestion {
        NewQuestionInput {
            question: Some("Who painted the Night Watch?".into()),
            answer: Some("Rembrandt".into()),
            category: Some(category.into()),
            difficulty: Some(3.into()),
        }
        .validate()
        .unwrap()
    }

    #[tokio::test]
    async fn seeded_store_has_sample_data() {
        let store = MemoryStore::seeded();
        assert_eq!(store.categories().await.unwrap().len(), 6);
        assert_eq!(store.questions(&QuestionFilter::All).await.unwrap().len(), 19);
    }

    #[tokio::test]
    async fn insert_assigns_next_id() {
        let store = MemoryStore::seeded();
        let created = store.insert_question(&new_question(2)).await.unwrap();
        assert_eq!(created.id, QuestionId(24));

        let fetched = store.question(created.id).await.unwrap().unwrap();
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn insert_rejects_unknown_category() {
        let store = MemoryStore::seeded();
        let err = store.insert_question(&new_question(42)).await.unwrap_err();
        assert!(matches!(err, StoreError::InvalidReference { resource: "category", .. }));
    }

    #[tokio::test]
    async fn delete_missing_is_not_found() {
        let store = MemoryStore::seeded();
        store.delete_question(QuestionId(10)).await.unwrap();
        assert!(store.question(QuestionId(10)).await.unwrap().is_none());

        let err = store.delete_question(QuestionId(10)).await.unwrap_err();
        assert!(matches!(err, StoreError::NotFound { .. }));
    }

    #[tokio::test]
    async fn default_page_cuts_from_filtered_set() {
        let store = MemoryStore::seeded();
        let page = store
            .question_page(&QuestionFilter::Category(CategoryId(2)), Pagination::default())
            .await
            .unwrap();
        assert_eq!(page.total, 4);
        assert!(page.items.iter().all(|q| q.category == CategoryId(2)));
    }
}
