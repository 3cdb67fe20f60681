//! Question repository
//!
//! - list / page: one query per call, filter pushed into SQL
//! - create: relies on the category foreign key instead of a lookup
//! - delete: zero affected rows means the question never existed

use sqlx::{FromRow, PgPool, Postgres, QueryBuilder, Row};
use trivia_core::{
    CategoryId, NewQuestion, Paginated, Pagination, Question, QuestionFilter, QuestionId,
};

use crate::store::StoreError;

const QUESTION_COLUMNS: &str = "SELECT id, question, answer, category, difficulty";

/// Question record from database
#[derive(Debug, Clone, FromRow)]
struct QuestionRow {
    id: i32,
    question: String,
    answer: String,
    category: i32,
    difficulty: i32,
}

impl From<QuestionRow> for Question {
    fn from(row: QuestionRow) -> Self {
        Self {
            id: QuestionId(row.id),
            question: row.question,
            answer: row.answer,
            category: CategoryId(row.category),
            difficulty: row.difficulty,
        }
    }
}

/// Append the WHERE clause for `filter`.
fn push_filter(builder: &mut QueryBuilder<'_, Postgres>, filter: &QuestionFilter) {
    match filter {
        QuestionFilter::All => {}
        QuestionFilter::Category(id) => {
            builder.push(" WHERE category = ").push_bind(id.0);
        }
        QuestionFilter::Search(term) => {
            builder
                .push(" WHERE question ILIKE ")
                .push_bind(QuestionFilter::like_pattern(term))
                .push(" ESCAPE '\\'");
        }
    }
}

/// Question repository
pub struct QuestionRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> QuestionRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// All questions matching `filter`, ordered by id.
    pub async fn list(&self, filter: &QuestionFilter) -> Result<Vec<Question>, StoreError> {
        let mut builder = QueryBuilder::<Postgres>::new(QUESTION_COLUMNS);
        builder.push(" FROM questions");
        push_filter(&mut builder, filter);
        builder.push(" ORDER BY id");

        let rows: Vec<QuestionRow> = builder.build_query_as().fetch_all(self.pool).await?;
        Ok(rows.into_iter().map(Question::from).collect())
    }

    /// Count questions matching `filter`.
    pub async fn count(&self, filter: &QuestionFilter) -> Result<i64, StoreError> {
        let mut builder = QueryBuilder::<Postgres>::new("SELECT COUNT(*) FROM questions");
        push_filter(&mut builder, filter);

        let (count,): (i64,) = builder.build_query_as().fetch_one(self.pool).await?;
        Ok(count)
    }

    /// One window of matching questions.
    ///
    /// Uses window function for total count in single query. An out-of-range
    /// page returns no rows, so the total falls back to a separate count.
    pub async fn page(
        &self,
        filter: &QuestionFilter,
        page: Pagination,
    ) -> Result<Paginated<Question>, StoreError> {
        let Some(offset) = page.offset() else {
            return Ok(Paginated {
                items: vec![],
                total: self.count(filter).await?,
                page: page.page,
            });
        };

        let mut builder = QueryBuilder::<Postgres>::new(QUESTION_COLUMNS);
        builder.push(", COUNT(*) OVER() AS total FROM questions");
        push_filter(&mut builder, filter);
        builder
            .push(" ORDER BY id LIMIT ")
            .push_bind(i64::from(page.limit()))
            .push(" OFFSET ")
            .push_bind(i64::try_from(offset).unwrap_or(i64::MAX));

        let rows = builder.build().fetch_all(self.pool).await?;

        let window_total = rows
            .first()
            .map(|row| row.try_get::<i64, _>("total"))
            .transpose()?;
        let total = match window_total {
            Some(total) => total,
            None => self.count(filter).await?,
        };
        let items = rows
            .iter()
            .map(|row| QuestionRow::from_row(row).map(Question::from))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Paginated {
            items,
            total,
            page: page.page,
        })
    }

    pub async fn get(&self, id: QuestionId) -> Result<Option<Question>, StoreError> {
        let row: Option<QuestionRow> = sqlx::query_as(
            "SELECT id, question, answer, category, difficulty FROM questions WHERE id = $1",
        )
        .bind(id.0)
        .fetch_optional(self.pool)
        .await?;

        Ok(row.map(Question::from))
    }

    /// Insert a question, returning it with the assigned id.
    pub async fn create(&self, new: &NewQuestion) -> Result<Question, StoreError> {
        let row: QuestionRow = sqlx::query_as(
            r#"
            INSERT INTO questions (question, answer, category, difficulty)
            VALUES ($1, $2, $3, $4)
            RETURNING id, question, answer, category, difficulty
            "#,
        )
        .bind(&new.question)
        .bind(&new.answer)
        .bind(new.category.0)
        .bind(new.difficulty)
        .fetch_one(self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db) if db.is_foreign_key_violation() => {
                StoreError::InvalidReference {
                    resource: "category",
                    id: new.category.to_string(),
                }
            }
            other => StoreError::Sqlx(other),
        })?;

        Ok(Question::from(row))
    }

    pub async fn delete(&self, id: QuestionId) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM questions WHERE id = $1")
            .bind(id.0)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
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
    use trivia_core::NewQuestionInput;

    // Integration tests - run with DATABASE_URL set
    // cargo test -p trivia-server -- --ignored

    async fn seeded_pool() -> PgPool {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = crate::db::create_pool(&url).await.expect("pool creation failed");
        crate::db::migrations::run(&pool).await.expect("migrations failed");
        crate::db::seed::run(&pool).await.expect("seed failed");
        pool
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn search_treats_wildcards_literally() {
        let pool = seeded_pool().await;
        let repo = QuestionRepo::new(&pool);

        let matches = repo
            .list(&QuestionFilter::Search("TITLE".into()))
            .await
            .unwrap();
        assert!(matches.iter().all(|q| q.question.to_lowercase().contains("title")));

        let none = repo.list(&QuestionFilter::Search("%".into())).await.unwrap();
        assert!(none.iter().all(|q| q.question.contains('%')));
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn page_total_matches_count() {
        let pool = seeded_pool().await;
        let repo = QuestionRepo::new(&pool);

        let first = repo.page(&QuestionFilter::All, Pagination::new(1)).await.unwrap();
        let count = repo.count(&QuestionFilter::All).await.unwrap();
        assert_eq!(first.total, count);

        let beyond = repo.page(&QuestionFilter::All, Pagination::new(10_000)).await.unwrap();
        assert!(beyond.items.is_empty());
        assert_eq!(beyond.total, count);
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn create_then_delete() {
        let pool = seeded_pool().await;
        let repo = QuestionRepo::new(&pool);
        let new = NewQuestionInput {
            question: Some("What is the best movie ever?".into()),
            answer: Some("The God Father".into()),
            category: Some(5.into()),
            difficulty: Some(4.into()),
        }
        .validate()
        .unwrap();

        let created = repo.create(&new).await.unwrap();
        assert_eq!(repo.get(created.id).await.unwrap(), Some(created.clone()));

        repo.delete(created.id).await.unwrap();
        assert!(repo.get(created.id).await.unwrap().is_none());
        assert!(matches!(
            repo.delete(created.id).await,
            Err(StoreError::NotFound { .. })
        ));
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn create_with_unknown_category_is_invalid_reference() {
        let pool = seeded_pool().await;
        let new = NewQuestionInput {
            question: Some("Q".into()),
            answer: Some("A".into()),
            category: Some(9_999.into()),
            difficulty: Some(1.into()),
        }
        .validate()
        .unwrap();

        let err = QuestionRepo::new(&pool).create(&new).await.unwrap_err();
        assert!(matches!(err, StoreError::InvalidReference { .. }));
    }
}
