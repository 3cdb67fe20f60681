//! Sample categories and questions
//!
//! The same data backs `trivia seed` and `MemoryStore::seeded`.

use sqlx::PgPool;
use trivia_core::{Category, CategoryId, Question, QuestionId};

const CATEGORIES: &[(i32, &str)] = &[
    (1, "Science"),
    (2, "Art"),
    (3, "Geography"),
    (4, "History"),
    (5, "Entertainment"),
    (6, "Sports"),
];

// (id, question, answer, difficulty, category)
const QUESTIONS: &[(i32, &str, &str, i32, i32)] = &[
    (5, "Whose autobiography is entitled 'I Know Why the Caged Bird Sings'?", "Maya Angelou", 2, 4),
    (9, "What boxer's original name is Cassius Clay?", "Muhammad Ali", 1, 4),
    (2, "What movie earned Tom Hanks his third straight Oscar nomination, in 1996?", "Apollo 13", 4, 5),
    (4, "What actor did author Anne Rice first denounce, then praise in the role of her beloved Lestat?", "Tom Cruise", 4, 5),
    (6, "What was the title of the 1990 fantasy directed by Tim Burton about a young man with multi-bladed appendages?", "Edward Scissorhands", 3, 5),
    (10, "Which is the only team to play in every soccer World Cup tournament?", "Brazil", 3, 6),
    (11, "Which country won the first ever soccer World Cup in 1930?", "Uruguay", 4, 6),
    (12, "Who invented Peanut Butter?", "George Washington Carver", 2, 4),
    (13, "What is the largest lake in Africa?", "Lake Victoria", 2, 3),
    (14, "In which royal palace would you find the Hall of Mirrors?", "The Palace of Versailles", 3, 3),
    (15, "The Taj Mahal is located in which Indian city?", "Agra", 2, 3),
    (16, "Which Dutch graphic artist–initials M C was a creator of optical illusions?", "Escher", 1, 2),
    (17, "La Giaconda is better known as what?", "Mona Lisa", 3, 2),
    (18, "How many paintings did Van Gogh sell in his lifetime?", "One", 4, 2),
    (19, "Which American artist was a pioneer of Abstract Expressionism, and a leading exponent of action painting?", "Jackson Pollock", 2, 2),
    (20, "What is the heaviest organ in the human body?", "The Liver", 4, 1),
    (21, "Who discovered penicillin?", "Alexander Fleming", 3, 1),
    (22, "Hematology is a branch of medicine involving the study of what?", "Blood", 4, 1),
    (23, "Which dung beetle was worshipped by the ancient Egyptians?", "Scarab", 4, 4),
];

pub fn sample_categories() -> Vec<Category> {
    CATEGORIES
        .iter()
        .map(|&(id, kind)| Category::new(id, kind))
        .collect()
}

pub fn sample_questions() -> Vec<Question> {
    QUESTIONS
        .iter()
        .map(|&(id, question, answer, difficulty, category)| Question {
            id: QuestionId(id),
            question: question.to_owned(),
            answer: answer.to_owned(),
            category: CategoryId(category),
            difficulty,
        })
        .collect()
}

/// Counts of rows actually inserted by [`run`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub categories: u64,
    pub questions: u64,
}

/// Insert the sample data, skipping rows whose id already exists.
///
/// Id sequences are advanced past the seeded ids so later inserts don't
/// collide with them.
pub async fn run(pool: &PgPool) -> Result<SeedReport, sqlx::Error> {
    let mut tx = pool.begin().await?;
    let mut report = SeedReport::default();

    for category in sample_categories() {
        report.categories += sqlx::query(
            "INSERT INTO categories (id, type) VALUES ($1, $2) ON CONFLICT (id) DO NOTHING",
        )
        .bind(category.id.0)
        .bind(&category.kind)
        .execute(&mut *tx)
        .await?
        .rows_affected();
    }

    for question in sample_questions() {
        report.questions += sqlx::query(
            r#"
            INSERT INTO questions (id, question, answer, category, difficulty)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (id) DO NOTHING
            "#,
        )
        .bind(question.id.0)
        .bind(&question.question)
        .bind(&question.answer)
        .bind(question.category.0)
        .bind(question.difficulty)
        .execute(&mut *tx)
        .await?
        .rows_affected();
    }

    for table in ["categories", "questions"] {
        sqlx::query(&format!(
            "SELECT setval(pg_get_serial_sequence('{table}', 'id'), \
             (SELECT COALESCE(MAX(id), 1) FROM {table}))"
        ))
        .execute(&mut *tx)
        .await?;
    }

    tx.commit().await?;
    tracing::info!(
        categories = report.categories,
        questions = report.questions,
        "Sample data seeded"
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn sample_ids_are_unique() {
        let ids: HashSet<_> = sample_questions().iter().map(|q| q.id).collect();
        assert_eq!(ids.len(), QUESTIONS.len());
    }

    #[test]
    fn sample_questions_reference_known_categories() {
        let categories: HashSet<_> = sample_categories().iter().map(|c| c.id).collect();
        assert!(sample_questions()
            .iter()
            .all(|q| categories.contains(&q.category)));
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn seeding_twice_inserts_once() {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = crate::db::create_pool(&url).await.expect("pool creation failed");
        crate::db::migrations::run(&pool).await.expect("migrations failed");

        run(&pool).await.expect("first seed failed");
        let second = run(&pool).await.expect("second seed failed");
        assert_eq!(second, SeedReport::default());
    }
}
