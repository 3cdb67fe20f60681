//! Question filters shared by listings, search and quiz candidates

use crate::models::{CategoryId, Question};

/// Which questions a request draws from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestionFilter {
    /// Every question
    All,
    /// Questions whose category equals the id
    Category(CategoryId),
    /// Questions whose text contains the term, ignoring case
    Search(String),
}

impl QuestionFilter {
    pub fn matches(&self, question: &Question) -> bool {
        match self {
            Self::All => true,
            Self::Category(id) => question.category == *id,
            Self::Search(term) => contains_ignore_case(&question.question, term),
        }
    }

    /// Keep matching questions, preserving order.
    pub fn apply(&self, questions: impl IntoIterator<Item = Question>) -> Vec<Question> {
        questions.into_iter().filter(|q| self.matches(q)).collect()
    }

    /// Search term as a SQL `ILIKE` pattern with `\` as escape character.
    ///
    /// `%` and `_` in the term match literally.
    pub fn like_pattern(term: &str) -> String {
        let mut pattern = String::with_capacity(term.len() + 2);
        pattern.push('%');
        for c in term.chars() {
            if matches!(c, '%' | '_' | '\\') {
                pattern.push('\\');
            }
            pattern.push(c);
        }
        pattern.push('%');
        pattern
    }
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}
