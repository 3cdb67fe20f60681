//! Quiz selection: pick a random question the player has not seen yet
//!
//! There is no server-side session. The client accumulates
//! `previous_questions` and every call re-derives the candidate set, so a quiz
//! is Active while unseen candidates remain and Exhausted afterwards.

use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Deserializer};
use thiserror::Error;

use crate::filter::QuestionFilter;
use crate::models::{CategoryId, Question, QuestionId};

/// Category selector sent by the quiz client; id 0 means every category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct QuizCategory {
    #[serde(deserialize_with = "lenient_category_id")]
    pub id: CategoryId,
}

/// `POST /quizzes` body
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct QuizRequest {
    #[serde(default)]
    pub previous_questions: Vec<QuestionId>,
    #[serde(default)]
    pub quiz_category: Option<QuizCategory>,
}

/// Result of a successful selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizOutcome {
    /// An unseen question, answer included
    Next(Question),
    /// Every candidate has already been played
    Exhausted,
}

impl QuizOutcome {
    pub fn into_question(self) -> Option<Question> {
        match self {
            Self::Next(q) => Some(q),
            Self::Exhausted => None,
        }
    }
}

/// Selection failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum QuizError {
    /// The category filter matched nothing. An unknown category and a category
    /// without questions are indistinguishable here.
    #[error("no questions available for category {category}")]
    NoCandidates { category: CategoryId },
}

impl QuizRequest {
    /// Category restriction for loading candidates.
    pub fn filter(&self) -> QuestionFilter {
        match self.quiz_category {
            Some(QuizCategory { id }) if !id.is_all() => QuestionFilter::Category(id),
            _ => QuestionFilter::All,
        }
    }

    fn category(&self) -> CategoryId {
        self.quiz_category.map(|c| c.id).unwrap_or(CategoryId::ALL)
    }

    /// Pick uniformly among `questions` that pass the category filter and are
    /// not in `previous_questions`.
    ///
    /// `questions` may be the full bank or an already filtered candidate set;
    /// the filter is applied again either way.
    pub fn select<R>(&self, questions: Vec<Question>, rng: &mut R) -> Result<QuizOutcome, QuizError>
    where
        R: Rng + ?Sized,
    {
        let candidates = self.filter().apply(questions);
        if candidates.is_empty() {
            return Err(QuizError::NoCandidates {
                category: self.category(),
            });
        }

        let seen: HashSet<QuestionId> = self.previous_questions.iter().copied().collect();
        let unseen: Vec<Question> = candidates
            .into_iter()
            .filter(|q| !seen.contains(&q.id))
            .collect();

        tracing::debug!(
            category = %self.category(),
            seen = seen.len(),
            remaining = unseen.len(),
            "quiz candidates resolved"
        );

        Ok(match unseen.choose(rng) {
            Some(q) => QuizOutcome::Next(q.clone()),
            None => QuizOutcome::Exhausted,
        })
    }
}

fn lenient_category_id<'de, D>(deserializer: D) -> Result<CategoryId, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Int(i32),
        Str(String),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Int(id) => Ok(CategoryId(id)),
        Raw::Str(s) => s
            .trim()
            .parse::<i32>()
            .map(CategoryId)
            .map_err(|_| serde::de::Error::custom(format!("invalid category id '{}'", s))),
    }
}
