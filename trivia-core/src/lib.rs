//! trivia-core: domain types and selection logic for the trivia API
//!
//! Everything here is pure and synchronous. Storage and HTTP live in
//! `trivia-server`; this crate only decides which questions a request sees:
//! - `pagination`: fixed 10-item windows over an ordered result set
//! - `filter`: category and case-insensitive substring matching
//! - `quiz`: random pick of an unseen question

pub mod filter;
pub mod models;
pub mod pagination;
pub mod quiz;

pub use filter::QuestionFilter;
pub use models::{
    Category, CategoryId, CategoryMap, NewQuestion, NewQuestionInput, Question, QuestionId,
    ValidationError,
};
pub use pagination::{
    paginate, PageError, Paginated, Pagination, PaginationParams, QUESTIONS_PER_PAGE,
};
pub use quiz::{QuizCategory, QuizError, QuizOutcome, QuizRequest};
