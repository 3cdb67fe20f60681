//! Domain models with validation at construction
//!
//! User input becomes a `NewQuestion` only through `NewQuestionInput::validate`.
//! Invalid input returns ValidationError, not panic.

pub mod category;
pub mod question;
pub mod validation;

pub use category::{Category, CategoryId, CategoryMap};
pub use question::{NewQuestion, NewQuestionInput, Question, QuestionId};
pub use validation::ValidationError;
