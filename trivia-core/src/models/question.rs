//! Question records and validated input for creating them

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use super::{CategoryId, ValidationError};

/// Question identifier, assigned by the store on insert
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionId(pub i32);

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A stored question, formatted exactly as clients see it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: QuestionId,
    pub question: String,
    pub answer: String,
    pub category: CategoryId,
    pub difficulty: i32,
}

/// Validated input for inserting a question
///
/// Text is stored as given, blank included. Difficulty is any integer the
/// column can hold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewQuestion {
    pub question: String,
    pub answer: String,
    pub category: CategoryId,
    pub difficulty: i32,
}

/// Raw `POST /add` body.
///
/// Fields stay untyped so a missing field and a wrong JSON type both surface
/// as a `ValidationError` instead of a deserializer rejection. Whether the
/// category exists is left to the store.
///
/// Numeric fields accept numbers or numeric strings; HTML form selects post
/// their values as strings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewQuestionInput {
    pub question: Option<JsonValue>,
    pub answer: Option<JsonValue>,
    pub category: Option<JsonValue>,
    pub difficulty: Option<JsonValue>,
}

impl NewQuestionInput {
    pub fn validate(&self) -> Result<NewQuestion, ValidationError> {
        Ok(NewQuestion {
            question: require_str("question", &self.question)?.to_owned(),
            answer: require_str("answer", &self.answer)?.to_owned(),
            category: CategoryId(require_i32("category", &self.category)?),
            difficulty: require_i32("difficulty", &self.difficulty)?,
        })
    }
}

fn require<'a>(
    field: &'static str,
    value: &'a Option<JsonValue>,
) -> Result<&'a JsonValue, ValidationError> {
    match value {
        None | Some(JsonValue::Null) => Err(ValidationError::Missing { field }),
        Some(v) => Ok(v),
    }
}

fn require_str<'a>(
    field: &'static str,
    value: &'a Option<JsonValue>,
) -> Result<&'a str, ValidationError> {
    require(field, value)?
        .as_str()
        .ok_or(ValidationError::InvalidFormat {
            field,
            reason: "expected a string",
        })
}

fn require_i32(field: &'static str, value: &Option<JsonValue>) -> Result<i32, ValidationError> {
    let invalid = ValidationError::InvalidFormat {
        field,
        reason: "expected an integer",
    };
    let value = match require(field, value)? {
        JsonValue::Number(n) => n.as_i64().ok_or(invalid)?,
        JsonValue::String(s) => s.trim().parse::<i64>().map_err(|_| invalid)?,
        _ => return Err(invalid),
    };
    i32::try_from(value).map_err(|_| ValidationError::OutOfRange {
        field,
        min: i32::MIN.into(),
        max: i32::MAX.into(),
        value,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn input(value: JsonValue) -> NewQuestionInput {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn accepts_complete_input() {
        let new = input(json!({
            "question": "What is the best movie ever?",
            "answer": "The God Father",
            "category": 5,
            "difficulty": 4
        }))
        .validate()
        .unwrap();

        assert_eq!(new.question, "What is the best movie ever?");
        assert_eq!(new.answer, "The God Father");
        assert_eq!(new.category, CategoryId(5));
        assert_eq!(new.difficulty, 4);
    }

    #[test]
    fn accepts_numeric_strings() {
        let new = input(json!({
            "question": "Q",
            "answer": "A",
            "category": "3",
            "difficulty": " 2 "
        }))
        .validate()
        .unwrap();

        assert_eq!(new.category, CategoryId(3));
        assert_eq!(new.difficulty, 2);
    }

    #[test]
    fn rejects_missing_category() {
        let err = input(json!({
            "question": "What is the best movie ever?",
            "answer": "The God Father",
            "difficulty": 4
        }))
        .validate()
        .unwrap_err();

        assert_eq!(err, ValidationError::Missing { field: "category" });
    }

    #[test]
    fn null_counts_as_missing() {
        let err = input(json!({"question": null, "answer": "A", "category": 1, "difficulty": 1}))
            .validate()
            .unwrap_err();
        assert_eq!(err, ValidationError::Missing { field: "question" });
    }

    #[test]
    fn keeps_blank_text() {
        let new = input(json!({"question": "Q", "answer": "   ", "category": 1, "difficulty": 1}))
            .validate()
            .unwrap();
        assert_eq!(new.answer, "   ");
    }

    #[test]
    fn rejects_wrong_types() {
        let err = input(json!({"question": 7, "answer": "A", "category": 1, "difficulty": 1}))
            .validate()
            .unwrap_err();
        assert!(matches!(err, ValidationError::InvalidFormat { field: "question", .. }));

        let err = input(json!({"question": "Q", "answer": "A", "category": "art", "difficulty": 1}))
            .validate()
            .unwrap_err();
        assert!(matches!(err, ValidationError::InvalidFormat { field: "category", .. }));

        let err = input(json!({"question": "Q", "answer": "A", "category": 1, "difficulty": 2.5}))
            .validate()
            .unwrap_err();
        assert!(matches!(err, ValidationError::InvalidFormat { field: "difficulty", .. }));
    }

    #[test]
    fn any_i32_difficulty() {
        for difficulty in [-3, 0, 7, i32::MAX] {
            let new = input(json!({"question": "Q", "answer": "A", "category": 1, "difficulty": difficulty}))
                .validate()
                .unwrap();
            assert_eq!(new.difficulty, difficulty);
        }
    }

    #[test]
    fn rejects_values_beyond_i32() {
        let err = input(json!({"question": "Q", "answer": "A", "category": 1, "difficulty": 2_000_000_000_000_i64}))
            .validate()
            .unwrap_err();
        assert!(matches!(err, ValidationError::OutOfRange { field: "difficulty", .. }));
    }

    #[test]
    fn category_existence_is_not_checked_here() {
        let new = input(json!({"question": "Q", "answer": "A", "category": 0, "difficulty": 1}))
            .validate()
            .unwrap();
        assert_eq!(new.category, CategoryId(0));
    }
}
