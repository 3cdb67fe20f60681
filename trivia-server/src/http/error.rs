//! API error types with IntoResponse
//!
//! Every failure leaves the server as the same envelope:
//! `{"success": false, "error": <status>, "message": <fixed text>}`.
//! The detailed reason is logged, never sent.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use trivia_core::{PageError, QuizError, ValidationError};

use crate::store::StoreError;

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Client error outside the other categories (400)
    BadRequest { reason: String },

    /// Resource, page or route not found (404)
    NotFound { resource: &'static str, id: String },

    /// Path matched but the method is not routed (405)
    MethodNotAllowed,

    /// Input missing or invalid (422)
    Unprocessable { reason: String },

    /// Storage fault or bug (500, logged)
    Internal { message: String },
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest { .. } => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::Unprocessable { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Category listing reports storage faults as 400 rather than 500.
    pub fn from_listing_fault(e: StoreError) -> Self {
        tracing::error!("Category listing failed: {}", e);
        Self::BadRequest {
            reason: e.to_string(),
        }
    }
}

/// Fixed human-readable message for a status code
pub fn status_message(status: StatusCode) -> &'static str {
    match status {
        StatusCode::BAD_REQUEST => {
            "The server cannot or will not process the request due to something that is perceived to be a client error"
        }
        StatusCode::NOT_FOUND => "Not found",
        StatusCode::METHOD_NOT_ALLOWED => "Method not allowed",
        StatusCode::UNPROCESSABLE_ENTITY => "Unable to process the contained instructions",
        _ => "The server encountered an unexpected condition that prevented it from fulfilling the request",
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            Self::BadRequest { reason } => tracing::debug!(%reason, "bad request"),
            Self::NotFound { resource, id } => tracing::debug!("{} '{}' not found", resource, id),
            Self::MethodNotAllowed => {}
            Self::Unprocessable { reason } => tracing::debug!(%reason, "unprocessable request"),
            Self::Internal { message } => tracing::error!("Internal error: {}", message),
        }

        let body = Json(json!({
            "success": false,
            "error": status.as_u16(),
            "message": status_message(status),
        }));

        (status, body).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        Self::Unprocessable {
            reason: e.to_string(),
        }
    }
}

impl From<PageError> for ApiError {
    fn from(e: PageError) -> Self {
        Self::NotFound {
            resource: "page",
            id: e.page.to_string(),
        }
    }
}

impl From<QuizError> for ApiError {
    fn from(e: QuizError) -> Self {
        Self::Unprocessable {
            reason: e.to_string(),
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::NotFound { resource, id } => Self::NotFound { resource, id },
            StoreError::InvalidReference { .. } => Self::Unprocessable {
                reason: e.to_string(),
            },
            StoreError::Sqlx(e) => Self::Internal {
                message: format!("database error: {}", e),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use trivia_core::CategoryId;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn not_found_envelope() {
        let err = ApiError::NotFound {
            resource: "question",
            id: "500".into(),
        };
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            body_json(response).await,
            json!({"success": false, "error": 404, "message": "Not found"})
        );
    }

    #[tokio::test]
    async fn validation_error_is_422() {
        let response = ApiError::from(ValidationError::Missing { field: "category" }).into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body = body_json(response).await;
        assert_eq!(body["message"], "Unable to process the contained instructions");
    }

    #[tokio::test]
    async fn quiz_error_is_422() {
        let err = QuizError::NoCandidates {
            category: CategoryId(85),
        };
        assert_eq!(ApiError::from(err).status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn store_errors_map_by_kind() {
        let missing = StoreError::NotFound {
            resource: "question",
            id: "1".into(),
        };
        assert_eq!(ApiError::from(missing).status(), StatusCode::NOT_FOUND);

        let bad_ref = StoreError::InvalidReference {
            resource: "category",
            id: "99".into(),
        };
        assert_eq!(ApiError::from(bad_ref).status(), StatusCode::UNPROCESSABLE_ENTITY);

        let fault = StoreError::Sqlx(sqlx::Error::PoolTimedOut);
        assert_eq!(ApiError::from(fault).status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn listing_fault_is_400() {
        let err = ApiError::from_listing_fault(StoreError::Sqlx(sqlx::Error::PoolClosed));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["error"], 400);
    }

    #[tokio::test]
    async fn internal_error_hides_details() {
        let response = ApiError::Internal {
            message: "connection reset".into(),
        }
        .into_response();
        let body = body_json(response).await;
        assert_eq!(body["error"], 500);
        assert!(!body.to_string().contains("connection reset"));
    }
}
