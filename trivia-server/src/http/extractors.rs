//! Custom Axum extractors
//!
//! Wrap the stock extractors so their rejections come back as `ApiError`
//! envelopes instead of axum's plain-text bodies.

use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, FromRequestParts, Path, Query, Request};
use axum::http::request::Parts;
use axum::Json;
use serde::de::DeserializeOwned;
use trivia_core::{Pagination, PaginationParams};

use super::error::ApiError;

/// JSON body; any rejection (missing content type, bad syntax, wrong shape)
/// is unprocessable input.
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection: JsonRejection| ApiError::Unprocessable {
                reason: rejection.body_text(),
            })?;
        Ok(Self(value))
    }
}

/// Integer id from the path. A segment that is not an integer does not name a
/// resource, so it is reported as not found.
pub struct IdPath(pub i32);

impl<S> FromRequestParts<S> for IdPath
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::NotFound {
                resource: "route",
                id: parts.uri.path().to_owned(),
            })?;

        let id = raw.parse::<i32>().map_err(|_| ApiError::NotFound {
            resource: "route",
            id: parts.uri.path().to_owned(),
        })?;

        Ok(Self(id))
    }
}

/// `?page=N`, defaulting to page 1
///
/// Read as raw pairs so a repeated `page` takes its first value instead of
/// failing deserialization.
pub struct PageQuery(pub Pagination);

impl<S> FromRequestParts<S> for PageQuery
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(pairs): Query<Vec<(String, String)>> = Query::from_request_parts(parts, state)
            .await
            .map_err(|rejection| ApiError::BadRequest {
                reason: rejection.body_text(),
            })?;

        Ok(Self(Pagination::from(PaginationParams::from_pairs(pairs))))
    }
}
