//! Custom Axum extractors that reject with [`AppError`] instead of Axum's
//! plain-text rejections, so malformed ids, query strings and bodies get the
//! same JSON error envelope (and a 400 status) as every other failure.

use axum::extract::{FromRequest, FromRequestParts, Path, Query, Request};
use axum::http::request::Parts;
use axum::Json;
use rolodex_core::types::DbId;
use serde::de::DeserializeOwned;

use crate::error::AppError;

/// Numeric `{id}` path segment.
pub struct IdPath(pub DbId);

impl<S> FromRequestParts<S> for IdPath
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|_| AppError::BadRequest("Missing id in path".into()))?;

        let id = raw
            .trim()
            .parse::<DbId>()
            .map_err(|_| AppError::BadRequest(format!("Invalid id '{raw}'")))?;

        Ok(Self(id))
    }
}

/// URL query string. Any decoding failure is a 400 Bad Request.
pub struct QueryParams<T>(pub T);

impl<T, S> FromRequestParts<S> for QueryParams<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| {
                AppError::BadRequest(format!("Invalid query string: {}", rejection.body_text()))
            })?;

        Ok(Self(value))
    }
}

/// JSON request body. Any decoding failure is a 400 Bad Request.
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| {
                AppError::BadRequest(format!("Invalid request body: {}", rejection.body_text()))
            })?;

        Ok(Self(value))
    }
}
