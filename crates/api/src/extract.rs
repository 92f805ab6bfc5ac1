//! Request extractors that reject with [`AppError`] instead of Axum's
//! default plain-text rejections, so decoding failures share the JSON error
//! format and status mapping of every other failure.

use axum::body::Bytes;
use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use axum::Json;
use serde::de::DeserializeOwned;
use usuarios_core::types::{parse_id, DbId};

use crate::error::AppError;

/// A user identifier taken from the `{id}` path segment.
///
/// The segment must be an unsigned 32-bit integer; anything else is a 400.
#[derive(Debug, Clone, Copy)]
pub struct UserId(pub DbId);

impl<S> FromRequestParts<S> for UserId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

        Ok(UserId(parse_id("User", &raw)?))
    }
}

/// JSON request body.
///
/// The body is decoded as JSON whatever its `Content-Type`. Unreadable
/// bodies, malformed JSON and mismatched field types become 400s.
#[derive(Debug, Clone)]
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

        let Json(value) = Json::<T>::from_bytes(&bytes)
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

        Ok(JsonBody(value))
    }
}
