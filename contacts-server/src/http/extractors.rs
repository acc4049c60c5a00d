//! Custom Axum extractors

use axum::extract::{FromRequest, FromRequestParts, Json, Path, Request};
use axum::http::request::Parts;
use serde::de::DeserializeOwned;

use super::error::ApiError;
use crate::models::ValidationError;

/// Extract a numeric contact id from the path.
///
/// A segment that is not an `i32` names no contact, so it is a 404 rather
/// than a validation error.
pub struct ContactId(pub i32);

impl<S> FromRequestParts<S> for ContactId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let raw = match Path::<String>::from_request_parts(parts, state).await {
            Ok(Path(raw)) => raw,
            Err(_) => String::new(),
        };

        raw.parse::<i32>().map(Self).map_err(|_| ApiError::NotFound {
            resource: "contact",
            id: raw,
        })
    }
}

/// JSON body whose rejections are reported as 400 validation errors
pub struct ValidJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await.map_err(|rejection| {
            ApiError::Validation(ValidationError::Malformed {
                reason: rejection.body_text(),
            })
        })?;

        Ok(Self(value))
    }
}
