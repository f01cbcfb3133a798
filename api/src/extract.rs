//! Request extractors that reject with the standard error envelope instead of
//! axum's plain-text rejections.

use axum::{
    Json,
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::request::Parts,
};
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationErrors};

use crate::response::ApiError;

/// A JSON body that has been deserialized and then validated.
///
/// Malformed JSON, a missing `Content-Type` and failed validation rules all
/// reject with `400 Bad Request`.
#[derive(Debug)]
pub struct ValidJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;

        value
            .validate()
            .map_err(|errors| ApiError::BadRequest(validation_message(&errors)))?;

        Ok(ValidJson(value))
    }
}

/// The single numeric id segment of a route such as `/courses/{course_id}`.
#[derive(Debug, Clone, Copy)]
pub struct Id(pub i64);

impl<S> FromRequestParts<S> for Id
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<i64>::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::BadRequest("Invalid ID format".into()))?;
        Ok(Id(id))
    }
}

/// Flattens validation errors into one line, ordered by field name.
pub fn validation_message(errors: &ValidationErrors) -> String {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|a, b| a.0.cmp(&b.0));

    let messages: Vec<String> = fields
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| match &e.message {
                Some(message) => message.to_string(),
                None => format!("{field} is invalid"),
            })
        })
        .collect();

    format!("Validation failed: {}", messages.join(", "))
}
