use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use db::StoreError;
use thiserror::Error;

use super::ApiResponse;

/// Failure outcome of a handler, rendered as the error envelope.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Invalid input or a violated uniqueness constraint.
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(message) => ApiError::NotFound(message.to_owned()),
            StoreError::Conflict(message) => ApiError::BadRequest(message),
            StoreError::Database(e) => ApiError::Internal(e.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if let ApiError::Internal(detail) = &self {
            tracing::error!(error = %detail, "Request failed with a store error");
        }

        (status, Json(ApiResponse::<()>::error(self.to_string()))).into_response()
    }
}
