//! Failure taxonomy of the resource API and its HTTP mapping.

use crate::repository::RepositoryError;
use crate::shapes::ValidationError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

/// Everything a resource operation can fail with.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    /// The resource, or a dependent it was addressed through, does not exist.
    #[error("{0}")]
    NotFound(String),

    /// Malformed or incomplete input, a missing association, or a duplicate key.
    #[error("{0}")]
    Validation(String),

    /// The commit went through but changed nothing.
    #[error("{0}")]
    CommitFailed(String),

    /// The store failed underneath the request.
    #[error("Database Failure: {0}")]
    Store(String),
}

impl ApiError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn commit_failed(message: impl Into<String>) -> Self {
        Self::CommitFailed(message.into())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Validation(_) | Self::CommitFailed(_) => StatusCode::BAD_REQUEST,
            Self::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<RepositoryError> for ApiError {
    fn from(e: RepositoryError) -> Self {
        Self::Store(e.to_string())
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e.0)
    }
}

/// JSON body of every error response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorBody {
    pub status: u16,
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorBody {
            status: status.as_u16(),
            message: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use entity_store::StoreError;

    #[test]
    fn test_status_mapping() {
        assert_eq!(ApiError::not_found("x").status(), StatusCode::NOT_FOUND);
        assert_eq!(ApiError::validation("x").status(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::commit_failed("x").status(), StatusCode::BAD_REQUEST);

        let store: ApiError = RepositoryError::Store(StoreError::StoreClosed).into();
        assert_eq!(store.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(store.to_string(), "Database Failure: Store closed");
    }
}
