//! Successful outcomes of a resource operation.

use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

/// What a resource operation answers with when it succeeds.
#[derive(Debug, Clone, PartialEq)]
pub enum Reply<T> {
    /// 200 with a body.
    Ok(T),
    /// 201 with a `Location` header and a body.
    Created { location: String, body: T },
    /// 200 without a body.
    Empty,
}

impl<T> Reply<T> {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Ok(_) | Self::Empty => StatusCode::OK,
            Self::Created { .. } => StatusCode::CREATED,
        }
    }

    pub fn location(&self) -> Option<&str> {
        match self {
            Self::Created { location, .. } => Some(location),
            _ => None,
        }
    }

    pub fn into_body(self) -> Option<T> {
        match self {
            Self::Ok(body) | Self::Created { body, .. } => Some(body),
            Self::Empty => None,
        }
    }
}

/// Result of every resource operation.
pub type ApiResult<T> = Result<Reply<T>, super::ApiError>;

impl<T: Serialize> IntoResponse for Reply<T> {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(body) => (StatusCode::OK, Json(body)).into_response(),
            Self::Created { location, body } => {
                (StatusCode::CREATED, [(header::LOCATION, location)], Json(body)).into_response()
            }
            Self::Empty => StatusCode::OK.into_response(),
        }
    }
}
