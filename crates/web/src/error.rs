use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use std::fmt;
use storage::error::StorageError;

/// Web layer errors
#[derive(Debug)]
pub enum WebError {
    Storage(StorageError),
    Json(JsonRejection),
    Path(PathRejection),
}

impl fmt::Display for WebError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Storage(e) => write!(f, "Storage error: {}", e),
            Self::Json(e) => write!(f, "Invalid request body: {}", e.body_text()),
            Self::Path(e) => write!(f, "Invalid path parameter: {}", e.body_text()),
        }
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let (status_code, body) = match &self {
            Self::Storage(StorageError::NotFound) => (
                StatusCode::NOT_FOUND,
                json!({
                    "detail": "Workout not found"
                }),
            ),
            Self::Storage(e) => {
                tracing::error!("Storage error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({
                        "detail": "Internal server error"
                    }),
                )
            }
            // Anything wrong with the body itself is 422; a non-JSON content type stays 415.
            Self::Json(rejection) => (
                match rejection {
                    JsonRejection::JsonDataError(_) | JsonRejection::JsonSyntaxError(_) => {
                        StatusCode::UNPROCESSABLE_ENTITY
                    }
                    _ => rejection.status(),
                },
                json!({
                    "detail": [rejection.body_text()]
                }),
            ),
            Self::Path(rejection) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                json!({
                    "detail": [rejection.body_text()]
                }),
            ),
        };

        (status_code, Json(body)).into_response()
    }
}

impl From<StorageError> for WebError {
    fn from(error: StorageError) -> Self {
        Self::Storage(error)
    }
}

impl From<JsonRejection> for WebError {
    fn from(rejection: JsonRejection) -> Self {
        Self::Json(rejection)
    }
}

impl From<PathRejection> for WebError {
    fn from(rejection: PathRejection) -> Self {
        Self::Path(rejection)
    }
}

pub type WebResult<T> = Result<T, WebError>;
