use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::editor::{EditError, JsonViewError};
use crate::palette::PaletteError;
use crate::source::FetchError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Unprocessable entity: {0}")]
    UnprocessableEntity(String),

    #[error("Upstream error: {0}")]
    Upstream(#[from] FetchError),

    #[error("Palette error: {0}")]
    Palette(#[from] PaletteError),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<EditError> for AppError {
    fn from(e: EditError) -> Self {
        AppError::Validation(e.to_string())
    }
}

impl From<JsonViewError> for AppError {
    fn from(e: JsonViewError) -> Self {
        AppError::UnprocessableEntity(e.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::UnprocessableEntity(msg) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "UNPROCESSABLE_ENTITY",
                msg.clone(),
            ),
            AppError::Upstream(e) => match e {
                FetchError::NotFound { .. } => (StatusCode::NOT_FOUND, "NOT_FOUND", e.to_string()),
                FetchError::InvalidId(_) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", e.to_string())
                }
                FetchError::Document(_) => (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    "UNPROCESSABLE_ENTITY",
                    e.to_string(),
                ),
                _ => {
                    tracing::error!("Upstream error: {e}");
                    (
                        StatusCode::BAD_GATEWAY,
                        "UPSTREAM_ERROR",
                        "The document source could not be reached".to_string(),
                    )
                }
            },
            AppError::Palette(e) => match e {
                PaletteError::UnknownVariable(_) | PaletteError::InvalidColor(_) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", e.to_string())
                }
                _ => {
                    tracing::error!("Palette error: {e}");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "PALETTE_ERROR",
                        "The palette could not be saved".to_string(),
                    )
                }
            },
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let cases = [
            (AppError::NotFound("x".into()), StatusCode::NOT_FOUND),
            (
                AppError::from(EditError::NotACollection("basics")),
                StatusCode::BAD_REQUEST,
            ),
            (
                AppError::from(JsonViewError::Syntax("eof".into())),
                StatusCode::UNPROCESSABLE_ENTITY,
            ),
            (
                AppError::from(FetchError::Status { status: 500 }),
                StatusCode::BAD_GATEWAY,
            ),
            (
                AppError::from(FetchError::NotFound { id: "abc".into() }),
                StatusCode::NOT_FOUND,
            ),
            (
                AppError::from(PaletteError::InvalidColor("red".into())),
                StatusCode::BAD_REQUEST,
            ),
        ];
        for (err, status) in cases {
            assert_eq!(err.into_response().status(), status);
        }
    }
}
