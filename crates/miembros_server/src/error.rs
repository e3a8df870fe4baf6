//! HTTP error mapping.
//!
//! Each endpoint reports a missing member in its own shape:
//!
//! | Endpoint | Status | Body |
//! |----------|--------|------|
//! | `GET /miembros/{id}` | 404 | JSON `{timestamp, status, error, message, path}` |
//! | `PUT /miembros/actualizar/{id}` | 404 | JSON `{"error": message}` |
//! | `DELETE /miembros/eliminar/{id}` | 404 | plain text |
//!
//! Validation failures are 400 plain text. Storage faults are 500 with a
//! generic message; the detail only goes to the log.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::NaiveDateTime;
use log::error;
use miembros_core::{MemberId, MemberServiceError, MemberValidationError};
use serde::Serialize;

use crate::api::BASE_PATH;

pub const VALIDATION_MESSAGE: &str = "Debes proporcionar al menos un campo válido para actualizar.";
pub const DELETE_NOT_FOUND_MESSAGE: &str = "Miembro no encontrado.";
pub const INTERNAL_MESSAGE: &str = "Error interno del servidor.";

pub type ApiResult<T> = Result<T, ApiError>;

/// Body of the structured 404 returned by the lookup endpoint.
#[derive(Debug, Serialize)]
pub struct NotFoundDetail {
    pub timestamp: NaiveDateTime,
    pub status: u16,
    pub error: &'static str,
    pub message: String,
    pub path: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Lookup miss, answered with [`NotFoundDetail`].
    #[error("member {0} not found")]
    LookupNotFound(MemberId),

    /// Update target miss, answered with `{"error": ...}`.
    #[error("member {0} not found")]
    UpdateNotFound(MemberId),

    /// Delete target miss, answered with plain text.
    #[error("member {0} not found")]
    DeleteNotFound(MemberId),

    #[error("validation failed: {0}")]
    Validation(#[from] MemberValidationError),

    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// Maps a service failure, choosing the endpoint's not-found shape.
    pub fn from_service<F>(err: MemberServiceError, not_found: F) -> Self
    where
        F: FnOnce(MemberId) -> Self,
    {
        match err {
            MemberServiceError::Validation(err) => Self::Validation(err),
            MemberServiceError::MemberNotFound(id) => not_found(id),
            MemberServiceError::Repo(err) => Self::Internal(err.to_string()),
        }
    }
}

/// Human-readable message used by both JSON not-found bodies.
pub fn member_missing_message(id: MemberId) -> String {
    format!("El miembro con ID {id} no existe")
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::LookupNotFound(id) => {
                let body = NotFoundDetail {
                    timestamp: chrono::Local::now().naive_local(),
                    status: StatusCode::NOT_FOUND.as_u16(),
                    error: "Not Found",
                    message: member_missing_message(id),
                    path: format!("{BASE_PATH}/{id}"),
                };
                (StatusCode::NOT_FOUND, Json(body)).into_response()
            }
            Self::UpdateNotFound(id) => (
                StatusCode::NOT_FOUND,
                Json(serde_json::json!({ "error": member_missing_message(id) })),
            )
                .into_response(),
            Self::DeleteNotFound(_) => {
                (StatusCode::NOT_FOUND, DELETE_NOT_FOUND_MESSAGE).into_response()
            }
            Self::Validation(_) => (StatusCode::BAD_REQUEST, VALIDATION_MESSAGE).into_response(),
            Self::Internal(message) => {
                error!(
                    "event=http_error module=http status=error error_code=internal error={}",
                    message
                );
                (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_MESSAGE).into_response()
            }
        }
    }
}
