pub mod trash_handler;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::common::errors::{DomainError, ErrorKind};

/// Código HTTP correspondiente a cada tipo de error de dominio
pub fn status_for(kind: ErrorKind) -> StatusCode {
    match kind {
        ErrorKind::InvalidInput => StatusCode::BAD_REQUEST,
        ErrorKind::NotFound => StatusCode::NOT_FOUND,
        ErrorKind::AlreadyExists => StatusCode::CONFLICT,
        ErrorKind::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Respuesta `{"error": mensaje}` con el código adecuado
pub fn error_response(err: &DomainError) -> Response {
    (status_for(err.kind), Json(json!({
        "error": err.message
    }))).into_response()
}
