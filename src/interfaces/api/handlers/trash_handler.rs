use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use tracing::{debug, error, instrument, warn};

use crate::application::dtos::trash_dto::TrashPathRequest;
use crate::common::di::AppState;
use crate::common::errors::ErrorKind;
use crate::interfaces::api::handlers::error_response;

/// Lee `{"trash_path": ...}`; un cuerpo vacío equivale a `{}`
fn parse_trash_path_request(body: &Bytes) -> Result<TrashPathRequest, Response> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(TrashPathRequest::default());
    }

    serde_json::from_slice(body).map_err(|e| {
        warn!("Cuerpo JSON inválido: {}", e);
        (StatusCode::BAD_REQUEST, Json(json!({
            "error": "Invalid JSON body"
        }))).into_response()
    })
}

/// Indica si el anfitrión mueve a la papelera los ficheros borrados
#[instrument(skip(state))]
pub async fn get_trash_status(State(state): State<AppState>) -> impl IntoResponse {
    let status = state.trash_service.get_status().await;
    debug!("Estado de la papelera: enabled={}", status.trash_enabled);
    (StatusCode::OK, Json(status)).into_response()
}

/// Obtiene todos los elementos de la papelera
#[instrument(skip(state))]
pub async fn get_trash_items(State(state): State<AppState>) -> impl IntoResponse {
    match state.trash_service.get_trash_items().await {
        Ok(listing) => {
            debug!("Encontrados {} elementos en la papelera", listing.item_count);
            (StatusCode::OK, Json(listing)).into_response()
        },
        Err(e) => {
            error!("Error al obtener elementos de la papelera: {:?}", e);
            error_response(&e)
        }
    }
}

/// Restaura un elemento de la papelera a su ubicación original
#[instrument(skip(state, body))]
pub async fn restore_from_trash(State(state): State<AppState>, body: Bytes) -> impl IntoResponse {
    let request = match parse_trash_path_request(&body) {
        Ok(request) => request,
        Err(response) => return response,
    };
    debug!("Solicitud para restaurar elemento {:?}", request.trash_path());

    match state.trash_service.restore_item(request.trash_path()).await {
        Ok(result) => {
            debug!("Elemento restaurado en {}", result.restored_to);
            (StatusCode::OK, Json(result)).into_response()
        },
        Err(e) => {
            if e.kind == ErrorKind::InternalError {
                error!("Error al restaurar elemento de papelera: {:?}", e);
            } else {
                debug!("Restauración rechazada: {}", e);
            }
            error_response(&e)
        }
    }
}

/// Elimina permanentemente un elemento de la papelera
#[instrument(skip(state, body))]
pub async fn delete_permanently(State(state): State<AppState>, body: Bytes) -> impl IntoResponse {
    let request = match parse_trash_path_request(&body) {
        Ok(request) => request,
        Err(response) => return response,
    };
    debug!("Solicitud para eliminar permanentemente {:?}", request.trash_path());

    match state.trash_service.delete_permanently(request.trash_path()).await {
        Ok(()) => (StatusCode::OK, Json(json!({
            "success": true
        }))).into_response(),
        Err(e) => {
            if e.kind == ErrorKind::InternalError {
                error!("Error al eliminar permanentemente elemento: {:?}", e);
            } else {
                debug!("Eliminación rechazada: {}", e);
            }
            error_response(&e)
        }
    }
}

/// Vacía la papelera por completo
///
/// Los fallos por elemento se devuelven en `errors` con estado 200.
#[instrument(skip(state))]
pub async fn empty_trash(State(state): State<AppState>) -> impl IntoResponse {
    match state.trash_service.empty_trash().await {
        Ok(result) => {
            if !result.success {
                warn!("Papelera vaciada con {} errores", result.errors.len());
            }
            (StatusCode::OK, Json(result)).into_response()
        },
        Err(e) => {
            error!("Error al vaciar papelera: {:?}", e);
            error_response(&e)
        }
    }
}
