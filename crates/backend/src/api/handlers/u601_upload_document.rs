use crate::api::error::ApiError;
use crate::domain::a101_document::service;
use crate::system::app_state::AppState;
use axum::{
    extract::{Multipart, State},
    Json,
};
use contracts::usecases::u601_upload_document::{UploadResponse, FILE_FIELD};

/// POST /api/upload
pub async fn upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, ApiError> {
    let mut upload = None;
    while let Some(field) = multipart.next_field().await.map_err(form_error)? {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }
        let filename = field.file_name().unwrap_or_default().to_string();
        let bytes = field.bytes().await.map_err(form_error)?;
        upload = Some((filename, bytes));
        break;
    }

    let Some((filename, bytes)) = upload else {
        return Err(ApiError::BadRequest("No se encontró el archivo".to_string()));
    };
    if filename.is_empty() {
        return Err(ApiError::BadRequest(
            "No se seleccionó ningún archivo".to_string(),
        ));
    }

    service::ingest_document(&state.store, &filename, &bytes).map_err(|e| {
        tracing::warn!("Upload of '{}' rejected: {}", filename, e);
        ApiError::from(e)
    })?;

    Ok(Json(UploadResponse {
        message: format!(
            "Archivo '{}' procesado y añadido a la base de datos.",
            filename
        ),
    }))
}

fn form_error(e: axum::extract::multipart::MultipartError) -> ApiError {
    tracing::warn!("Cannot read multipart body: {}", e);
    ApiError::BadRequest(format!("Error leyendo el formulario: {}", e))
}
