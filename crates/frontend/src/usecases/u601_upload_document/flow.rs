use super::api::UploadApi;
use crate::shared::status::{
    network_error_text, server_error_text, FlowOutcome, StatusMessage, StatusSink,
};
use contracts::shared::ServerResponse;
use contracts::usecases::u601_upload_document::UploadResponse;

pub const NO_FILE_SELECTED: &str = "Por favor, selecciona un archivo primero.";
pub const UPLOADING: &str = "Subiendo y procesando archivo...";

/// Upload the selected file and report progress and result in `status`.
///
/// Without a file nothing is sent. The selection itself is left untouched.
pub async fn run_upload<A: UploadApi>(
    api: &A,
    file: Option<A::File>,
    status: &impl StatusSink,
) -> FlowOutcome {
    let Some(file) = file else {
        status.show(StatusMessage::error(NO_FILE_SELECTED));
        return FlowOutcome::Rejected;
    };

    status.show(StatusMessage::progress(UPLOADING));
    log::debug!("u601: sending document");

    let decoded = match api.upload(file).await {
        Ok(reply) => reply.decode::<UploadResponse>(),
        Err(e) => Err(e),
    };

    match decoded {
        Ok(ServerResponse::Success(body)) => {
            status.show(StatusMessage::success(body.message));
            FlowOutcome::Succeeded
        }
        Ok(ServerResponse::Failure(body)) => {
            log::warn!("u601: upload rejected: {}", body.error);
            status.show(StatusMessage::error(server_error_text(&body.error)));
            FlowOutcome::ServerError
        }
        Err(e) => {
            log::warn!("u601: upload failed: {}", e);
            status.show(StatusMessage::error(network_error_text(&e.0)));
            FlowOutcome::NetworkError
        }
    }
}
