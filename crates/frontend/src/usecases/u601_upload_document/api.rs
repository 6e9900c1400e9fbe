use crate::shared::api_utils::api_url;
use crate::shared::http_reply::{HttpReply, NetworkError};
use contracts::usecases::u601_upload_document::{FILE_FIELD, UPLOAD_PATH};
use gloo_net::http::Request;
use web_sys::FormData;

/// Sends one selected file to the upload endpoint
#[allow(async_fn_in_trait)]
pub trait UploadApi {
    type File;

    async fn upload(&self, file: Self::File) -> Result<HttpReply, NetworkError>;
}

/// Browser fetch client for `POST /api/upload`
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpUploadApi;

impl UploadApi for HttpUploadApi {
    type File = web_sys::File;

    async fn upload(&self, file: web_sys::File) -> Result<HttpReply, NetworkError> {
        let form_data = FormData::new().map_err(|e| NetworkError(format!("{e:?}")))?;
        form_data
            .append_with_blob(FILE_FIELD, &file)
            .map_err(|e| NetworkError(format!("{e:?}")))?;

        let response = Request::post(&api_url(UPLOAD_PATH))
            .body(form_data)?
            .send()
            .await?;

        let ok = response.ok();
        let status = response.status();
        let body = response.text().await?;

        Ok(HttpReply { ok, status, body })
    }
}
