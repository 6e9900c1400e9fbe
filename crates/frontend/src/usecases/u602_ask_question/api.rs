use crate::shared::api_utils::api_url;
use crate::shared::http_reply::{HttpReply, NetworkError};
use contracts::usecases::u602_ask_question::{QueryRequest, QUERY_PATH};
use gloo_net::http::Request;

/// Sends a question to the query endpoint
#[allow(async_fn_in_trait)]
pub trait QueryApi {
    async fn query(&self, request: &QueryRequest) -> Result<HttpReply, NetworkError>;
}

/// Browser fetch client for `POST /api/query`
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpQueryApi;

impl QueryApi for HttpQueryApi {
    async fn query(&self, request: &QueryRequest) -> Result<HttpReply, NetworkError> {
        // `json` also sets Content-Type: application/json
        let response = Request::post(&api_url(QUERY_PATH))
            .json(request)?
            .send()
            .await?;

        let ok = response.ok();
        let status = response.status();
        let body = response.text().await?;

        Ok(HttpReply { ok, status, body })
    }
}
