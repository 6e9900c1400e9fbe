use super::api::QueryApi;
use crate::shared::answer_format::answer_markup;
use crate::shared::status::{
    network_error_text, server_error_text, FlowOutcome, StatusMessage, StatusSink,
};
use contracts::shared::ServerResponse;
use contracts::usecases::u602_ask_question::{QueryRequest, QueryResponse};

pub const EMPTY_QUERY: &str = "Por favor, escribe una pregunta.";
pub const SEARCHING: &str = "Buscando respuesta...";

/// Send the question with the chosen model and render the answer in `result`.
///
/// Blank questions are rejected locally. The query is sent as typed.
pub async fn run_query<A: QueryApi>(
    api: &A,
    query: String,
    llm: String,
    result: &impl StatusSink,
) -> FlowOutcome {
    if query.trim().is_empty() {
        result.show(StatusMessage::error(EMPTY_QUERY));
        return FlowOutcome::Rejected;
    }

    result.show(StatusMessage::plain(SEARCHING));
    log::debug!("u602: asking with llm={}", llm);

    let request = QueryRequest { query, llm };
    let decoded = match api.query(&request).await {
        Ok(reply) => reply.decode::<QueryResponse>(),
        Err(e) => Err(e),
    };

    match decoded {
        Ok(ServerResponse::Success(body)) => {
            result.show(StatusMessage::markup(answer_markup(&body.answer)));
            FlowOutcome::Succeeded
        }
        Ok(ServerResponse::Failure(body)) => {
            log::warn!("u602: query rejected: {}", body.error);
            result.show(StatusMessage::error(server_error_text(&body.error)));
            FlowOutcome::ServerError
        }
        Err(e) => {
            log::warn!("u602: query failed: {}", e);
            result.show(StatusMessage::error(network_error_text(&e.0)));
            FlowOutcome::NetworkError
        }
    }
}
