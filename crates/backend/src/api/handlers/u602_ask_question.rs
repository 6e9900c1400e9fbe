use crate::api::error::ApiError;
use crate::system::app_state::AppState;
use crate::usecases::u602_ask_question::{answer_question, QUESTION_MISSING};
use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use contracts::usecases::u602_ask_question::{QueryRequest, QueryResponse};

/// POST /api/query
pub async fn query(
    State(state): State<AppState>,
    payload: Result<Json<QueryRequest>, JsonRejection>,
) -> Result<Json<QueryResponse>, ApiError> {
    let Json(request) = payload.map_err(|e| {
        tracing::warn!("Invalid query body: {}", e);
        ApiError::BadRequest(QUESTION_MISSING.to_string())
    })?;

    let answer = answer_question(&state.store, &state.models, state.top_k, &request).await?;
    Ok(Json(QueryResponse { answer }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a101_document::DocumentStore;
    use crate::routes;
    use crate::usecases::u602_ask_question::executor::testing::{registry_with, StubProvider};
    use std::sync::Arc;

    fn state(provider: Arc<StubProvider>) -> AppState {
        let store = DocumentStore::new();
        store.replace_document("faq.txt", vec!["El horario es de nueve a cinco.".to_string()]);
        AppState {
            store: Arc::new(store),
            models: Arc::new(registry_with(provider)),
            top_k: 3,
        }
    }

    #[tokio::test]
    async fn test_query_returns_answer() {
        let request = QueryRequest {
            query: "¿Cuál es el horario?".to_string(),
            llm: "gemini".to_string(),
        };
        let Json(response) = query(State(state(StubProvider::answering("De 9 a 5."))), Ok(Json(request)))
            .await
            .unwrap();
        assert_eq!(response.answer, "De 9 a 5.");
    }

    #[tokio::test]
    async fn test_blank_query_is_rejected() {
        let request = QueryRequest {
            query: String::new(),
            llm: String::new(),
        };
        let err = query(State(state(StubProvider::answering("x"))), Ok(Json(request)))
            .await
            .unwrap_err();
        assert_eq!(err.status(), axum::http::StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), QUESTION_MISSING);
    }

    #[tokio::test]
    async fn test_unparseable_body_is_question_missing() {
        let router = routes::testing::router(Arc::new(DocumentStore::new()), 1024);

        let (status, text) = routes::testing::post(
            router,
            "/api/query",
            "application/json",
            b"no es json".to_vec(),
        )
        .await;

        assert_eq!(status, axum::http::StatusCode::BAD_REQUEST);
        assert_eq!(text, r#"{"error":"Pregunta no proporcionada"}"#);
    }

    #[tokio::test]
    async fn test_non_json_content_type_is_question_missing() {
        let router = routes::testing::router(Arc::new(DocumentStore::new()), 1024);

        let (status, text) = routes::testing::post(
            router,
            "/api/query",
            "text/plain",
            br#"{"query":"hola","llm":"gemini"}"#.to_vec(),
        )
        .await;

        assert_eq!(status, axum::http::StatusCode::BAD_REQUEST);
        assert_eq!(text, r#"{"error":"Pregunta no proporcionada"}"#);
    }
}
