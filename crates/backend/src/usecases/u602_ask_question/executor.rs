use super::prompt::{build_prompt, system_instruction};
use crate::api::error::ApiError;
use crate::domain::a101_document::DocumentStore;
use crate::shared::llm::{ChatMessage, ModelRegistry};
use contracts::usecases::u602_ask_question::QueryRequest;

pub const NO_RELEVANT_INFO: &str =
    "No encontré información relevante en los documentos para responder a tu pregunta.";

pub const QUESTION_MISSING: &str = "Pregunta no proporcionada";

/// Retrieve the most relevant chunks and let the selected model answer from them.
///
/// The model is not called when nothing relevant is stored.
pub async fn answer_question(
    store: &DocumentStore,
    models: &ModelRegistry,
    top_k: usize,
    request: &QueryRequest,
) -> Result<String, ApiError> {
    if request.query.trim().is_empty() {
        return Err(ApiError::BadRequest(QUESTION_MISSING.to_string()));
    }

    let provider = models
        .resolve(&request.llm)
        .ok_or_else(|| ApiError::BadRequest(format!("Modelo no soportado: {}", request.llm)))?;

    tracing::debug!("Question: '{}' (model {})", request.query, provider.model_name());

    if store.is_empty() {
        tracing::debug!("No documents uploaded yet");
        return Ok(NO_RELEVANT_INFO.to_string());
    }

    let hits = store.search(&request.query, top_k);
    if hits.is_empty() {
        tracing::debug!("No relevant chunks for the question");
        return Ok(NO_RELEVANT_INFO.to_string());
    }

    let context = hits
        .iter()
        .map(|c| c.text.as_str())
        .collect::<Vec<_>>()
        .join("\n\n");
    tracing::debug!(
        "Context from {:?}",
        hits.iter().map(|c| c.id.as_str()).collect::<Vec<_>>()
    );

    let messages = vec![
        ChatMessage::system(system_instruction()),
        ChatMessage::user(build_prompt(&context, &request.query)),
    ];
    let response = provider
        .chat_completion(messages)
        .await
        .map_err(|e| {
            tracing::error!("{} call failed: {}", provider.provider_name(), e);
            ApiError::Internal(format!("Error al generar la respuesta: {}", e))
        })?;

    tracing::info!(
        "Answered with {} ({} tokens)",
        response.model,
        response
            .tokens_used
            .map(|t| t.to_string())
            .unwrap_or_else(|| "?".to_string())
    );
    Ok(response.content)
}

#[cfg(test)]
pub(crate) mod testing {
    use crate::shared::llm::{ChatMessage, LlmError, LlmProvider, LlmResponse, ModelRegistry};
    use async_trait::async_trait;
    use std::sync::{Arc, Mutex};

    /// Canned provider recording the prompts it receives
    pub struct StubProvider {
        pub reply: Result<String, String>,
        pub received: Mutex<Vec<Vec<ChatMessage>>>,
    }

    impl StubProvider {
        pub fn answering(text: &str) -> Arc<Self> {
            Arc::new(Self {
                reply: Ok(text.to_string()),
                received: Mutex::new(Vec::new()),
            })
        }

        pub fn failing(error: &str) -> Arc<Self> {
            Arc::new(Self {
                reply: Err(error.to_string()),
                received: Mutex::new(Vec::new()),
            })
        }

        pub fn calls(&self) -> usize {
            self.received.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl LlmProvider for StubProvider {
        async fn chat_completion(
            &self,
            messages: Vec<ChatMessage>,
        ) -> Result<LlmResponse, LlmError> {
            self.received.lock().unwrap().push(messages);
            match &self.reply {
                Ok(text) => Ok(LlmResponse {
                    content: text.clone(),
                    tokens_used: Some(42),
                    model: "stub-model".to_string(),
                }),
                Err(e) => Err(LlmError::ApiError(e.clone())),
            }
        }

        fn provider_name(&self) -> &str {
            "Stub"
        }

        fn model_name(&self) -> &str {
            "stub-model"
        }
    }

    pub fn registry_with(provider: Arc<StubProvider>) -> ModelRegistry {
        ModelRegistry::new("gemini", vec![("gemini".to_string(), provider as Arc<dyn LlmProvider>)])
    }
}
