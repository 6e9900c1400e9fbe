use super::types::{ChatMessage, ChatRole, LlmError, LlmProvider, LlmResponse};
use async_openai::{
    config::OpenAIConfig,
    types::chat::{
        ChatCompletionRequestMessage, ChatCompletionRequestSystemMessageArgs,
        ChatCompletionRequestUserMessageArgs, CreateChatCompletionRequestArgs,
    },
    Client,
};
use async_trait::async_trait;

/// OpenAI-compatible chat completion provider
///
/// Works against any endpoint speaking the OpenAI chat API (OpenAI itself,
/// Gemini's compatibility endpoint, local gateways).
pub struct OpenAiProvider {
    /// `None` when no API key was configured; every call then fails
    client: Option<Client<OpenAIConfig>>,
    model: String,
    temperature: f32,
    max_tokens: u32,
}

impl OpenAiProvider {
    pub fn new(
        api_endpoint: Option<String>,
        api_key: Option<String>,
        model: String,
        temperature: f64,
        max_tokens: i32,
    ) -> Self {
        let client = api_key.map(|key| {
            let mut config = OpenAIConfig::new().with_api_key(key);
            if let Some(endpoint) = api_endpoint {
                config = config.with_api_base(endpoint);
            }
            Client::with_config(config)
        });

        Self {
            client,
            model,
            temperature: temperature as f32,
            max_tokens: max_tokens.max(1) as u32,
        }
    }

    fn convert_messages(
        &self,
        messages: Vec<ChatMessage>,
    ) -> Result<Vec<ChatCompletionRequestMessage>, LlmError> {
        messages
            .into_iter()
            .map(|msg| {
                let converted: ChatCompletionRequestMessage = match msg.role {
                    ChatRole::System => ChatCompletionRequestSystemMessageArgs::default()
                        .content(msg.content)
                        .build()
                        .map_err(|e| LlmError::InvalidRequest(e.to_string()))?
                        .into(),
                    ChatRole::User => ChatCompletionRequestUserMessageArgs::default()
                        .content(msg.content)
                        .build()
                        .map_err(|e| LlmError::InvalidRequest(e.to_string()))?
                        .into(),
                };
                Ok(converted)
            })
            .collect()
    }

    /// GPT-5 and o1/o3 models reject custom temperature and token limits
    fn supports_advanced_params(model_id: &str) -> bool {
        !(model_id.starts_with("gpt-5")
            || model_id.starts_with("o1-")
            || model_id.starts_with("o3-"))
    }
}

#[async_trait]
impl LlmProvider for OpenAiProvider {
    async fn chat_completion(&self, messages: Vec<ChatMessage>) -> Result<LlmResponse, LlmError> {
        let client = self.client.as_ref().ok_or_else(|| {
            LlmError::AuthError(format!("no API key configured for model '{}'", self.model))
        })?;

        let openai_messages = self.convert_messages(messages)?;

        let mut request_builder = CreateChatCompletionRequestArgs::default();
        request_builder.model(&self.model).messages(openai_messages);

        if Self::supports_advanced_params(&self.model) {
            request_builder
                .temperature(self.temperature)
                .max_completion_tokens(self.max_tokens);
        }

        let request = request_builder
            .build()
            .map_err(|e| LlmError::InvalidRequest(e.to_string()))?;

        let response = client.chat().create(request).await.map_err(|e| {
            let err_str = e.to_string();
            if err_str.contains("401") || err_str.contains("authentication") {
                LlmError::AuthError(err_str)
            } else if err_str.contains("429") || err_str.contains("rate limit") {
                LlmError::RateLimitExceeded
            } else {
                LlmError::ApiError(err_str)
            }
        })?;

        let choice = response
            .choices
            .first()
            .ok_or_else(|| LlmError::ApiError("No response from API".to_string()))?;

        Ok(LlmResponse {
            content: choice.message.content.clone().unwrap_or_default(),
            tokens_used: response.usage.map(|u| u.total_tokens as i32),
            model: response.model.clone(),
        })
    }

    fn provider_name(&self) -> &str {
        "OpenAI-compatible"
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_restricted_models_skip_advanced_params() {
        assert!(OpenAiProvider::supports_advanced_params("gpt-4o-mini"));
        assert!(OpenAiProvider::supports_advanced_params("gemini-1.5-flash"));
        assert!(!OpenAiProvider::supports_advanced_params("gpt-5-mini"));
        assert!(!OpenAiProvider::supports_advanced_params("o3-mini"));
    }

    #[tokio::test]
    async fn test_missing_api_key_is_auth_error() {
        let provider = OpenAiProvider::new(None, None, "gpt-4o-mini".to_string(), 0.2, 256);
        let err = provider
            .chat_completion(vec![ChatMessage::user("hola")])
            .await
            .unwrap_err();
        assert!(matches!(err, LlmError::AuthError(_)));
    }
}
