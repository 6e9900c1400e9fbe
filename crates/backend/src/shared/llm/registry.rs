//! Maps the `llm` id chosen in the UI to a configured provider.

use super::openai_provider::OpenAiProvider;
use super::types::LlmProvider;
use crate::shared::config::LlmConfig;
use std::sync::Arc;

pub struct ModelRegistry {
    default_id: String,
    providers: Vec<(String, Arc<dyn LlmProvider>)>,
}

impl ModelRegistry {
    pub fn new(default_id: impl Into<String>, providers: Vec<(String, Arc<dyn LlmProvider>)>) -> Self {
        Self {
            default_id: default_id.into(),
            providers,
        }
    }

    /// Build one provider per configured model, reading API keys from the environment
    pub fn from_config(config: &LlmConfig) -> Self {
        let providers = config
            .models
            .iter()
            .map(|m| {
                let api_key = std::env::var(&m.api_key_env)
                    .ok()
                    .filter(|k| !k.trim().is_empty());
                if api_key.is_none() {
                    tracing::warn!(
                        "LLM '{}': {} is not set, queries with this model will fail",
                        m.id,
                        m.api_key_env
                    );
                }
                let provider: Arc<dyn LlmProvider> = Arc::new(OpenAiProvider::new(
                    m.api_endpoint.clone(),
                    api_key,
                    m.model.clone(),
                    config.temperature,
                    config.max_tokens,
                ));
                (m.id.clone(), provider)
            })
            .collect();

        Self::new(config.default_model.clone(), providers)
    }

    /// Empty id selects the default model
    pub fn resolve(&self, id: &str) -> Option<Arc<dyn LlmProvider>> {
        let id = if id.trim().is_empty() {
            self.default_id.as_str()
        } else {
            id
        };
        self.providers
            .iter()
            .find(|(pid, _)| pid == id)
            .map(|(_, p)| Arc::clone(p))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::config::LlmModelConfig;

    fn config() -> LlmConfig {
        LlmConfig {
            default_model: "gemini".to_string(),
            temperature: 0.2,
            max_tokens: 512,
            models: vec![
                LlmModelConfig {
                    id: "gemini".to_string(),
                    model: "gemini-1.5-flash".to_string(),
                    api_endpoint: None,
                    api_key_env: "DOCQA_TEST_UNSET_KEY".to_string(),
                },
                LlmModelConfig {
                    id: "gpt".to_string(),
                    model: "gpt-4o-mini".to_string(),
                    api_endpoint: None,
                    api_key_env: "DOCQA_TEST_UNSET_KEY".to_string(),
                },
            ],
        }
    }

    #[test]
    fn test_resolve_by_id_and_default() {
        let registry = ModelRegistry::from_config(&config());
        assert_eq!(registry.resolve("gpt").unwrap().model_name(), "gpt-4o-mini");
        assert_eq!(registry.resolve("").unwrap().model_name(), "gemini-1.5-flash");
        assert!(registry.resolve("claude").is_none());
    }
}
