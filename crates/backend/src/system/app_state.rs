use crate::domain::a101_document::DocumentStore;
use crate::shared::config::Config;
use crate::shared::llm::ModelRegistry;
use std::sync::Arc;

/// Shared by all handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<DocumentStore>,
    pub models: Arc<ModelRegistry>,
    pub top_k: usize,
}

impl AppState {
    pub fn from_config(config: &Config) -> Self {
        Self {
            store: Arc::new(DocumentStore::new()),
            models: Arc::new(ModelRegistry::from_config(&config.llm)),
            top_k: config.retrieval.top_k,
        }
    }
}
