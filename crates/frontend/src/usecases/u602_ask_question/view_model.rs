use crate::shared::status::StatusMessage;
use contracts::shared::llm_options::default_llm_id;
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct AskQuestionVm {
    pub query: RwSignal<String>,
    pub llm: RwSignal<String>,
    pub result: RwSignal<Option<StatusMessage>>,
}

impl AskQuestionVm {
    pub fn new() -> Self {
        Self {
            query: RwSignal::new(String::new()),
            llm: RwSignal::new(default_llm_id().to_string()),
            result: RwSignal::new(None),
        }
    }
}

impl Default for AskQuestionVm {
    fn default() -> Self {
        Self::new()
    }
}
