//! Fixed catalog of language models offered by the query selector.
//!
//! The backend maps each id to a concrete model name in its config.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LlmOption {
    pub id: &'static str,
    pub label: &'static str,
}

pub const LLM_OPTIONS: &[LlmOption] = &[
    LlmOption {
        id: "gemini",
        label: "Gemini 1.5 Flash",
    },
    LlmOption {
        id: "gpt",
        label: "GPT-4o mini",
    },
];

/// Id pre-selected in the UI
pub fn default_llm_id() -> &'static str {
    LLM_OPTIONS[0].id
}
