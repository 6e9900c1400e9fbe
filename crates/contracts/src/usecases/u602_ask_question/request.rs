use serde::{Deserialize, Serialize};

/// Body of `POST /api/query`
///
/// Both fields default to empty so the server can answer a missing
/// question with its own error body instead of a decoder rejection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryRequest {
    #[serde(default)]
    pub query: String,
    /// Id from [`crate::shared::llm_options::LLM_OPTIONS`]
    #[serde(default)]
    pub llm: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_query_and_llm() {
        let request = QueryRequest {
            query: "¿Qué es?".to_string(),
            llm: "gemini".to_string(),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json, serde_json::json!({ "query": "¿Qué es?", "llm": "gemini" }));
    }

    #[test]
    fn test_missing_fields_default_to_empty() {
        let request: QueryRequest = serde_json::from_str("{}").unwrap();
        assert!(request.query.is_empty());
        assert!(request.llm.is_empty());
    }
}
