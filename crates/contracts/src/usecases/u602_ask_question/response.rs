use serde::{Deserialize, Serialize};

/// Body of a successful `POST /api/query`; `answer` may span several lines
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryResponse {
    pub answer: String,
}
