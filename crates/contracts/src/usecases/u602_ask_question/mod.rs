pub mod request;
pub mod response;

pub use request::QueryRequest;
pub use response::QueryResponse;

/// Endpoint answering a question against the uploaded documents
pub const QUERY_PATH: &str = "/api/query";
