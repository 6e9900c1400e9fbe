//! Tagged result of a call to one of the JSON endpoints.
//!
//! Every endpoint answers either with its own success body (2xx) or with
//! [`ErrorResponse`] (non-2xx). [`ServerResponse::from_http`] folds the HTTP
//! status and the raw body into one exhaustive enum.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Error body shared by all endpoints
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServerResponse<T> {
    Success(T),
    Failure(ErrorResponse),
}

impl<T: DeserializeOwned> ServerResponse<T> {
    /// Decode a response body according to its HTTP status.
    ///
    /// A body that does not match the shape expected for the status is a
    /// decoding error, not a server failure.
    pub fn from_http(ok: bool, body: &str) -> Result<Self, serde_json::Error> {
        if ok {
            serde_json::from_str(body).map(ServerResponse::Success)
        } else {
            serde_json::from_str(body).map(ServerResponse::Failure)
        }
    }
}
