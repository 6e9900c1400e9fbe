//! Raw HTTP reply as seen by the flows, before it is decoded.

use contracts::shared::ServerResponse;
use serde::de::DeserializeOwned;
use std::fmt;

/// Status flag and body text of a completed request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpReply {
    pub ok: bool,
    pub status: u16,
    pub body: String,
}

impl HttpReply {
    /// Decode the body into the endpoint's tagged response.
    ///
    /// A body that cannot be parsed counts as a network failure.
    pub fn decode<T: DeserializeOwned>(&self) -> Result<ServerResponse<T>, NetworkError> {
        ServerResponse::from_http(self.ok, &self.body).map_err(|e| {
            NetworkError(format!(
                "respuesta no válida del servidor (HTTP {}): {}",
                self.status, e
            ))
        })
    }
}

/// The request never produced a usable reply
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkError(pub String);

impl fmt::Display for NetworkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<gloo_net::Error> for NetworkError {
    fn from(e: gloo_net::Error) -> Self {
        NetworkError(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::ErrorResponse;
    use contracts::usecases::u602_ask_question::QueryResponse;

    #[test]
    fn test_decode_error_body() {
        let reply = HttpReply {
            ok: false,
            status: 500,
            body: r#"{"error":"boom"}"#.to_string(),
        };
        assert_eq!(
            reply.decode::<QueryResponse>(),
            Ok(ServerResponse::Failure(ErrorResponse::new("boom")))
        );
    }

    #[test]
    fn test_decode_garbage_is_network_error() {
        let reply = HttpReply {
            ok: false,
            status: 502,
            body: "Bad Gateway".to_string(),
        };
        let err = reply.decode::<QueryResponse>().unwrap_err();
        assert!(err.0.contains("HTTP 502"));
    }
}
