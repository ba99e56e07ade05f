/// Errors from a flow run. These never abort the process: the output layer
/// turns them into an `{"error": ...}` object.
use serde_json::{Value, json};
use thiserror::Error;

/// Why a flow run produced no usable response.
#[derive(Debug, Error)]
pub enum RunError {
    /// The server answered with a 4xx/5xx status.
    #[error("HTTP {status}: {body}")]
    Http {
        /// Numeric status code.
        status: u16,
        /// Response body as text.
        body: String,
    },

    /// Connection, DNS, TLS, or client setup failure.
    #[error("{0}")]
    Transport(String),

    /// The server answered with a success status but the body was not JSON.
    #[error("{0}")]
    Decode(String),
}

impl RunError {
    /// The response-shaped error object.
    #[must_use]
    pub fn to_json(&self) -> Value {
        json!({ "error": self.to_string() })
    }
}

/// Collapse a run result into the value that gets printed and saved.
#[must_use]
pub fn into_response(result: Result<Value, RunError>) -> Value {
    result.unwrap_or_else(|e| e.to_json())
}
