//! Transport-level errors shared by every HTTP adapter

/// Errors raised while talking to the portal server.
///
/// Application-level failures (`success: false`) are not transport errors;
/// they travel inside a successfully decoded response body.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (DNS, connection refused, CORS, ...)
    #[error("Request failed: {0}")]
    RequestFailed(String),
    /// A read-only endpoint answered with a non-2xx status
    #[error("HTTP {status}: {message}")]
    Status { status: u16, message: String },
    /// The response body was not the JSON we expected
    #[error("Failed to parse response: {0}")]
    ParseError(String),
    /// The request body could not be encoded
    #[error("Failed to serialize request: {0}")]
    SerializeError(String),
}
