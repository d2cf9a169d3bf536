use thiserror::Error;

/// Errors surfaced by Square API operations.
///
/// Nothing here is retried or classified further; every variant carries the
/// underlying cause and is fatal to the individual call.
#[derive(Debug, Error)]
pub enum APIError {
    /// Transport-level failure, including non-2xx statuses exactly as the
    /// HTTP client reports them.
    #[error("transport error: {0}")]
    Transport(#[from] ureq::Error),

    #[error("failed to build request: {0}")]
    Request(#[from] ureq::http::Error),

    #[error("JSON (de)serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    /// A batch submission exceeded the upstream ceiling of 30 requests.
    /// Raised before any network traffic.
    #[error("batch contains {0} requests, the Submit Batch endpoint accepts at most 30")]
    BatchTooLarge(usize),

    /// The `Link` response header did not contain a `<uri>` continuation.
    #[error("malformed Link header: {0}")]
    InvalidLinkHeader(String),

    #[error("missing environment variable: {0}")]
    EnvVar(#[from] std::env::VarError),
}
