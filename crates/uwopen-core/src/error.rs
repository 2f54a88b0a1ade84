use thiserror::Error;

/// Errors surfaced by client operations.
///
/// Upstream application failures (an envelope whose `meta.status` reports an
/// error) are not represented here: the envelope parses successfully and is
/// returned to the caller verbatim.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The GET could not be issued or the connection failed before any body
    /// was received (DNS, connect, TLS, timeout).
    #[error("transport failure: {0}")]
    Transport(String),

    /// The connection was established but the body could not be fully read.
    #[error("failed to read response body: {0}")]
    Read(String),

    /// The body was read but is not valid JSON.
    #[error("response is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// An operation was invoked with the wrong number of path parameters.
    #[error("{group}.{name} expects {expected} path parameter(s), got {supplied}")]
    SegmentCount {
        group: &'static str,
        name: &'static str,
        expected: usize,
        supplied: usize,
    },
}
