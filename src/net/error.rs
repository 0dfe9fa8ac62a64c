//! Failure kinds for backend requests.
//!
//! DESIGN
//! ======
//! Every failure is classified at the point it occurs into one closed kind,
//! and the run flow matches on the kind, never on message text, to decide
//! whether a retry is warranted and whether the banner should show anything.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use thiserror::Error;

/// One request's failure, classified where it happened.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The request never produced a response (DNS, connection, CORS, ...).
    #[error("network request failed: {0}")]
    Network(String),
    /// The server answered with an HTML document instead of JSON, typically
    /// a proxy error page or a misrouted request.
    #[error("server returned HTML instead of JSON")]
    UnexpectedContentType,
    /// The response body could not be parsed as JSON.
    #[error("malformed non-JSON response")]
    MalformedBody,
    /// The server answered well-formed JSON reporting a failure.
    #[error("{0}")]
    ServerReported(String),
    /// The user aborted the request; reported by toast, never the banner.
    #[error("request canceled")]
    Canceled,
}

impl FetchError {
    /// Whether this failure is likely transient and worth one automatic
    /// retry. Server-reported failures are logical outcomes, and a
    /// cancellation is a user decision; neither is retried.
    #[must_use]
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            Self::Network(_) | Self::UnexpectedContentType | Self::MalformedBody
        )
    }
}
