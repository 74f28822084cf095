use thiserror::Error;

/// Transport-level failures from the remote store. The parser's errors never
/// appear here; by the time this crate is involved the record is already
/// assembled.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("no access token: pass --token or set {}", crate::session::TOKEN_ENV_VAR)]
    MissingToken,

    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The host answered with a non-success status; the response body is
    /// carried verbatim for the caller to report.
    #[error("{url} returned {status}: {body}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
        body: String,
    },
}
