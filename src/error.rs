/// Errors produced by the Feedbin API client.
///
/// Nothing here is retried: configuration problems are checkable before any
/// I/O, and upstream/transport failures are surfaced verbatim to the caller.
#[derive(Debug, thiserror::Error)]
pub enum FeedbinError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("feedbin returned {status}: {body}")]
    Upstream {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("failed to encode response: {0}")]
    Encode(#[from] serde_json::Error),
}
