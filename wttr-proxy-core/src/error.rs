use thiserror::Error;

/// Failures on the upstream fetch path.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Upstream answered with a non-2xx status. The code is carried so the
    /// HTTP layer can surface it verbatim; the message is fixed.
    #[error("Could not fetch weather data from wttr.in")]
    UpstreamStatus { status: u16 },

    /// The request never completed (connection failure or timeout).
    #[error("failed to reach wttr.in: {0}")]
    Transport(#[from] reqwest::Error),

    /// Upstream answered 2xx but the body was not a usable j1 document.
    #[error("failed to parse wttr.in response: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Failures while reshaping a parsed upstream document.
#[derive(Debug, Error)]
pub enum ShapeError {
    /// A sequence the shaper indexes into was empty.
    #[error("missing field in wttr.in response: {0}")]
    FieldMissing(&'static str),
}
