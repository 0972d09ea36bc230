use thiserror::Error;

/// Failures talking to the digest API.
///
/// `Display` is the text shown to the user, so transport failures and
/// `success: false` envelopes end up on the same path.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    /// Non-2xx status. `message` is the body's `message` when it had one.
    #[error("{message}")]
    Status { status: u16, message: String },

    /// 2xx response whose envelope said `success: false`.
    #[error("{0}")]
    Rejected(String),

    #[error("Invalid response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Invalid API URL: {0}")]
    InvalidUrl(String),
}
