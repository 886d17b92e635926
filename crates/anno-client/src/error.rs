//! Client error taxonomy

/// Errors an annotation server client can return
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// Transport-level failure (connection, timeout, decode)
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-success status
    #[error("server returned {status}: {message}")]
    Api { status: u16, message: String },

    /// The configured base URL (or a path joined onto it) is not valid
    #[error("invalid server url: {0}")]
    InvalidUrl(String),
}

pub type Result<T> = std::result::Result<T, ClientError>;
