use thiserror::Error;

/// Errors that can occur while talking to the recipe service
#[derive(Error, Debug)]
pub enum ApiError {
    /// Transport-level failure (connection, timeout, TLS)
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The service answered with a non-success status
    #[error("unexpected HTTP status {code} for {url}")]
    Status { code: u16, url: String },

    /// The response body was not the expected JSON shape
    #[error("failed to decode response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),
}
