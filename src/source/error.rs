use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while fetching the restaurant collection.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Source string is neither a URL nor a usable path
    #[error("Invalid source '{0}'")]
    InvalidSource(String),

    /// Request could not be sent or the connection failed
    #[error("Request to '{url}' failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Server answered with a non-success status
    #[error("'{url}' returned status {status}")]
    Status { url: String, status: u16 },

    /// Fetch exceeded the configured timeout
    #[error("Fetch timed out after {seconds}s")]
    Timeout { seconds: u64 },

    /// Local file could not be read
    #[error("Failed to read '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Payload is not a JSON array of restaurants
    #[error("Invalid restaurant data from '{origin}': {source}")]
    Decode {
        origin: String,
        #[source]
        source: serde_json::Error,
    },
}

impl FetchError {
    /// Short label used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            FetchError::InvalidSource(_) => "invalid_source",
            FetchError::Request { .. } => "request",
            FetchError::Status { .. } => "status",
            FetchError::Timeout { .. } => "timeout",
            FetchError::Read { .. } => "read",
            FetchError::Decode { .. } => "decode",
        }
    }
}
