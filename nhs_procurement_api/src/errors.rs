//! Error types for the API client.

/// Errors that can occur when building the client or making API requests.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The base URL is empty or not an absolute URL.
    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(String),
    /// The API key cannot be sent as an HTTP header value.
    #[error("Invalid API key: not a valid header value")]
    InvalidApiKey,
    /// The request never completed (DNS, connection, timeout, body read).
    #[error("Request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),
    /// The server answered with a success status but the body was not the JSON we expected.
    #[error("Failed to parse response: {0}")]
    ParseFailed(#[from] serde_json::Error),
    /// The API returned a non-success status. `body` is the full response body.
    #[error("Request failed with status {status}")]
    HttpStatus { status: u16, body: String },
    /// A look-back window reaching before the earliest representable date.
    #[error("Date window of {0} days is out of range")]
    InvalidDateWindow(u32),
    /// Writing an export to disk failed.
    #[error("Failed to write export: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// True for failures where no usable response was obtained: the request
    /// could not complete, or the body could not be decoded.
    pub fn is_transport(&self) -> bool {
        matches!(self, Error::RequestFailed(_) | Error::ParseFailed(_))
    }

    /// The HTTP status code, if the server responded with a non-success status.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::HttpStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}
