//! Unified SDK error types.

use thiserror::Error;

/// Top-level SDK error.
///
/// Every public operation returns this type. Variants map one-to-one onto the
/// stage at which a call failed: construction, argument validation, origin
/// resolution, the upstream response, or the transport.
#[derive(Error, Debug)]
pub enum SdkError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Origin unavailable: no trusted or browser origin could be resolved")]
    OriginUnavailable,

    #[error("Upstream API error {status}: {message}")]
    UpstreamApi { status: u16, message: String },

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Unexpected client error: {0}")]
    UnexpectedClient(String),
}

impl SdkError {
    /// HTTP status of an upstream rejection, if this error carries one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::UpstreamApi { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Transport-layer errors, produced by an [`HttpTransport`](crate::http::HttpTransport).
///
/// These never reach callers directly; the dispatch layer classifies them into
/// [`SdkError::Transport`] or [`SdkError::UnexpectedClient`].
#[derive(Error, Debug)]
pub enum HttpError {
    #[cfg(feature = "http")]
    #[error("Request failed: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("No response received: {0}")]
    Unreachable(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl HttpError {
    /// Whether the request left the client without a complete response coming
    /// back. A connection dropped while the body was streaming counts.
    pub fn is_unreachable(&self) -> bool {
        match self {
            #[cfg(feature = "http")]
            Self::Reqwest(e) => {
                let cut_off = e.is_body() || e.is_decode();
                #[cfg(not(target_arch = "wasm32"))]
                let no_response = e.is_connect() || e.is_timeout() || e.is_request();
                #[cfg(target_arch = "wasm32")]
                let no_response = e.is_timeout() || e.is_request();
                no_response || cut_off
            }
            Self::Unreachable(_) => true,
            Self::InvalidRequest(_) => false,
        }
    }
}

impl From<HttpError> for SdkError {
    fn from(err: HttpError) -> Self {
        if err.is_unreachable() {
            SdkError::Transport(err.to_string())
        } else {
            SdkError::UnexpectedClient(err.to_string())
        }
    }
}
