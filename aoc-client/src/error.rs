//! Client error types.

use thiserror::Error;

/// Error raised while talking to the puzzle site or reading its pages.
#[derive(Error, Debug)]
pub enum ClientError {
    /// HTTP request failed.
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The site answered with an unexpected status.
    ///
    /// Redirects land here too: the client never follows them, and for an
    /// authenticated fetch a redirect means the session cookie was rejected.
    #[error("unexpected HTTP status: {status}")]
    InvalidStatus { status: reqwest::StatusCode },

    /// Response body was not valid UTF-8.
    #[error("failed to decode response as UTF-8")]
    Encoding,

    /// The puzzle page did not have the structure we scrape for.
    #[error("failed to parse puzzle page: {0}")]
    PageParse(String),

    /// HTTP client or URL configuration failed.
    #[error("client initialization failed: {0}")]
    ClientInit(String),
}
