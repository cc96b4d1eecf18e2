//! Error types for curlify

use thiserror::Error;

/// Main error type for curlify
#[derive(Error, Debug)]
pub enum CurlifyError {
    /// The request body stream could not be fully drained.
    ///
    /// The body is single-use, so a failed read is not retried; no partial
    /// command is returned.
    #[error("Body read error: {0}")]
    BodyRead(#[from] std::io::Error),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),
}

pub type Result<T> = std::result::Result<T, CurlifyError>;
